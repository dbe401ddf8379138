//! A classic B-tree ordered map for Rust.
//!
//! This crate provides [`StageTreeMap`], an in-memory ordered associative
//! container with a branching order (the *stage*, `t`) chosen at
//! construction. Lookups, insertions, and removals all run in `O(log n)`
//! node visits: insertion splits overfull nodes bottom-up, removal borrows
//! from or merges with siblings on a single proactive descent, and every
//! leaf stays at the same depth throughout.
//!
//! # Example
//!
//! ```
//! use stage_tree::StageTreeMap;
//!
//! let mut scores = StageTreeMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//!
//! // Inserting an existing key replaces the value.
//! assert_eq!(scores.insert("Bob", 88), Some(85));
//!
//! scores.remove(&"Carol");
//! assert_eq!(scores.len(), 2);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library
//!   dependency
//! - **Runtime branching order** - The stage is a constructor argument, not
//!   a type parameter; [`DEFAULT_STAGE`] covers the common case
//! - **Strict ownership** - Nodes live in a handle-addressed arena owned by
//!   the map; no reference counting, no unsafe code
//!
//! # Implementation
//!
//! Each node stores its sorted entries and child handles in contiguous
//! arrays, so a descent binary-searches one cache-friendly slice per level.
//! Parent back-references (a handle plus the node's position in its
//! parent's child list) let split propagation walk upward without an
//! auxiliary stack, the arena making such cycles safe to express.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

extern crate alloc;

mod error;
mod raw;

pub mod stage_tree_map;

pub use error::StageTreeError;
pub use stage_tree_map::StageTreeMap;

/// Default branching order ("stage") used by [`StageTreeMap::new`].
pub const DEFAULT_STAGE: usize = 2;
