use core::borrow::Borrow;
use core::fmt;

use crate::DEFAULT_STAGE;
use crate::error::StageTreeError;
use crate::raw::{MIN_STAGE, RawStageTreeMap};

/// An ordered map implemented as a classic [B-Tree] with a configurable
/// branching order.
///
/// Given a key type with a [total order], the map stores its entries in key
/// order, so keys must implement [`Ord`]. The branching order (the *stage*,
/// `t`) is chosen at construction and fixed for the lifetime of the map:
/// every node except the root holds between `t - 1` and `2t - 1` entries,
/// every leaf sits at the same depth, and all point operations complete in
/// `O(log n)` node visits. [`StageTreeMap::new`] uses [`DEFAULT_STAGE`];
/// [`StageTreeMap::with_stage`] picks a wider fan-out, which trades a
/// shallower tree for more comparisons per node.
///
/// Keys are unique: inserting a key that is already present replaces its
/// value and hands the previous one back, exactly like the standard
/// library's `BTreeMap`.
///
/// This is a point-lookup container: it deliberately exposes no iterators
/// or range queries. Nodes live in a handle-addressed arena owned by the
/// map, so the map is a strict ownership tree and cloning it deep-copies
/// every node.
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key changes while it is in the map. The
/// behavior resulting from such a logic error is not specified, but will
/// not result in undefined behavior: lookups may fail or return the wrong
/// entry until the offending key is removed.
///
/// # Examples
///
/// ```
/// use stage_tree::StageTreeMap;
///
/// let mut movie_reviews = StageTreeMap::new();
///
/// // review some movies.
/// movie_reviews.insert("Office Space", "Deals with real issues in the workplace.");
/// movie_reviews.insert("Pulp Fiction", "Masterpiece.");
/// movie_reviews.insert("The Godfather", "Very enjoyable.");
/// movie_reviews.insert("The Blues Brothers", "Eye lyked it a lot.");
///
/// // check for a specific one.
/// assert!(movie_reviews.contains_key("Pulp Fiction"));
///
/// // oops, this review has a lot of spelling mistakes, let's delete it.
/// movie_reviews.remove("The Blues Brothers");
/// assert_eq!(movie_reviews.len(), 3);
///
/// // look up the values associated with some keys.
/// assert_eq!(movie_reviews.get("Office Space"), Some(&"Deals with real issues in the workplace."));
/// assert_eq!(movie_reviews.get("The Blues Brothers"), None);
/// ```
///
/// A map with a known list of entries can be collected directly:
///
/// ```
/// use stage_tree::StageTreeMap;
///
/// let solar_distance: StageTreeMap<&str, f64> = [
///     ("Mercury", 0.4),
///     ("Venus", 0.7),
///     ("Earth", 1.0),
///     ("Mars", 1.5),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(solar_distance.get("Earth"), Some(&1.0));
/// ```
///
/// [B-Tree]: https://en.wikipedia.org/wiki/B-tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
#[derive(Clone)]
pub struct StageTreeMap<K, V> {
    raw: RawStageTreeMap<K, V>,
}

impl<K, V> StageTreeMap<K, V> {
    /// Creates an empty map with the [`DEFAULT_STAGE`] branching order.
    ///
    /// # Examples
    ///
    /// ```
    /// use stage_tree::{DEFAULT_STAGE, StageTreeMap};
    ///
    /// let map: StageTreeMap<i32, &str> = StageTreeMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.stage(), DEFAULT_STAGE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            raw: RawStageTreeMap::new(DEFAULT_STAGE),
        }
    }

    /// Creates an empty map with the given branching order.
    ///
    /// # Errors
    ///
    /// Returns [`StageTreeError::InvalidStage`] when `stage < 2`; a node
    /// must be able to hold at least one entry at minimum occupancy. The
    /// stage is never silently clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use stage_tree::{StageTreeError, StageTreeMap};
    ///
    /// let map: StageTreeMap<i32, i32> = StageTreeMap::with_stage(8).unwrap();
    /// assert_eq!(map.stage(), 8);
    ///
    /// let error = StageTreeMap::<i32, i32>::with_stage(1).unwrap_err();
    /// assert_eq!(error, StageTreeError::InvalidStage { stage: 1 });
    /// ```
    pub fn with_stage(stage: usize) -> Result<Self, StageTreeError> {
        if stage < MIN_STAGE {
            return Err(StageTreeError::InvalidStage { stage });
        }
        Ok(Self {
            raw: RawStageTreeMap::new(stage),
        })
    }

    /// Returns the branching order this map was constructed with.
    #[must_use]
    pub fn stage(&self) -> usize {
        self.raw.stage()
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use stage_tree::StageTreeMap;
    ///
    /// let mut map = StageTreeMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every entry, leaving an empty map with the same stage.
    pub fn clear(&mut self) {
        self.raw.clear();
    }
}

impl<K: Ord, V> StageTreeMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the
    /// ordering on the borrowed form *must* match the ordering on the key
    /// type.
    ///
    /// # Examples
    ///
    /// ```
    /// use stage_tree::StageTreeMap;
    ///
    /// let mut map = StageTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use stage_tree::StageTreeMap;
    ///
    /// let mut map = StageTreeMap::new();
    /// map.insert(1, "a");
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value = "b";
    /// }
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns the key-value pair corresponding to the key.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns `true` if the map contains the given key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains_key(key)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key was already present the value is replaced and the old
    /// value returned; the key itself is not updated. Duplicate keys are
    /// never stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use stage_tree::StageTreeMap;
    ///
    /// let mut map = StageTreeMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// Removing a key that is not in the map is a no-op and returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stage_tree::StageTreeMap;
    ///
    /// let mut map = StageTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key)
    }

    /// Removes a key from the map, returning the stored key-value pair if
    /// the key was present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }
}

impl<K, V> Default for StageTreeMap<K, V> {
    /// Creates an empty map with the [`DEFAULT_STAGE`] branching order.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for StageTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.raw.visit_in_order(|key, value| {
            map.entry(key, value);
        });
        map.finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for StageTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for StageTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
