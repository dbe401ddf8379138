mod arena;
mod handle;
mod node;
mod raw_stage_tree_map;

pub(crate) use node::MIN_STAGE;
pub(crate) use raw_stage_tree_map::RawStageTreeMap;
