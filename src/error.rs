use core::fmt;

/// Error returned when constructing a tree with an unusable configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StageTreeError {
    /// The requested stage cannot form a valid B-tree. A stage-`t` node
    /// holds between `t - 1` and `2t - 1` entries, which requires `t >= 2`.
    InvalidStage {
        /// The rejected stage value.
        stage: usize,
    },
}

impl fmt::Display for StageTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStage { stage } => {
                write!(f, "invalid stage {stage}: a B-tree requires a stage of at least 2")
            }
        }
    }
}

impl core::error::Error for StageTreeError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_names_the_rejected_stage() {
        let error = StageTreeError::InvalidStage { stage: 1 };
        assert_eq!(error.to_string(), "invalid stage 1: a B-tree requires a stage of at least 2");
    }
}
