use thiserror::Error;

use crate::priority::PriorityKind;

/// Everything that can go wrong while registering candidates or drawing them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("priorities must be larger than 0, got {priority}")]
    InvalidPriority { priority: i32 },

    #[error("got {priorities} priorities for {values} values")]
    CountMismatch { values: usize, priorities: usize },

    #[error("cannot register a {requested} priority in a selection already using {existing}")]
    MixedPriorityKind {
        existing: PriorityKind,
        requested: PriorityKind,
    },

    #[error("percentages sum to {sum}, which exceeds 100")]
    PercentageOverflow { sum: i64 },

    #[error("weights sum to {sum}, which exceeds {}", i32::MAX)]
    PriorityOverflow { sum: i64 },

    #[error("draw count must be at least 1, got {requested}")]
    InvalidCount { requested: usize },

    #[error("cannot draw {requested} distinct values out of {available}")]
    NotEnoughValues { requested: usize, available: usize },

    /// The live entry set was empty during a draw. Validation upstream should
    /// make this unreachable; seeing it means a bug, not bad input.
    #[error("no live entries left to sample from")]
    SamplingExhausted,

    #[error("invalid random range [{min}, {max})")]
    InvalidBound { min: i32, max: i32 },
}
