use thiserror::Error;

/// Reasons a sequence is rejected as a permutation, a Lehmer code or a cycle set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    #[error("value {value} at position {position} is out of range for size {size}")]
    ValueOutOfRange {
        position: usize,
        value: usize,
        size: usize,
    },

    #[error("value {value} appears more than once (again at position {position})")]
    DuplicateValue { position: usize, value: usize },

    #[error("Lehmer digit {digit} at position {position} exceeds its bound {bound}")]
    DigitOutOfRange {
        position: usize,
        digit: usize,
        bound: usize,
    },

    #[error("cycles are not disjoint: index {index} appears twice")]
    OverlappingCycles { index: usize },

    #[error("cycles do not cover index {index}")]
    MissingIndex { index: usize },

    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}
