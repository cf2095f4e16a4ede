//! Errors from validated tree construction.

use thiserror::Error;

use crate::tree::Key;

/// Why [`Tree::try_from_sorted`](crate::Tree::try_from_sorted) refused its input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// A key is smaller than the key before it.
    #[error("keys are not sorted: {key} at index {index} follows {previous}")]
    Unsorted {
        /// Position of the out-of-order key.
        index: usize,
        /// The key right before it.
        previous: Key,
        /// The out-of-order key.
        key: Key,
    },

    /// A key appears more than once.
    #[error("duplicate key {key} at index {index}")]
    Duplicate {
        /// Position of the second occurrence.
        index: usize,
        /// The repeated key.
        key: Key,
    },
}

/// Result of validated tree construction.
pub type BuildResult<T> = Result<T, BuildError>;
