//! Errors reported by list mutations.

use thiserror::Error;

/// A structural change addressed items that do not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// An insertion point past the end of the list.
    #[error("index {index} is out of bounds for a list of {len} items")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of items at the time of the call.
        len: usize,
    },
    /// A deletion range that is reversed or reaches past the end of the list.
    #[error("range {start}..{end} is out of bounds for a list of {len} items")]
    RangeOutOfBounds {
        /// Start of the requested range.
        start: usize,
        /// End of the requested range.
        end: usize,
        /// Number of items at the time of the call.
        len: usize,
    },
}
