use thiserror::Error;

/// Error types for `DynArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// Index is beyond the current array length
    #[error("Index out of range: index {index} is beyond array length {length}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
    /// `pop_back` called on an empty array
    #[error("Underflow: pop_back called on an empty array")]
    Underflow,
    /// Cursor offset falls outside the legal range for the operation
    #[error("Cursor out of bounds: offset {offset} is outside the legal range for array length {length}")]
    CursorOutOfBounds {
        /// Offset carried by the cursor
        offset: usize,
        /// Current length of the array
        length: usize,
    },
    /// The array storage was reallocated after the cursor was taken
    #[error("Stale cursor: the array storage was reallocated after the cursor was taken")]
    StaleCursor,
    /// The cursor was issued by a different array
    #[error("Foreign cursor: the cursor was issued by a different array")]
    ForeignCursor,
}
