use thiserror::Error;

/// Failure of a checked [`GrowArray`](crate::GrowArray) operation.
///
/// Checked operations validate their arguments before touching the buffer,
/// so an `Err` always means the array is unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// The operation needs at least one element.
    #[error("{op} on empty array")]
    EmptyContainer { op: &'static str },

    /// The index argument is past the bound the operation accepts.
    ///
    /// `insert` accepts `index == len`; `remove` and `at` require `index < len`.
    #[error("{op} index {index} out of range for length {len}")]
    IndexOutOfRange {
        op: &'static str,
        index: usize,
        len: usize,
    },
}
