use thiserror::Error;

/// Returned by [`BitArray::at`](crate::BitArray::at) when the index is not
/// below the array's bit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index out of range")]
pub struct IndexOutOfRange;
