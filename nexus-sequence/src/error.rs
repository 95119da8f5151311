//! Error types for sequence operations.

use core::fmt;

/// Errors returned by [`ArraySequence`](crate::ArraySequence),
/// [`LinkedSequence`](crate::LinkedSequence), and their cursors.
///
/// Every error is reported before the container is touched, so a failed
/// call leaves the sequence exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A value-accepting operation was given `None`.
    NullValue,
    /// An index fell outside the range valid for the operation.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Sequence length at the time of the call.
        len: usize,
    },
    /// A cursor was advanced past the last element.
    NoMoreElements,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullValue => write!(f, "value must not be null"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::NoMoreElements => write!(f, "no more elements"),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Unwraps a boundary value, rejecting `None`.
#[inline]
pub(crate) fn require(value: Option<i32>) -> Result<i32> {
    value.ok_or(Error::NullValue)
}

/// Checks `index < len` (element access).
#[inline]
pub(crate) fn check_element(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// Checks `index <= len` (insertion position).
#[inline]
pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}
