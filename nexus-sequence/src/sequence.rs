//! The contract shared by both sequence variants.
//!
//! [`ArraySequence`](crate::ArraySequence) and
//! [`LinkedSequence`](crate::LinkedSequence) expose the same operations with
//! different cost profiles. [`Sequence`] captures that surface so callers can
//! be written once against either representation.

use crate::Result;

/// An ordered, index-addressable sequence of `i32` values.
///
/// Value-accepting operations take `Option<i32>` and reject `None` with
/// [`Error::NullValue`](crate::Error::NullValue). Indices are 0-based.
///
/// # Example
///
/// ```
/// use nexus_sequence::{ArraySequence, LinkedSequence, Sequence};
///
/// fn fill<S: Sequence>(seq: &mut S) {
///     for v in [1, 2, 3] {
///         seq.insert(seq.len(), Some(v)).unwrap();
///     }
/// }
///
/// let mut array = ArraySequence::new();
/// let mut linked = LinkedSequence::new();
/// fill(&mut array);
/// fill(&mut linked);
///
/// assert_eq!(array.get(2), linked.get(2));
/// ```
pub trait Sequence {
    /// Adds a value using the variant's primary insertion primitive.
    ///
    /// Appends for the array variant, prepends for the linked variant.
    fn push(&mut self, value: Option<i32>) -> Result<()>;

    /// Inserts `value` at `index`, shifting later elements toward the end.
    ///
    /// `index == len()` is equivalent to appending.
    fn insert(&mut self, index: usize, value: Option<i32>) -> Result<()>;

    /// Removes and returns the value at `index`.
    fn remove_at(&mut self, index: usize) -> Result<i32>;

    /// Returns the value at `index`.
    fn get(&self, index: usize) -> Result<i32>;

    /// Replaces the value at `index`.
    fn set(&mut self, index: usize, value: Option<i32>) -> Result<()>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the first index holding `value`, or `None` if absent.
    fn index_of(&self, value: Option<i32>) -> Result<Option<usize>>;

    /// Removes every element.
    fn clear(&mut self);

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `value` occurs in the sequence.
    #[inline]
    fn contains(&self, value: Option<i32>) -> Result<bool> {
        Ok(self.index_of(value)?.is_some())
    }
}

/// Forward cursor over a sequence.
///
/// A cursor never mutates the sequence it walks. Each call to a container's
/// `cursor()` starts a fresh pass at position 0.
pub trait Cursor {
    /// Returns `true` if [`try_next`](Cursor::try_next) would yield a value.
    fn has_next(&self) -> bool;

    /// Yields the next value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMoreElements`](crate::Error::NoMoreElements) once
    /// the cursor has passed the last element.
    fn try_next(&mut self) -> Result<i32>;
}
