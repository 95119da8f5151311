//! Singly-linked sequence.
//!
//! [`LinkedSequence`] owns a chain of boxed nodes. Each node exclusively owns
//! its successor, so unlinking a node releases it on the spot and the chain
//! can never form a cycle. The primary insertion primitive is
//! [`prepend`](LinkedSequence::prepend); indexed operations walk from the head.
//!
//! # Example
//!
//! ```
//! use nexus_sequence::{Cursor, Error, LinkedSequence};
//!
//! let mut seq = LinkedSequence::new();
//! seq.prepend(Some(1)).unwrap();
//! seq.prepend(Some(2)).unwrap();
//! seq.prepend(Some(3)).unwrap();
//!
//! assert_eq!(seq.remove_at(1), Ok(2));
//!
//! let mut cursor = seq.cursor();
//! assert_eq!(cursor.try_next(), Ok(3));
//! assert_eq!(cursor.try_next(), Ok(1));
//! assert_eq!(cursor.try_next(), Err(Error::NoMoreElements));
//! ```
//!
//! # Costs
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `prepend` | O(1) |
//! | `insert` / `remove_at` / `get` / `set` | O(index) |
//! | `index_of` / `contains` | O(len) |

use core::fmt;

use crate::error::{check_element, check_position, require};
use crate::sequence::{Cursor, Sequence};
use crate::{Error, Result};

type Link = Option<Box<Node>>;

struct Node {
    value: i32,
    next: Link,
}

/// A sequence of `i32` stored as a singly-linked chain.
///
/// `len` always equals the number of nodes reachable from `head`.
pub struct LinkedSequence {
    head: Link,
    len: usize,
}

impl LinkedSequence {
    /// Creates an empty sequence.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` at the front.
    ///
    /// # Errors
    ///
    /// [`Error::NullValue`] if `value` is `None`.
    pub fn prepend(&mut self, value: Option<i32>) -> Result<()> {
        let value = require(value)?;
        self.link_front(value);
        Ok(())
    }

    /// Inserts `value` at `index`.
    ///
    /// Index 0 is a [`prepend`](Self::prepend); otherwise the new node is
    /// spliced in after the node at `index - 1`.
    ///
    /// # Errors
    ///
    /// [`Error::NullValue`] if `value` is `None`, [`Error::IndexOutOfRange`]
    /// if `index > len`.
    pub fn insert(&mut self, index: usize, value: Option<i32>) -> Result<()> {
        let value = require(value)?;
        check_position(index, self.len)?;

        if index == 0 {
            self.link_front(value);
            return Ok(());
        }

        let len = self.len;
        let pred = self
            .node_mut(index - 1)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        let next = pred.next.take();
        pred.next = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<i32> {
        check_element(index, self.len)?;

        let len = self.len;
        let removed = if index == 0 {
            unlink(&mut self.head)
        } else {
            self.node_mut(index - 1)
                .and_then(|pred| unlink(&mut pred.next))
        };
        let value = removed.ok_or(Error::IndexOutOfRange { index, len })?;
        self.len -= 1;
        Ok(value)
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<i32> {
        check_element(index, self.len)?;
        self.node(index)
            .map(|node| node.value)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Replaces the value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::NullValue`] if `value` is `None`, [`Error::IndexOutOfRange`]
    /// if `index >= len`.
    pub fn set(&mut self, index: usize, value: Option<i32>) -> Result<()> {
        let value = require(value)?;
        check_element(index, self.len)?;

        let len = self.len;
        let node = self
            .node_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        node.value = value;
        Ok(())
    }

    /// Returns the first index holding `value`, or `None` if it is absent.
    ///
    /// # Errors
    ///
    /// [`Error::NullValue`] if `value` is `None`.
    pub fn index_of(&self, value: Option<i32>) -> Result<Option<usize>> {
        let value = require(value)?;
        Ok(self.cursor().position(|v| v == value))
    }

    /// Returns `true` if `value` occurs in the sequence.
    ///
    /// # Errors
    ///
    /// [`Error::NullValue`] if `value` is `None`.
    #[inline]
    pub fn contains(&self, value: Option<i32>) -> Result<bool> {
        Ok(self.index_of(value)?.is_some())
    }

    /// Removes every element, releasing the whole chain.
    pub fn clear(&mut self) {
        log::trace!("linked sequence cleared: len={}", self.len);
        release(self.head.take());
        self.len = 0;
    }

    /// Returns a cursor positioned before the first element.
    #[inline]
    pub fn cursor(&self) -> LinkedCursor<'_> {
        LinkedCursor {
            current: self.head.as_deref(),
            remaining: self.len,
        }
    }

    fn link_front(&mut self, value: i32) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Walks `index` hops from the head.
    fn node(&self, index: usize) -> Option<&Node> {
        let mut node = self.head.as_deref()?;
        for _ in 0..index {
            node = node.next.as_deref()?;
        }
        Some(node)
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
        let mut node = self.head.as_deref_mut()?;
        for _ in 0..index {
            node = node.next.as_deref_mut()?;
        }
        Some(node)
    }
}

/// Detaches the node held by `link`, splicing its successor into place.
fn unlink(link: &mut Link) -> Option<i32> {
    let node = link.take()?;
    let Node { value, next } = *node;
    *link = next;
    Some(value)
}

/// Drops a chain one node at a time.
///
/// Recursive `Box` drops would use stack proportional to the chain length.
fn release(mut link: Link) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

/// Reverses a chain in place, returning the new head.
fn reverse(mut link: Link) -> Link {
    let mut reversed = None;
    while let Some(mut node) = link {
        link = node.next.take();
        node.next = reversed;
        reversed = Some(node);
    }
    reversed
}

impl Default for LinkedSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedSequence {
    fn drop(&mut self) {
        release(self.head.take());
    }
}

impl Clone for LinkedSequence {
    fn clone(&self) -> Self {
        self.cursor().collect()
    }
}

impl PartialEq for LinkedSequence {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.cursor().eq(other.cursor())
    }
}

impl Eq for LinkedSequence {}

impl fmt::Debug for LinkedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cursor()).finish()
    }
}

impl Extend<i32> for LinkedSequence {
    /// Appends in iteration order.
    ///
    /// The chain is reversed so new values can be linked at its front, then
    /// reversed back. O(len + n).
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        self.head = reverse(self.head.take());
        for value in iter {
            self.link_front(value);
        }
        self.head = reverse(self.head.take());
    }
}

impl FromIterator<i32> for LinkedSequence {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<'a> IntoIterator for &'a LinkedSequence {
    type Item = i32;
    type IntoIter = LinkedCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl Sequence for LinkedSequence {
    #[inline]
    fn push(&mut self, value: Option<i32>) -> Result<()> {
        self.prepend(value)
    }

    #[inline]
    fn insert(&mut self, index: usize, value: Option<i32>) -> Result<()> {
        LinkedSequence::insert(self, index, value)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> Result<i32> {
        LinkedSequence::remove_at(self, index)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<i32> {
        LinkedSequence::get(self, index)
    }

    #[inline]
    fn set(&mut self, index: usize, value: Option<i32>) -> Result<()> {
        LinkedSequence::set(self, index, value)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn index_of(&self, value: Option<i32>) -> Result<Option<usize>> {
        LinkedSequence::index_of(self, value)
    }

    #[inline]
    fn clear(&mut self) {
        LinkedSequence::clear(self)
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// Forward cursor over a [`LinkedSequence`].
///
/// Holds a reference to the next node to yield.
#[derive(Clone)]
pub struct LinkedCursor<'a> {
    current: Option<&'a Node>,
    remaining: usize,
}

impl fmt::Debug for LinkedCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedCursor")
            .field("next", &self.current.map(|node| node.value))
            .field("remaining", &self.remaining)
            .finish()
    }
}

impl Cursor for LinkedCursor<'_> {
    #[inline]
    fn has_next(&self) -> bool {
        self.current.is_some()
    }

    #[inline]
    fn try_next(&mut self) -> Result<i32> {
        let node = self.current.ok_or(Error::NoMoreElements)?;
        self.current = node.next.as_deref();
        self.remaining -= 1;
        Ok(node.value)
    }
}

impl Iterator for LinkedCursor<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        self.try_next().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LinkedCursor<'_> {}
