//! Array-backed sequence with doubling growth.
//!
//! [`ArraySequence`] keeps its elements in a single contiguous heap buffer it
//! allocates and frees itself. The buffer starts at [`DEFAULT_CAPACITY`] slots
//! and doubles whenever an insertion finds it full. It never shrinks, not even
//! on [`clear`](ArraySequence::clear).
//!
//! # Example
//!
//! ```
//! use nexus_sequence::ArraySequence;
//!
//! let mut seq = ArraySequence::new();
//! seq.append(Some(5)).unwrap();
//! seq.append(Some(3)).unwrap();
//! seq.insert(1, Some(9)).unwrap();
//!
//! assert_eq!(seq.as_slice(), &[5, 9, 3]);
//! assert_eq!(seq.remove_at(0), Ok(5));
//! assert_eq!(seq.index_of(Some(3)), Ok(Some(1)));
//! assert_eq!(seq.contains(Some(7)), Ok(false));
//! ```
//!
//! # Costs
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `append` | amortized O(1) |
//! | `insert` / `remove_at` | O(len - index) |
//! | `get` / `set` | O(1) |
//! | `index_of` / `contains` | O(len) |

use core::fmt;
use core::ptr::{self, NonNull};
use std::alloc::{Layout, alloc, dealloc, handle_alloc_error};

use crate::error::{check_element, check_position, require};
use crate::sequence::{Cursor, Sequence};
use crate::{Error, Result};

/// Capacity of a sequence built with [`ArraySequence::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable sequence of `i32` backed by a contiguous buffer.
pub struct ArraySequence {
    /// Start of the buffer. Slots `[0, len)` are initialized.
    ptr: NonNull<i32>,
    /// Allocated slots (always > 0).
    cap: usize,
    len: usize,
}

impl ArraySequence {
    /// Creates an empty sequence with capacity [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty sequence with room for `capacity` elements.
    ///
    /// A capacity of 0 is raised to 1 so that doubling always makes room.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = capacity.max(1);
        Self {
            ptr: allocate(cap),
            cap,
            len: 0,
        }
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

    /// Returns the number of slots in the current buffer.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        // Safety: ptr is valid for cap slots and [0, len) are initialized
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Appends `value` to the end.
    ///
    /// # Errors
    ///
    /// [`Error::NullValue`] if `value` is `None`.
    pub fn append(&mut self, value: Option<i32>) -> Result<()> {
        let value = require(value)?;
        self.reserve_one();
        // Safety: reserve_one guarantees len < cap
        unsafe { self.ptr.as_ptr().add(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// # Errors
    ///
    /// [`Error::NullValue`] if `value` is `None`, [`Error::IndexOutOfRange`]
    /// if `index > len`.
    pub fn insert(&mut self, index: usize, value: Option<i32>) -> Result<()> {
        let value = require(value)?;
        check_position(index, self.len)?;
        self.reserve_one();

        // Safety: index <= len < cap, so both the shifted range and the
        // write target lie inside the allocation.
        unsafe {
            let p = self.ptr.as_ptr().add(index);
            ptr::copy(p, p.add(1), self.len - index);
            p.write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the value at `index`, shifting later elements left.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<i32> {
        check_element(index, self.len)?;

        // Safety: index < len, so the read and the shifted tail are initialized
        let value = unsafe {
            let p = self.ptr.as_ptr().add(index);
            let value = p.read();
            ptr::copy(p.add(1), p, self.len - index - 1);
            value
        };
        self.len -= 1;
        Ok(value)
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<i32> {
        check_element(index, self.len)?;
        Ok(self.as_slice()[index])
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
        // Safety: index < len
        unsafe { self.ptr.as_ptr().add(index).write(value) };
        Ok(())
    }

    /// Returns the first index holding `value`, or `None` if it is absent.
    ///
    /// # Errors
    ///
    /// [`Error::NullValue`] if `value` is `None`.
    pub fn index_of(&self, value: Option<i32>) -> Result<Option<usize>> {
        let value = require(value)?;
        Ok(self.as_slice().iter().position(|&v| v == value))
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

    /// Removes every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        log::trace!("array sequence cleared: len={} cap={}", self.len, self.cap);
        self.len = 0;
    }

    /// Returns a cursor positioned before the first element.
    #[inline]
    pub fn cursor(&self) -> ArrayCursor<'_> {
        ArrayCursor {
            seq: self,
            pos: 0,
        }
    }

    /// Makes room for one more element, doubling the buffer if full.
    #[inline]
    fn reserve_one(&mut self) {
        if self.len == self.cap {
            self.grow();
        }
    }

    #[cold]
    fn grow(&mut self) {
        let new_cap = match self.cap.checked_mul(2) {
            Some(cap) => cap,
            None => capacity_overflow(),
        };
        let new_ptr = allocate(new_cap);

        // Only the live prefix is carried over.
        // Safety: distinct allocations, both valid for len slots
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            deallocate(self.ptr, self.cap);
        }

        log::trace!("array sequence grew: cap {} -> {}", self.cap, new_cap);
        self.ptr = new_ptr;
        self.cap = new_cap;
    }
}

impl Default for ArraySequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ArraySequence {
    fn drop(&mut self) {
        // Safety: ptr was allocated by `allocate(cap)` and is released once
        unsafe { deallocate(self.ptr, self.cap) };
    }
}

impl Clone for ArraySequence {
    fn clone(&self) -> Self {
        let ptr = allocate(self.cap);
        // Safety: fresh allocation of cap >= len slots
        unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), ptr.as_ptr(), self.len) };
        Self {
            ptr,
            cap: self.cap,
            len: self.len,
        }
    }
}

impl PartialEq for ArraySequence {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ArraySequence {}

impl fmt::Debug for ArraySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl Extend<i32> for ArraySequence {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.reserve_one();
            // Safety: reserve_one guarantees len < cap
            unsafe { self.ptr.as_ptr().add(self.len).write(value) };
            self.len += 1;
        }
    }
}

impl FromIterator<i32> for ArraySequence {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<'a> IntoIterator for &'a ArraySequence {
    type Item = i32;
    type IntoIter = ArrayCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl Sequence for ArraySequence {
    #[inline]
    fn push(&mut self, value: Option<i32>) -> Result<()> {
        self.append(value)
    }

    #[inline]
    fn insert(&mut self, index: usize, value: Option<i32>) -> Result<()> {
        ArraySequence::insert(self, index, value)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> Result<i32> {
        ArraySequence::remove_at(self, index)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<i32> {
        ArraySequence::get(self, index)
    }

    #[inline]
    fn set(&mut self, index: usize, value: Option<i32>) -> Result<()> {
        ArraySequence::set(self, index, value)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn index_of(&self, value: Option<i32>) -> Result<Option<usize>> {
        ArraySequence::index_of(self, value)
    }

    #[inline]
    fn clear(&mut self) {
        ArraySequence::clear(self)
    }
}

// Safety: the buffer is uniquely owned and holds plain integers
unsafe impl Send for ArraySequence {}
unsafe impl Sync for ArraySequence {}

// =============================================================================
// Cursor
// =============================================================================

/// Forward cursor over an [`ArraySequence`].
///
/// Reads the live buffer at each step; the borrow keeps the sequence from
/// being mutated mid-pass.
#[derive(Debug, Clone)]
pub struct ArrayCursor<'a> {
    seq: &'a ArraySequence,
    pos: usize,
}

impl Cursor for ArrayCursor<'_> {
    #[inline]
    fn has_next(&self) -> bool {
        self.pos < self.seq.len
    }

    #[inline]
    fn try_next(&mut self) -> Result<i32> {
        if !self.has_next() {
            return Err(Error::NoMoreElements);
        }
        let value = self.seq.as_slice()[self.pos];
        self.pos += 1;
        Ok(value)
    }
}

impl Iterator for ArrayCursor<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        self.try_next().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArrayCursor<'_> {}

// =============================================================================
// Allocation helpers
// =============================================================================

fn layout(cap: usize) -> Layout {
    match Layout::array::<i32>(cap) {
        Ok(layout) => layout,
        Err(_) => capacity_overflow(),
    }
}

fn allocate(cap: usize) -> NonNull<i32> {
    let layout = layout(cap);
    // Safety: cap > 0, so the layout has non-zero size
    let raw = unsafe { alloc(layout) };
    match NonNull::new(raw as *mut i32) {
        Some(ptr) => ptr,
        None => handle_alloc_error(layout),
    }
}

/// # Safety
///
/// `ptr` must come from `allocate(cap)` and not have been freed.
unsafe fn deallocate(ptr: NonNull<i32>, cap: usize) {
    unsafe { dealloc(ptr.as_ptr() as *mut u8, layout(cap)) }
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("array sequence capacity overflow")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq_of(values: &[i32]) -> ArraySequence {
        values.iter().copied().collect()
    }

    #[test]
    fn new_sequence_is_empty_with_default_capacity() {
        let seq = ArraySequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn append_insert_remove_scenario() {
        let mut seq = ArraySequence::new();
        seq.append(Some(5)).unwrap();
        seq.append(Some(3)).unwrap();
        seq.insert(1, Some(9)).unwrap();

        assert_eq!(seq.as_slice(), &[5, 9, 3]);
        assert_eq!(seq.len(), 3);

        assert_eq!(seq.remove_at(0), Ok(5));
        assert_eq!(seq.as_slice(), &[9, 3]);
        assert_eq!(seq.index_of(Some(3)), Ok(Some(1)));
        assert_eq!(seq.contains(Some(7)), Ok(false));
    }

    #[test]
    fn eleventh_append_doubles_capacity() {
        let mut seq = ArraySequence::new();
        for v in 0..10 {
            seq.append(Some(v * 100)).unwrap();
        }
        assert_eq!(seq.capacity(), 10);

        seq.append(Some(1000)).unwrap();
        assert_eq!(seq.capacity(), 20);
        assert_eq!(seq.len(), 11);
        for i in 0..11 {
            assert_eq!(seq.get(i), Ok(i as i32 * 100));
        }
    }

    #[test]
    fn insert_into_full_buffer_grows() {
        let mut seq = ArraySequence::with_capacity(2);
        seq.append(Some(1)).unwrap();
        seq.append(Some(3)).unwrap();
        seq.insert(1, Some(2)).unwrap();

        assert_eq!(seq.capacity(), 4);
        assert_eq!(seq.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn zero_capacity_is_raised() {
        let mut seq = ArraySequence::with_capacity(0);
        assert_eq!(seq.capacity(), 1);
        seq.append(Some(1)).unwrap();
        seq.append(Some(2)).unwrap();
        assert_eq!(seq.capacity(), 2);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut seq = seq_of(&[1, 2]);
        seq.insert(2, Some(3)).unwrap();
        assert_eq!(seq.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn insert_at_front_shifts_everything() {
        let mut seq = seq_of(&[1, 2, 3]);
        seq.insert(0, Some(0)).unwrap();
        assert_eq!(seq.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn remove_last_element() {
        let mut seq = seq_of(&[1, 2, 3]);
        assert_eq!(seq.remove_at(2), Ok(3));
        assert_eq!(seq.as_slice(), &[1, 2]);
    }

    #[test]
    fn index_past_end_is_rejected() {
        let mut seq = seq_of(&[1, 2]);
        let oob = Error::IndexOutOfRange { index: 2, len: 2 };

        assert_eq!(seq.get(2), Err(oob));
        assert_eq!(seq.remove_at(2), Err(oob));
        assert_eq!(seq.set(2, Some(9)), Err(oob));
        assert_eq!(
            seq.insert(3, Some(9)),
            Err(Error::IndexOutOfRange { index: 3, len: 2 })
        );
        assert_eq!(seq.as_slice(), &[1, 2]);
    }

    #[test]
    fn null_values_are_rejected_without_mutation() {
        let mut seq = seq_of(&[1, 2]);

        assert_eq!(seq.append(None), Err(Error::NullValue));
        assert_eq!(seq.insert(1, None), Err(Error::NullValue));
        assert_eq!(seq.set(0, None), Err(Error::NullValue));
        assert_eq!(seq.index_of(None), Err(Error::NullValue));
        assert_eq!(seq.contains(None), Err(Error::NullValue));

        assert_eq!(seq.as_slice(), &[1, 2]);
    }

    #[test]
    fn null_checked_before_index() {
        let mut seq = ArraySequence::new();
        assert_eq!(seq.insert(5, None), Err(Error::NullValue));
        assert_eq!(seq.set(5, None), Err(Error::NullValue));
    }

    #[test]
    fn set_replaces_in_place() {
        let mut seq = seq_of(&[1, 2, 3]);
        seq.set(1, Some(20)).unwrap();
        assert_eq!(seq.as_slice(), &[1, 20, 3]);
    }

    #[test]
    fn index_of_returns_first_match() {
        let seq = seq_of(&[4, 7, 4, 7]);
        assert_eq!(seq.index_of(Some(7)), Ok(Some(1)));
        assert_eq!(seq.index_of(Some(8)), Ok(None));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut seq = seq_of(&(0..25).collect::<Vec<_>>());
        let cap = seq.capacity();
        assert_eq!(cap, 40);

        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.capacity(), cap);

        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.capacity(), cap);
    }

    #[test]
    fn stale_slots_are_not_visible_after_clear() {
        let mut seq = seq_of(&[1, 2, 3]);
        seq.clear();
        seq.append(Some(9)).unwrap();
        assert_eq!(seq.as_slice(), &[9]);
        assert_eq!(seq.index_of(Some(2)), Ok(None));
    }

    #[test]
    fn cursor_walks_then_fails() {
        let seq = seq_of(&[1, 2]);
        let mut cursor = seq.cursor();

        assert!(cursor.has_next());
        assert_eq!(cursor.try_next(), Ok(1));
        assert_eq!(cursor.try_next(), Ok(2));
        assert!(!cursor.has_next());
        assert_eq!(cursor.try_next(), Err(Error::NoMoreElements));
    }

    #[test]
    fn cursor_restarts_each_call() {
        let seq = seq_of(&[3, 1, 4]);
        let first: Vec<_> = seq.cursor().collect();
        let second: Vec<_> = (&seq).into_iter().collect();
        assert_eq!(first, vec![3, 1, 4]);
        assert_eq!(first, second);
        assert_eq!(seq.cursor().len(), 3);
    }

    #[test]
    fn clone_is_independent() {
        let mut a = seq_of(&[1, 2, 3]);
        let b = a.clone();
        a.set(0, Some(100)).unwrap();

        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(b.capacity(), a.capacity());
        assert_ne!(a, b);
    }

    #[test]
    fn debug_lists_live_elements() {
        let mut seq = seq_of(&[1, 2, 3]);
        seq.remove_at(2).unwrap();
        assert_eq!(format!("{seq:?}"), "[1, 2]");
    }
}
