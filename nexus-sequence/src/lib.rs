//! Integer sequences with hand-managed storage.
//!
//! This crate provides two sequence containers with the same external
//! contract and different internal representations:
//!
//! ```text
//! ArraySequence   - contiguous buffer, doubles when full, never shrinks
//! LinkedSequence  - singly-linked chain, each node owns its successor
//! ```
//!
//! Neither uses `Vec` or `std::collections::LinkedList` underneath. The array
//! variant allocates its buffer directly; the linked variant boxes each node.
//!
//! # Quick Start
//!
//! ```
//! use nexus_sequence::{ArraySequence, LinkedSequence, Sequence};
//!
//! let mut array = ArraySequence::new();
//! array.append(Some(1)).unwrap();
//! array.append(Some(2)).unwrap();
//!
//! let mut linked = LinkedSequence::new();
//! linked.prepend(Some(2)).unwrap();
//! linked.prepend(Some(1)).unwrap();
//!
//! assert!(array.cursor().eq(linked.cursor()));
//! assert_eq!(Sequence::len(&array), Sequence::len(&linked));
//! ```
//!
//! # Nullable Values
//!
//! Operations that accept a value take `Option<i32>`. `None` is always
//! rejected with [`Error::NullValue`] before anything is changed:
//!
//! ```
//! use nexus_sequence::{ArraySequence, Error};
//!
//! let mut seq = ArraySequence::new();
//! assert_eq!(seq.append(None), Err(Error::NullValue));
//! assert!(seq.is_empty());
//! ```
//!
//! # Operations
//!
//! | Operation | `ArraySequence` | `LinkedSequence` |
//! |-----------|-----------------|------------------|
//! | primary insert | `append`, amortized O(1) | `prepend`, O(1) |
//! | `insert(i, v)` | O(len - i) | O(i) |
//! | `remove_at(i)` | O(len - i) | O(i) |
//! | `get` / `set` | O(1) | O(i) |
//! | `index_of` / `contains` | O(len) | O(len) |
//! | `len` / `is_empty` / `clear` | O(1) | O(1) / O(1) / O(len) |
//!
//! # Errors
//!
//! | Error | Raised by |
//! |-------|-----------|
//! | [`Error::NullValue`] | `append`, `prepend`, `insert`, `set`, `index_of`, `contains` |
//! | [`Error::IndexOutOfRange`] | `get`, `set`, `remove_at` (index ≥ len), `insert` (index > len) |
//! | [`Error::NoMoreElements`] | [`Cursor::try_next`] past the end |

#![warn(missing_docs)]

pub mod array;
pub mod error;
pub mod linked;
pub mod sequence;

pub use array::{ArrayCursor, ArraySequence, DEFAULT_CAPACITY};
pub use error::{Error, Result};
pub use linked::{LinkedCursor, LinkedSequence};
pub use sequence::{Cursor, Sequence};
