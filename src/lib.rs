#![no_std]

//! `DynArray`: a growable contiguous array owning its backing storage.
//!
//! `DynArray<T>` keeps a logical length and an allocated capacity over a
//! single heap buffer. All access is bounds-checked, failures are reported
//! as [`DynArrayError`] values, and mutation never leaves a partially
//! applied single-element operation visible.
//!
//! This crate is `no_std` compatible (it requires `alloc`). Enable the
//! optional `std` feature to forward to `thiserror/std`.
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut arr = DynArray::new();
//! arr.push_back(1);
//! arr.push_back(2);
//! arr.push_back(3);
//!
//! assert_eq!(arr.len(), 3);
//! assert_eq!(arr.get(1), Ok(&2));
//! assert_eq!(arr.to_string(), "[1, 2, 3]");
//! ```
//!
//! # Growth policy
//!
//! Appending to a full array grows capacity to `2 * capacity + 1`, so a
//! run of `push_back` calls from empty costs O(N) element moves in total.
//! `reserve` and `shrink_to_fit` reallocate to an exact slot count;
//! `clear` drops the elements but keeps the allocation.
//!
//! # Cursors and invalidation
//!
//! Positions for `insert`/`erase` are [`Cursor`] values: plain offset
//! tokens tagged with the identity of the issuing array and its storage
//! generation. Any reallocation bumps the generation, so a cursor taken
//! before it is rejected as stale instead of dangling:
//!
//! ```
//! use dynarray::{DynArray, DynArrayError};
//!
//! let mut arr = DynArray::from([1, 2, 3]);
//! let cursor = arr.begin().advanced(1);
//! arr.insert(cursor, 9).unwrap();
//! assert_eq!(arr.to_string(), "[1, 9, 2, 3]");
//!
//! let before = arr.begin();
//! arr.reserve(64); // reallocates
//! assert_eq!(arr.erase(before), Err(DynArrayError::StaleCursor));
//! ```
//!
//! Element traversal uses ordinary borrow-tied iterators, restartable at
//! any time via [`DynArray::iter`] / [`DynArray::iter_mut`]:
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut arr = DynArray::from([10, 20, 30]);
//! for value in &mut arr {
//!     *value += 1;
//! }
//! let total: i32 = arr.iter().sum();
//! assert_eq!(total, 63);
//! ```

extern crate alloc;

mod array;
mod cursor;
mod error;
mod iter;

// Re-export public types
pub use array::DynArray;
pub use cursor::Cursor;
pub use error::DynArrayError;
pub use iter::{DynArrayIter, DynArrayIterMut};
