use core::fmt;
use core::mem::{self, MaybeUninit};
use core::ptr;
use core::slice;
use core::sync::atomic::{AtomicU64, Ordering};

use alloc::boxed::Box;

use crate::cursor::Cursor;
use crate::error::DynArrayError;
use crate::iter::{DynArrayIter, DynArrayIterMut};

static NEXT_OWNER_ID: AtomicU64 = AtomicU64::new(0);

/// A growable contiguous array owning its backing storage.
///
/// Storage is a single heap buffer of `capacity` slots; the first `len`
/// slots hold live elements, the rest are allocated but unused. Appending
/// to a full array grows the buffer geometrically (`2 * capacity + 1`),
/// which keeps `push_back` amortized O(1).
///
/// Every access is bounds-checked and failures are reported as
/// [`DynArrayError`]; there is no unchecked fast path.
pub struct DynArray<T> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
    owner: u64,
    generation: u64,
}

impl<T> DynArray<T> {
    /// Creates an empty array without allocating.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Box::new_uninit_slice(capacity),
            len: 0,
            owner: NEXT_OWNER_ID.fetch_add(1, Ordering::Relaxed),
            generation: 0,
        }
    }

    /// Creates an array of `n` default-initialized elements, with
    /// `len == capacity == n`.
    #[must_use]
    pub fn with_len(n: usize) -> Self
    where
        T: Default,
    {
        let mut arr = Self::with_capacity(n);
        for _ in 0..n {
            arr.push_back(T::default());
        }
        arr
    }

    /// Creates an array by cloning the elements of `values`, allocating
    /// exactly `values.len()` slots.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        let mut arr = Self::with_capacity(values.len());
        for value in values {
            arr.push_back(value.clone());
        }
        arr
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated element slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // Slots [0, len) are initialized by construction of every mutator.
        unsafe {
            slice::from_raw_parts(self.buf.as_ptr().cast(), self.len)
        }
    }

    /// The live elements as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Slots [0, len) are initialized by construction of every mutator.
        unsafe {
            slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast(), self.len)
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, DynArrayError> {
        if index >= self.len {
            return Err(DynArrayError::OutOfRange {
                index,
                length: self.len,
            });
        }
        Ok(unsafe { self.buf[index].assume_init_ref() })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DynArrayError> {
        if index >= self.len {
            return Err(DynArrayError::OutOfRange {
                index,
                length: self.len,
            });
        }
        Ok(unsafe { self.buf[index].assume_init_mut() })
    }

    /// Overwrites the element at `index`, dropping the previous occupant.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), DynArrayError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Grows storage to hold at least `n` elements. No-op when
    /// `n <= capacity`; otherwise reallocates to exactly `n` slots,
    /// preserving live elements in order and invalidating all cursors.
    pub fn reserve(&mut self, n: usize) {
        if n > self.capacity() {
            self.reallocate(n);
        }
    }

    /// Reallocates storage down to exactly `len` slots, discarding unused
    /// slack. No-op when `len == capacity`, so calling it twice in a row
    /// performs no further work.
    pub fn shrink_to_fit(&mut self) {
        if self.len < self.capacity() {
            self.reallocate(self.len);
        }
    }

    /// Appends `value` at the back, growing storage first when full.
    pub fn push_back(&mut self, value: T) {
        self.grow_if_full();
        self.buf[self.len].write(value);
        self.len += 1;
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::Underflow` if the array is empty.
    pub fn pop_back(&mut self) -> Result<T, DynArrayError> {
        if self.len == 0 {
            return Err(DynArrayError::Underflow);
        }
        self.len -= 1;
        // The slot was live a moment ago; ownership moves to the caller.
        Ok(unsafe { self.buf[self.len].assume_init_read() })
    }

    /// Drops all live elements and sets the length to zero. Capacity is
    /// retained; no reallocation occurs.
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // Length goes to zero before dropping so a panicking element drop
        // cannot leave slots observable as live.
        self.len = 0;
        unsafe {
            ptr::drop_in_place(live);
        }
    }

    /// Cursor at offset 0 for the current storage generation.
    #[must_use]
    pub fn begin(&self) -> Cursor {
        Cursor::new(self.owner, self.generation, 0)
    }

    /// Cursor one past the last live element for the current storage
    /// generation. `[begin, end)` spans all live elements in index order.
    #[must_use]
    pub fn end(&self) -> Cursor {
        Cursor::new(self.owner, self.generation, self.len)
    }

    /// Inserts `value` immediately before `position`, shifting the
    /// elements at and after it one slot toward the back. Grows storage
    /// first when full. Returns a cursor to the inserted element, tagged
    /// with the generation current after any growth.
    ///
    /// # Errors
    ///
    /// - `DynArrayError::ForeignCursor` if `position` was issued by a
    ///   different array.
    /// - `DynArrayError::StaleCursor` if storage was reallocated after
    ///   `position` was taken.
    /// - `DynArrayError::CursorOutOfBounds` if the offset exceeds `len`.
    pub fn insert(&mut self, position: Cursor, value: T) -> Result<Cursor, DynArrayError> {
        let offset = self.admit_cursor(position)?;
        if offset > self.len {
            return Err(DynArrayError::CursorOutOfBounds {
                offset,
                length: self.len,
            });
        }
        self.grow_if_full();
        unsafe {
            let base = self.buf.as_mut_ptr();
            // Back-to-front move of [offset, len) into [offset+1, len+1).
            ptr::copy(base.add(offset), base.add(offset + 1), self.len - offset);
        }
        self.buf[offset].write(value);
        self.len += 1;
        Ok(Cursor::new(self.owner, self.generation, offset))
    }

    /// Removes the element at `position`, shifting the elements after it
    /// one slot toward the front. Returns a cursor to the element now at
    /// that offset, or `end()` when the last element was removed.
    ///
    /// # Errors
    ///
    /// - `DynArrayError::ForeignCursor` if `position` was issued by a
    ///   different array.
    /// - `DynArrayError::StaleCursor` if storage was reallocated after
    ///   `position` was taken.
    /// - `DynArrayError::CursorOutOfBounds` if the offset is not below
    ///   `len`.
    pub fn erase(&mut self, position: Cursor) -> Result<Cursor, DynArrayError> {
        let offset = self.admit_cursor(position)?;
        if offset >= self.len {
            return Err(DynArrayError::CursorOutOfBounds {
                offset,
                length: self.len,
            });
        }
        let removed = unsafe { self.buf[offset].assume_init_read() };
        unsafe {
            let base = self.buf.as_mut_ptr();
            // Front-to-back move of (offset, len) into [offset, len-1).
            ptr::copy(base.add(offset + 1), base.add(offset), self.len - offset - 1);
        }
        self.len -= 1;
        drop(removed);
        Ok(Cursor::new(self.owner, self.generation, offset))
    }

    /// Forward iterator over the live elements.
    #[must_use]
    pub fn iter(&self) -> DynArrayIter<'_, T> {
        DynArrayIter::new(self.as_slice())
    }

    /// Forward iterator yielding mutable references to the live elements.
    #[must_use]
    pub fn iter_mut(&mut self) -> DynArrayIterMut<'_, T> {
        DynArrayIterMut::new(self.as_mut_slice())
    }

    fn admit_cursor(&self, cursor: Cursor) -> Result<usize, DynArrayError> {
        if cursor.owner != self.owner {
            return Err(DynArrayError::ForeignCursor);
        }
        if cursor.generation != self.generation {
            return Err(DynArrayError::StaleCursor);
        }
        Ok(cursor.offset)
    }

    fn grow_if_full(&mut self) {
        if self.len == self.capacity() {
            self.reallocate(2 * self.capacity() + 1);
        }
    }

    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        let mut new_buf = Box::new_uninit_slice(new_capacity);
        unsafe {
            // Moves the live values; MaybeUninit slots never drop, so the
            // old buffer frees without touching them again.
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
        }
        self.buf = new_buf;
        self.generation += 1;
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for DynArray<T> {
    /// Deep copy: allocates the source's capacity and clones the live
    /// elements. The copy shares no storage with the source and issues
    /// its own cursors.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        for value in self.as_slice() {
            copy.buf[copy.len].write(value.clone());
            copy.len += 1;
        }
        copy
    }

    /// Copy-and-swap assignment: builds a complete independent copy of
    /// `source`, then exchanges state with it; the old state is released
    /// by the temporary's drop. Either the whole assignment succeeds or
    /// `self` is left untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        mem::swap(self, &mut fresh);
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(values: [T; N]) -> Self {
        let mut arr = Self::with_capacity(N);
        for value in values {
            arr.push_back(value);
        }
        arr
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut arr = Self::with_capacity(lower);
        for value in iter {
            arr.push_back(value);
        }
        arr
    }
}

impl<T: fmt::Display> fmt::Display for DynArray<T> {
    /// Diagnostic rendering: `[1, 2, 3]`. Not a serialization format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_bumps_only_on_reallocation() {
        let mut arr = DynArray::from([1, 2, 3]);
        let g0 = arr.generation;

        // Shift without reallocation: capacity headroom exists.
        arr.reserve(8);
        assert_eq!(arr.generation, g0 + 1);

        let g1 = arr.generation;
        let cursor = arr.begin();
        arr.insert(cursor, 0).unwrap();
        assert_eq!(arr.generation, g1);

        arr.erase(cursor).unwrap();
        assert_eq!(arr.generation, g1);

        arr.shrink_to_fit();
        assert_eq!(arr.generation, g1 + 1);
    }

    #[test]
    fn owner_ids_are_distinct() {
        let a: DynArray<u8> = DynArray::new();
        let b: DynArray<u8> = DynArray::new();
        assert_ne!(a.owner, b.owner);
        assert_ne!(a.clone().owner, a.owner);
    }

    #[test]
    fn zero_capacity_holds_no_allocation() {
        let arr: DynArray<u64> = DynArray::new();
        assert_eq!(arr.capacity(), 0);
        assert_eq!(arr.buf.len(), 0);
    }
}
