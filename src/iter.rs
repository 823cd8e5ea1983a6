use core::iter::FusedIterator;
use core::mem;

use crate::array::DynArray;

/// Forward iterator over the live elements of a `DynArray`.
///
/// Restartable: calling [`DynArray::iter`] again yields a fresh iterator
/// over the array's current state.
pub struct DynArrayIter<'a, T> {
    remaining: &'a [T],
}

impl<'a, T> DynArrayIter<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        Self {
            remaining: elements,
        }
    }
}

impl<'a, T> Iterator for DynArrayIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (first, rest) = self.remaining.split_first()?;
        self.remaining = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len(), Some(self.remaining.len()))
    }
}

impl<T> ExactSizeIterator for DynArrayIter<'_, T> {}

impl<T> FusedIterator for DynArrayIter<'_, T> {}

impl<T> Clone for DynArrayIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            remaining: self.remaining,
        }
    }
}

/// Forward iterator yielding mutable references to the live elements of a
/// `DynArray`.
pub struct DynArrayIterMut<'a, T> {
    remaining: &'a mut [T],
}

impl<'a, T> DynArrayIterMut<'a, T> {
    pub(crate) fn new(elements: &'a mut [T]) -> Self {
        Self {
            remaining: elements,
        }
    }
}

impl<'a, T> Iterator for DynArrayIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = mem::take(&mut self.remaining);
        let (first, rest) = remaining.split_first_mut()?;
        self.remaining = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len(), Some(self.remaining.len()))
    }
}

impl<T> ExactSizeIterator for DynArrayIterMut<'_, T> {}

impl<T> FusedIterator for DynArrayIterMut<'_, T> {}

/// Mutable-to-read-only narrowing. The reverse conversion is not provided.
impl<'a, T> From<DynArrayIterMut<'a, T>> for DynArrayIter<'a, T> {
    fn from(iter: DynArrayIterMut<'a, T>) -> Self {
        Self {
            remaining: iter.remaining,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = DynArrayIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = DynArrayIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
