use core::cmp::Ordering;

/// A position inside a `DynArray`, tagged with the identity of the array
/// that issued it and the storage generation it was taken against.
///
/// A cursor is a plain offset token, not a borrow: holding one does not
/// prevent the array from being mutated. Instead, `insert` and `erase`
/// validate the tags and reject cursors from a different array
/// (`ForeignCursor`) or cursors taken before the last reallocation
/// (`StaleCursor`).
///
/// Shifts that do not reallocate leave cursors usable: a cursor then
/// denotes whatever element currently occupies its offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub(crate) owner: u64,
    pub(crate) generation: u64,
    pub(crate) offset: usize,
}

impl Cursor {
    pub(crate) fn new(owner: u64, generation: u64, offset: usize) -> Self {
        Self {
            owner,
            generation,
            offset,
        }
    }

    /// Offset of this cursor from the start of its array.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns a cursor moved `by` slots toward the back.
    ///
    /// The result is not range-checked here; `insert`/`erase` reject
    /// offsets beyond the array's length.
    #[must_use]
    pub fn advanced(self, by: usize) -> Self {
        Self {
            offset: self.offset + by,
            ..self
        }
    }

    /// Signed slot distance `self - other`.
    ///
    /// Returns `None` when the cursors were issued by different arrays or
    /// against different storage generations, where the difference would
    /// be meaningless.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn distance(self, other: Self) -> Option<isize> {
        if self.owner != other.owner || self.generation != other.generation {
            return None;
        }
        Some(self.offset as isize - other.offset as isize)
    }
}

impl PartialOrd for Cursor {
    /// Ordering is defined only between cursors of the same array and
    /// storage generation.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.owner != other.owner || self.generation != other.generation {
            return None;
        }
        Some(self.offset.cmp(&other.offset))
    }
}
