use dynarray::{DynArray, DynArrayError};

#[test]
fn test_insert_at_begin() {
    let mut arr = DynArray::from([2, 3]);

    let inserted = arr.insert(arr.begin(), 1).unwrap();

    assert_eq!(arr.as_slice(), &[1, 2, 3]);
    assert_eq!(inserted.offset(), 0);
    assert_eq!(arr.get(inserted.offset()), Ok(&1));
}

#[test]
fn test_insert_mid_shifts_suffix() {
    let mut arr = DynArray::from([1, 2, 3, 4]);
    arr.reserve(8);

    let position = arr.begin().advanced(2);
    let inserted = arr.insert(position, 9).unwrap();

    assert_eq!(arr.as_slice(), &[1, 2, 9, 3, 4]);
    assert_eq!(inserted.offset(), 2);
}

#[test]
fn test_insert_at_end_behaves_as_push_back() {
    let mut arr = DynArray::from([1, 2]);

    let inserted = arr.insert(arr.end(), 3).unwrap();

    assert_eq!(arr.as_slice(), &[1, 2, 3]);
    assert_eq!(inserted.offset(), 2);
    assert_eq!(inserted.distance(arr.begin()), Some(2));
}

#[test]
fn test_insert_beyond_end_fails() {
    let mut arr = DynArray::from([1, 2]);

    let too_far = arr.end().advanced(1);
    assert_eq!(
        arr.insert(too_far, 9),
        Err(DynArrayError::CursorOutOfBounds {
            offset: 3,
            length: 2
        })
    );
    // Failure leaves no partial mutation behind.
    assert_eq!(arr.as_slice(), &[1, 2]);
}

#[test]
fn test_erase_first_returns_follower() {
    let mut arr = DynArray::from([10, 20, 30]);

    let next = arr.erase(arr.begin()).unwrap();

    assert_eq!(arr.as_slice(), &[20, 30]);
    assert_eq!(next.offset(), 0);
    assert_eq!(arr.get(next.offset()), Ok(&20));
}

#[test]
fn test_erase_mid_shifts_suffix() {
    let mut arr = DynArray::from([1, 2, 3, 4, 5]);

    let next = arr.erase(arr.begin().advanced(2)).unwrap();

    assert_eq!(arr.as_slice(), &[1, 2, 4, 5]);
    assert_eq!(arr.get(next.offset()), Ok(&4));
}

#[test]
fn test_erase_last_returns_end() {
    let mut arr = DynArray::from([1, 2, 3]);

    let next = arr.erase(arr.begin().advanced(2)).unwrap();

    assert_eq!(arr.as_slice(), &[1, 2]);
    assert_eq!(next, arr.end());
}

#[test]
fn test_erase_at_end_fails() {
    let mut arr = DynArray::from([1, 2, 3]);

    assert_eq!(
        arr.erase(arr.end()),
        Err(DynArrayError::CursorOutOfBounds {
            offset: 3,
            length: 3
        })
    );
    assert_eq!(arr.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_erase_on_empty_fails() {
    let mut arr: DynArray<i32> = DynArray::new();

    assert_eq!(
        arr.erase(arr.begin()),
        Err(DynArrayError::CursorOutOfBounds {
            offset: 0,
            length: 0
        })
    );
}

#[test]
fn test_insert_then_erase_round_trip() {
    let mut arr = DynArray::from([1, 2, 3]);
    arr.reserve(8); // headroom so the insert does not reallocate

    let inserted = arr.insert(arr.begin().advanced(1), 42).unwrap();
    assert_eq!(arr.as_slice(), &[1, 42, 2, 3]);

    let after = arr.erase(inserted).unwrap();
    assert_eq!(arr.as_slice(), &[1, 2, 3]);
    assert_eq!(arr.len(), 3);
    assert_eq!(after.offset(), 1);
}

#[test]
fn test_cursor_stale_after_reserve() {
    let mut arr = DynArray::from([1, 2, 3]);
    let cursor = arr.begin();

    arr.reserve(10);

    assert_eq!(arr.insert(cursor, 0), Err(DynArrayError::StaleCursor));
    assert_eq!(arr.erase(cursor), Err(DynArrayError::StaleCursor));
    // A freshly taken cursor works.
    assert!(arr.erase(arr.begin()).is_ok());
}

#[test]
fn test_cursor_stale_after_implicit_growth() {
    let mut arr = DynArray::from([1, 2, 3]); // full: capacity == 3
    let cursor = arr.begin();

    arr.push_back(4); // grows, reallocates

    assert_eq!(arr.insert(cursor, 0), Err(DynArrayError::StaleCursor));
}

#[test]
fn test_cursor_survives_shift_without_reallocation() {
    let mut arr = DynArray::from([1, 2, 3]);
    arr.reserve(8);

    let at_zero = arr.begin();
    arr.insert(at_zero, 0).unwrap(); // shift only, no reallocation

    // The cursor still denotes offset 0, now occupied by the new element.
    assert_eq!(arr.erase(at_zero).map(|c| c.offset()), Ok(0));
    assert_eq!(arr.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_foreign_cursor_rejected() {
    let a = DynArray::from([1, 2, 3]);
    let mut b = DynArray::from([1, 2, 3]);

    assert_eq!(b.insert(a.begin(), 9), Err(DynArrayError::ForeignCursor));
    assert_eq!(b.erase(a.begin()), Err(DynArrayError::ForeignCursor));
}

#[test]
fn test_clone_issues_its_own_cursors() {
    let a = DynArray::from([1, 2, 3]);
    let mut b = a.clone();

    // Cursors do not transfer between an array and its copy.
    assert_eq!(b.erase(a.begin()), Err(DynArrayError::ForeignCursor));
    assert!(b.erase(b.begin()).is_ok());
}

#[test]
fn test_cursor_distance_and_ordering() {
    let arr = DynArray::from([1, 2, 3]);

    let begin = arr.begin();
    let end = arr.end();

    assert_eq!(end.distance(begin), Some(3));
    assert_eq!(begin.distance(end), Some(-3));
    assert_eq!(begin.advanced(2).distance(begin), Some(2));
    assert!(begin < end);
    assert_eq!(begin.advanced(3), end);
}

#[test]
fn test_cursor_distance_meaningless_across_arrays() {
    let a = DynArray::from([1]);
    let b = DynArray::from([1]);

    assert_eq!(a.begin().distance(b.begin()), None);
    assert_eq!(a.begin().partial_cmp(&b.begin()), None);
}

#[test]
fn test_begin_equals_end_when_empty() {
    let arr: DynArray<i32> = DynArray::new();
    assert_eq!(arr.begin(), arr.end());
}
