//! Position-finding binary searches over sorted, duplicate-free sequences.
//!
//! The trie uses these to locate a child among siblings ordered by rune
//! value; they work over any strictly ascending slice. Each function takes a
//! three-way comparator `sign(element)` that reports how the (implicit)
//! target orders relative to `element` — `Less` when the target is smaller,
//! `Greater` when it is larger.
//!
//! The midpoint rounding differs between the variants on purpose:
//! [`locate_ge`] narrows with the floor midpoint while [`locate_le`] and
//! [`locate_eq`] narrow with the ceiling midpoint. Each variant's rounding
//! direction is what lets its loop converge instead of oscillating at the
//! sequence boundary.
//!
//! On an exact match, [`locate_ge`] and [`locate_le`] keep narrowing past the
//! matching element rather than returning it, so with the target present at
//! index `i` they answer `i + 1` and `i - 1` respectively. Callers that need
//! the matching index itself use [`locate_eq`].
//!
//! Preconditions for all three: the slice is non-empty (asserted), strictly
//! ascending under the comparator, and free of duplicates. A slice violating
//! the ordering precondition produces an unspecified index.

use std::cmp::Ordering;

/// Returns the index of the first element that orders above the target, or
/// `items.len()` when no element does.
///
/// With the target absent this is the target's insertion position. With the
/// target present at index `i`, the equality branch advances past the match
/// and the result is `i + 1`.
pub fn locate_ge<T, F>(items: &[T], mut sign: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    assert!(!items.is_empty(), "locate_ge over an empty sequence");
    let mut begin = 0;
    let mut end = items.len() - 1;

    while begin < end {
        let cur = (begin + end) / 2;
        match sign(&items[cur]) {
            Ordering::Equal => begin = cur + 1,
            Ordering::Less => end = cur,
            Ordering::Greater => begin = cur + 1,
        }
    }
    debug_assert_eq!(begin, end);
    if begin != items.len() - 1 {
        return begin;
    }
    if sign(&items[begin]) != Ordering::Less {
        begin += 1;
    }
    begin
}

/// Returns the largest index whose element orders below the target, or
/// `None` when no element does.
///
/// The mirror of [`locate_ge`]: the ceiling midpoint narrows toward the
/// lower boundary, and the equality branch retreats below the match, so with
/// the target present at index `i` the result is `Some(i - 1)` (`None` for
/// `i == 0`).
pub fn locate_le<T, F>(items: &[T], mut sign: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    assert!(!items.is_empty(), "locate_le over an empty sequence");
    let mut begin = 0;
    let mut end = items.len() - 1;

    while begin < end {
        let cur = (begin + end) / 2 + (begin + end) % 2;
        match sign(&items[cur]) {
            Ordering::Equal => end = cur - 1,
            Ordering::Less => end = cur - 1,
            Ordering::Greater => begin = cur,
        }
    }
    debug_assert_eq!(begin, end);
    if begin != 0 {
        return Some(begin);
    }
    if sign(&items[0]) != Ordering::Greater {
        return None;
    }
    Some(0)
}

/// Returns the index of the element the target compares equal to, or `None`.
///
/// Uses the same ceiling-midpoint stepping as [`locate_le`], but returns the
/// matching index as soon as the comparator reports equality.
pub fn locate_eq<T, F>(items: &[T], mut sign: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    assert!(!items.is_empty(), "locate_eq over an empty sequence");
    let mut begin = 0;
    let mut end = items.len() - 1;

    while begin < end {
        let cur = (begin + end) / 2 + (begin + end) % 2;
        match sign(&items[cur]) {
            Ordering::Equal => return Some(cur),
            Ordering::Less => end = cur - 1,
            Ordering::Greater => begin = cur,
        }
    }
    debug_assert_eq!(begin, end);
    if sign(&items[begin]) == Ordering::Equal {
        Some(begin)
    } else {
        None
    }
}
