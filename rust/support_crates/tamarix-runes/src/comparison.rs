//! Ordering over fixed-width rune sequences.

use std::cmp::Ordering;

use itertools::{EitherOrBoth, Itertools};

use crate::rune::CodeUnit;

/// Compares two rune sequences lexicographically by numeric unit value.
/// A strict prefix orders before the longer sequence.
///
/// This is the comparator the trie uses over sibling keys, and one valid
/// comparator instance for the sorted-sequence locators.
pub fn compare_runes<U: CodeUnit>(a: &[U], b: &[U]) -> Ordering {
    for eob in a.iter().zip_longest(b.iter()) {
        match eob {
            EitherOrBoth::Both(x, y) => match x.cmp(y) {
                Ordering::Equal => (),
                non_eq => return non_eq,
            },
            EitherOrBoth::Left(_) => return Ordering::Greater,
            EitherOrBoth::Right(_) => return Ordering::Less,
        }
    }
    Ordering::Equal
}

/// Returns true if `a` starts with `prefix`, unit for unit.
pub fn runes_start_with<U: CodeUnit>(a: &[U], prefix: &[U]) -> bool {
    a.len() >= prefix.len() && a[..prefix.len()] == *prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_runes_ordering() {
        let a = [1u16, 2, 3];
        let b = [1u16, 2, 4];
        assert_eq!(compare_runes(&a, &b), Ordering::Less);
        assert_eq!(compare_runes(&b, &a), Ordering::Greater);
        assert_eq!(compare_runes(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_compare_runes_prefix_is_less() {
        let short = [1u16, 2];
        let long = [1u16, 2, 0];
        assert_eq!(compare_runes(&short, &long), Ordering::Less);
        assert_eq!(compare_runes(&long, &short), Ordering::Greater);
        assert_eq!(compare_runes(&[], &short), Ordering::Less);
    }

    #[test]
    fn test_runes_start_with() {
        let seq = [5u16, 6, 7];
        assert!(runes_start_with(&seq, &[5, 6]));
        assert!(runes_start_with(&seq, &[]));
        assert!(runes_start_with(&seq, &seq));
        assert!(!runes_start_with(&seq, &[5, 7]));
        assert!(!runes_start_with(&seq, &[5, 6, 7, 8]));
    }
}
