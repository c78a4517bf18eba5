// 🔢 Bounded Generator - lazy integers in [first, last]
//
// Holds nothing but the bounds and the predicate. `iter()` hands out a fresh
// pass each time; two consumers never share a cursor.

use std::iter::Filter;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy)]
pub struct BoundedSequence {
    first: i64,
    last: i64,
    predicate: fn(&i64) -> bool,
}

impl BoundedSequence {
    pub fn new(first: i64, last: i64, predicate: fn(&i64) -> bool) -> Self {
        BoundedSequence {
            first,
            last,
            predicate,
        }
    }

    pub fn first(&self) -> i64 {
        self.first
    }

    pub fn last(&self) -> i64 {
        self.last
    }

    /// Start a new pass over the range, yielding matches in ascending order.
    /// Empty when `first > last`.
    pub fn iter(&self) -> Filter<RangeInclusive<i64>, fn(&i64) -> bool> {
        (self.first..=self.last).filter(self.predicate)
    }
}

impl IntoIterator for &BoundedSequence {
    type Item = i64;
    type IntoIter = Filter<RangeInclusive<i64>, fn(&i64) -> bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn is_even(n: &i64) -> bool {
    n % 2 == 0
}

/// Even numbers in `[first, last]`
pub fn even_sequence(first: i64, last: i64) -> BoundedSequence {
    BoundedSequence::new(first, last, is_even)
}

// ============================================================================
// TESTS
// ============================================================================
