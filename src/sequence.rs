// 📋 Sequence - ordered, mutable list
//
// Removal by value only touches the first match and is a no-op on a miss.
// Removal by index is a contract: an index outside `[0, len)` is an error
// the caller has to propagate.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Sequence { items: Vec::new() }
    }

    pub fn append(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove the element at `index`, shifting later elements left
    pub fn remove_by_index(&mut self, index: usize) -> Result<T> {
        let len = self.items.len();
        if index >= len {
            return Err(CatalogError::IndexOutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// Remove every element matching `predicate`, returns how many went.
    ///
    /// Single pass over the backing vector, so no element is skipped the way
    /// a forward index walk with removals would skip them.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        let removed = before - self.items.len();
        trace!(removed, remaining = self.items.len(), "remove_where");
        removed
    }

    /// Apply `action` to each element in order
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.items.iter().for_each(action);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Remove the first element equal to `value`. Returns false when absent.
    pub fn remove_by_value(&mut self, value: &T) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Sequence { items }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{default_galaxies, Galaxy};

    fn salmons() -> Sequence<String> {
        ["chinook", "coho", "pink", "sockeye"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_remove_then_append_moves_to_end() {
        let mut fish = salmons();

        assert!(fish.remove_by_value(&"coho".to_string()));
        assert_eq!(fish.as_slice(), ["chinook", "pink", "sockeye"]);

        fish.append("coho".to_string());
        assert_eq!(fish.as_slice(), ["chinook", "pink", "sockeye", "coho"]);

        let mut original = salmons().into_vec();
        let mut restored = fish.into_vec();
        original.sort();
        restored.sort();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_remove_by_value_first_match_only() {
        let mut seq: Sequence<i32> = vec![1, 2, 1, 3].into();

        assert!(seq.remove_by_value(&1));
        assert_eq!(seq.as_slice(), [2, 1, 3]);
    }

    #[test]
    fn test_remove_by_value_absent_is_noop() {
        let mut fish = salmons();

        assert!(!fish.remove_by_value(&"trout".to_string()));
        assert_eq!(fish, salmons());
    }

    #[test]
    fn test_remove_by_index_out_of_range() {
        let mut fish = salmons();

        let err = fish.remove_by_index(4).unwrap_err();
        assert_eq!(err, CatalogError::IndexOutOfRange { index: 4, len: 4 });
        assert_eq!(fish.len(), 4);
    }

    #[test]
    fn test_remove_by_index_last() {
        let mut fish = salmons();

        let removed = fish.remove_by_index(3).unwrap();
        assert_eq!(removed, "sockeye");
        assert_eq!(fish.len(), 3);
    }

    #[test]
    fn test_remove_by_index_empty() {
        let mut seq: Sequence<i32> = Sequence::new();

        assert!(matches!(
            seq.remove_by_index(0),
            Err(CatalogError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_remove_where_odd() {
        let mut numbers: Sequence<i64> = (0..10).collect();

        let removed = numbers.remove_where(|n| n % 2 == 1);

        assert_eq!(removed, 5);
        assert_eq!(numbers.as_slice(), [0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_remove_where_adjacent_matches() {
        let mut numbers: Sequence<i64> = vec![1, 3, 5, 2, 7, 9].into();

        numbers.remove_where(|n| n % 2 == 1);

        assert_eq!(numbers.as_slice(), [2]);
    }

    #[test]
    fn test_for_each_in_order() {
        let numbers: Sequence<i64> = (0..5).collect();
        let mut seen = Vec::new();

        numbers.for_each(|n| seen.push(*n));

        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_galaxies_are_mutable_in_place() {
        let mut galaxies: Sequence<Galaxy> = default_galaxies().into();

        galaxies.remove_where(|g| g.distance == 0);
        galaxies.append(Galaxy::new("Milky Way", 0));

        let names: Vec<&str> = galaxies.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Tadpole", "Pinwheel", "Andromeda", "Milky Way"]);
        assert_eq!(galaxies.get(0).map(|g| g.distance), Some(400));
    }
}
