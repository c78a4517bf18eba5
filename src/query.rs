// 🔎 Filter + Sort Queries
//
// A `FilterSorted` holds the source slice, a predicate and a key function.
// Nothing runs until `iter()` is called, and every call runs the query again
// from the start, so the same query can be consumed any number of times.

use crate::entities::Element;

pub struct FilterSorted<'a, T, P, K> {
    records: &'a [T],
    predicate: P,
    key_fn: K,
}

/// Records satisfying `predicate`, ascending by `key_fn`, stable on ties
pub fn filter_sorted<'a, T, P, K, O>(records: &'a [T], predicate: P, key_fn: K) -> FilterSorted<'a, T, P, K>
where
    P: Fn(&T) -> bool,
    K: Fn(&'a T) -> O,
    O: Ord,
{
    FilterSorted {
        records,
        predicate,
        key_fn,
    }
}

impl<'a, T, P, K, O> FilterSorted<'a, T, P, K>
where
    P: Fn(&T) -> bool,
    K: Fn(&'a T) -> O,
    O: Ord,
{
    /// Run the query and iterate the matches in key order
    pub fn iter(&self) -> std::vec::IntoIter<&'a T> {
        let mut keyed: Vec<(O, &'a T)> = self
            .records
            .iter()
            .filter(|record| (self.predicate)(*record))
            .map(|record| ((self.key_fn)(record), record))
            .collect();

        // sort_by is stable, so equal keys keep their source order
        keyed.sort_by(|a, b| a.0.cmp(&b.0));

        keyed
            .into_iter()
            .map(|(_, record)| record)
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Materialize the result
    pub fn to_vec(&self) -> Vec<&'a T> {
        self.iter().collect()
    }
}

impl<'q, 'a, T, P, K, O> IntoIterator for &'q FilterSorted<'a, T, P, K>
where
    P: Fn(&T) -> bool,
    K: Fn(&'a T) -> O,
    O: Ord,
{
    type Item = &'a T;
    type IntoIter = std::vec::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn by_name(element: &Element) -> &str {
    element.name()
}

/// Elements ranked strictly below `threshold`, ordered by name
pub fn elements_below(
    records: &[Element],
    threshold: i64,
) -> FilterSorted<'_, Element, impl Fn(&Element) -> bool, fn(&Element) -> &str> {
    filter_sorted(
        records,
        move |element: &Element| element.rank() < threshold,
        by_name as fn(&Element) -> &str,
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{default_elements, default_galaxies, Galaxy};

    #[test]
    fn test_elements_below_threshold() {
        let elements = default_elements();
        let query = elements_below(&elements, 22);

        let rows: Vec<(&str, i64)> = query.iter().map(|e| (e.name(), e.rank())).collect();
        assert_eq!(
            rows,
            vec![("Calcium", 20), ("Potassium", 19), ("Scandium", 21)]
        );
    }

    #[test]
    fn test_query_is_restartable() {
        let elements = default_elements();
        let query = elements_below(&elements, 22);

        let first = query.to_vec();
        let second: Vec<&Element> = (&query).into_iter().collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_result_is_sorted_subset() {
        let galaxies = default_galaxies();
        let query = filter_sorted(&galaxies, |g: &Galaxy| g.distance < 100, |g: &Galaxy| g.distance);
        let result = query.to_vec();

        assert!(result.iter().all(|g| g.distance < 100));
        assert!(result.windows(2).all(|w| w[0].distance <= w[1].distance));
        let names: Vec<&str> = result.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Milky Way", "Andromeda", "Pinwheel"]);
    }

    #[test]
    fn test_equal_keys_keep_source_order() {
        let galaxies = vec![
            Galaxy::new("Sombrero", 31),
            Galaxy::new("Whirlpool", 31),
            Galaxy::new("Cartwheel", 500),
            Galaxy::new("Black Eye", 17),
            Galaxy::new("Sunflower", 31),
        ];

        let query = filter_sorted(&galaxies, |_: &Galaxy| true, |g: &Galaxy| g.distance);
        let names: Vec<&str> = query.iter().map(|g| g.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["Black Eye", "Sombrero", "Whirlpool", "Sunflower", "Cartwheel"]
        );
    }

    #[test]
    fn test_no_matches() {
        let elements = default_elements();
        let query = elements_below(&elements, 0);

        assert!(query.to_vec().is_empty());
    }

    #[test]
    fn test_sort_by_string_key() {
        let galaxies = default_galaxies();
        let query = filter_sorted(&galaxies, |_| true, |g: &Galaxy| g.name.clone());
        let names: Vec<&str> = query.iter().map(|g| g.name.as_str()).collect();

        assert_eq!(names, vec!["Andromeda", "Milky Way", "Pinwheel", "Tadpole"]);
    }
}
