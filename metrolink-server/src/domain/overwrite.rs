//! Insertion-ordered map with overwrite-in-place semantics.

use std::collections::HashMap;
use std::hash::Hash;

/// An ordered key/value association where re-inserting a key replaces its
/// value but keeps the position of the key's first insertion.
///
/// This is the deduplication policy for both stations and platforms: the
/// last report for a key wins, but listing order follows first sight.
///
/// # Examples
///
/// ```
/// use metrolink_server::domain::OverwriteMap;
///
/// let map: OverwriteMap<_, _> = [("A", 1), ("B", 2), ("A", 3)].into_iter().collect();
/// let entries: Vec<_> = map.into_iter().collect();
/// assert_eq!(entries, [("A", 3), ("B", 2)]);
/// ```
#[derive(Debug, Clone)]
pub struct OverwriteMap<K, V> {
    entries: Vec<(K, V)>,
    positions: HashMap<K, usize>,
}

impl<K, V> Default for OverwriteMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> OverwriteMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, overwriting any previous value for the key in place.
    ///
    /// Returns the replaced value, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.positions.get(&key) {
            Some(&idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Values in first-insertion order of their keys.
    pub fn into_values(self) -> impl Iterator<Item = V> {
        self.entries.into_iter().map(|(_, v)| v)
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for OverwriteMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K, V> IntoIterator for OverwriteMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Keys come out unique, in order of first appearance.
        #[test]
        fn keys_in_first_seen_order(pairs in prop::collection::vec((0u8..8, any::<u16>()), 0..40)) {
            let map: OverwriteMap<_, _> = pairs.iter().copied().collect();

            let mut expected = Vec::new();
            for (k, _) in &pairs {
                if !expected.contains(k) {
                    expected.push(*k);
                }
            }

            let keys: Vec<_> = map.into_iter().map(|(k, _)| k).collect();
            prop_assert_eq!(keys, expected);
        }

        /// Every key maps to the last value inserted for it.
        #[test]
        fn last_value_wins(pairs in prop::collection::vec((0u8..8, any::<u16>()), 0..40)) {
            let map: OverwriteMap<_, _> = pairs.iter().copied().collect();

            for (k, v) in map {
                let last = pairs.iter().rev().find(|(pk, _)| *pk == k).map(|(_, pv)| *pv);
                prop_assert_eq!(Some(v), last);
            }
        }
    }
}
