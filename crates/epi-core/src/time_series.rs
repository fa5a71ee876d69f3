//! Generic time-indexed observation container.
//!
//! `TimeSeries<K, V>` is an ordered map from a time key to an observation.
//! Dataset containers in the surveillance pipeline hold one series per
//! location and align them to a common `PeriodRange` timeline; missing keys
//! simply return `None`, so sparse series are representable without a
//! sentinel value.

use std::collections::BTreeMap;

/// An ordered, time-indexed container backed by a `BTreeMap`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries<K: Ord, V> {
    data: BTreeMap<K, V>,
}

impl<K: Ord, V> Default for TimeSeries<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> std::iter::FromIterator<(K, V)> for TimeSeries<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord, V> TimeSeries<K, V> {
    /// Create an empty series.
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Build from an iterator of `(key, observation)` pairs.
    pub fn from_pairs(iter: impl IntoIterator<Item = (K, V)>) -> Self {
        iter.into_iter().collect()
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The earliest key, or `None` if empty.
    pub fn first_key(&self) -> Option<&K> {
        self.data.keys().next()
    }

    /// The latest key, or `None` if empty.
    pub fn last_key(&self) -> Option<&K> {
        self.data.keys().next_back()
    }

    /// Look up the observation at a key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.data.get(key)
    }

    /// Whether a key is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.data.contains_key(key)
    }

    /// Insert or overwrite an observation.
    pub fn insert(&mut self, key: K, value: V) {
        self.data.insert(key, value);
    }

    /// Remove an observation, returning it if present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.data.remove(key)
    }

    /// Iterate over `(key, observation)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.data.iter()
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.data.keys()
    }

    /// All observations in key-ascending order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.data.values()
    }
}
