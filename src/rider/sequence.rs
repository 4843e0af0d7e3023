// src/rider/sequence.rs
//! Ordered pair sequence with on-demand lookup
//!
//! There is no cached index: every lookup walks the sequence, so a lookup
//! can never disagree with the pairs it was computed from. When a key occurs
//! more than once the last occurrence wins, for lookup and for the settings
//! view alike.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pair::KeyValuePair;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairSequence {
    pairs: Vec<KeyValuePair>,
}

impl PairSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn as_slice(&self) -> &[KeyValuePair] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyValuePair> {
        self.pairs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, KeyValuePair> {
        self.pairs.iter_mut()
    }

    /// Appends a pair; duplicate keys are kept in order.
    pub fn push(&mut self, pair: KeyValuePair) {
        self.pairs.push(pair);
    }

    /// Exact, case-sensitive key match.
    pub fn lookup(&self, key: &str) -> Option<&KeyValuePair> {
        self.pairs.iter().rev().find(|p| p.key() == key)
    }

    pub fn lookup_mut(&mut self, key: &str) -> Option<&mut KeyValuePair> {
        self.pairs.iter_mut().rev().find(|p| p.key() == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Updates the pair for `key` in place, or appends a new one.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        match self.lookup_mut(key) {
            Some(pair) => pair.set_value(value),
            None => self.pairs.push(KeyValuePair::new(key, value)),
        }
    }

    /// Removes every pair with `key`, returning how many were dropped.
    pub fn remove(&mut self, key: &str) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|p| p.key() != key);
        before - self.pairs.len()
    }

    /// Key → pair map built fresh from the current sequence.
    pub fn index(&self) -> BTreeMap<&str, &KeyValuePair> {
        self.pairs.iter().map(|p| (p.key(), p)).collect()
    }

    /// Key-sorted snapshot of key → value.
    pub fn settings(&self) -> BTreeMap<String, Option<String>> {
        self.index()
            .into_iter()
            .map(|(k, p)| (k.to_owned(), p.value().map(str::to_owned)))
            .collect()
    }

    pub fn into_vec(self) -> Vec<KeyValuePair> {
        self.pairs
    }
}

impl From<Vec<KeyValuePair>> for PairSequence {
    fn from(pairs: Vec<KeyValuePair>) -> Self {
        Self { pairs }
    }
}

impl FromIterator<KeyValuePair> for PairSequence {
    fn from_iter<I: IntoIterator<Item = KeyValuePair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl Extend<KeyValuePair> for PairSequence {
    fn extend<I: IntoIterator<Item = KeyValuePair>>(&mut self, iter: I) {
        self.pairs.extend(iter);
    }
}

impl IntoIterator for PairSequence {
    type Item = KeyValuePair;
    type IntoIter = std::vec::IntoIter<KeyValuePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a PairSequence {
    type Item = &'a KeyValuePair;
    type IntoIter = std::slice::Iter<'a, KeyValuePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
