//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

/// Storage for computed values.
///
/// `insert` is only called for indices `get` reported as missing.
pub trait Backend<I, K> {
    fn get(&self, index: &I) -> Option<&K>;

    fn insert(&mut self, index: I, value: K);

    /// Number of cached values
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A Vec-based backend for dense `usize` indices starting from 0.
///
/// Grows to fit the largest index inserted.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
}

impl<K> VecBackend<K> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Pre-size for indices `0..capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index)?.as_ref()
    }

    fn insert(&mut self, index: usize, value: K) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        self.data[index] = Some(value);
    }

    fn len(&self) -> usize {
        self.data.iter().filter(|v| v.is_some()).count()
    }
}

/// A HashMap-based backend for sparse or non-integer indices.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn insert(&mut self, index: I, value: K) {
        self.data.insert(index, value);
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
