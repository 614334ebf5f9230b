//! Bounded least-recently-used cache for query results.
//!
//! Typing a query and deleting characters revisits the same prefixes, so the
//! index keeps the results of the most recent distinct queries. A capacity of
//! zero disables caching.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::{HashMap, VecDeque};

/// LRU cache keyed by the raw query string.
#[derive(Debug, Clone)]
pub struct QueryCache<V> {
    capacity: usize,
    entries: HashMap<String, V>,
    /// Keys from least to most recently used.
    order: VecDeque<String>,
}

impl<V: Clone> QueryCache<V> {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { capacity, entries: HashMap::with_capacity(capacity), order: VecDeque::with_capacity(capacity) }
    }

    /// Fetch a cached value and mark it most recently used.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let value = self.entries.get(key)?.clone();
        self.touch(key);
        Some(value)
    }

    /// Store a value, evicting the least recently used entry when full.
    pub fn insert(&mut self, key: &str, value: V) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.insert(key.to_owned(), value).is_some() {
            self.touch(key);
            return;
        }
        self.order.push_back(key.to_owned());
        while self.order.len() > self.capacity {
            if let Some(evicted) = self.order.pop_front() {
                self.entries.remove(&evicted);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }
}
