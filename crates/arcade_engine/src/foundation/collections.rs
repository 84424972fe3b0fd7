//! Specialized collection types

pub use slotmap::{new_key_type, DefaultKey, Key, SlotMap};

/// Handle-based map using slot map for stable references
pub type HandleMap<K, T> = SlotMap<K, T>;

/// Handles queued for removal from a [`HandleMap`].
///
/// Entities found dead while iterating a map are pushed here and removed in
/// one pass once iteration is over, so no handle is invalidated mid-loop.
#[derive(Debug, Clone)]
pub struct RemovalQueue<K: Key> {
    keys: Vec<K>,
}

impl<K: Key> RemovalQueue<K> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Queue a handle. Queuing the same handle twice is a no-op.
    pub fn push(&mut self, key: K) {
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
    }

    /// Whether a handle is already queued
    pub fn contains(&self, key: K) -> bool {
        self.keys.contains(&key)
    }

    /// Number of queued handles
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing is queued
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Remove every queued handle from `map`, returning the removed values
    /// in queue order. Handles that are already gone are skipped.
    pub fn apply<V>(self, map: &mut HandleMap<K, V>) -> Vec<V> {
        self.keys.into_iter().filter_map(|key| map.remove(key)).collect()
    }
}

impl<K: Key> Default for RemovalQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}
