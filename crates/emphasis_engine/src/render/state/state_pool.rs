//! Pool of live render states
//!
//! Every [`RenderState`](super::RenderState) registers here when it is created
//! and unregisters when it is released. The pool tracks each state's current
//! cache key, which lets a renderer find states that hold identical parameters
//! and reuse whatever it derived for one of them.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable identifier of a live render state
    pub struct StateId;
}

/// Semantic identity of a render state: hash of its type tag and values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(pub u64);

/// Pool shared by every state created for one scene
///
/// Render states are single-threaded; share the pool across threads only
/// behind external synchronization.
pub type SharedStatePool = Rc<RefCell<StatePool>>;

#[derive(Debug, Clone, Copy)]
struct PoolEntry {
    type_name: &'static str,
    key: StateKey,
}

/// Registry of live render states
#[derive(Debug, Default)]
pub struct StatePool {
    entries: SlotMap<StateId, PoolEntry>,
}

impl StatePool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pool ready to be shared between materials
    pub fn shared() -> SharedStatePool {
        Rc::new(RefCell::new(Self::new()))
    }

    pub(crate) fn register(&mut self, type_name: &'static str, key: StateKey) -> StateId {
        let id = self.entries.insert(PoolEntry { type_name, key });
        log::trace!("Registered {} render state {:?} ({} live)", type_name, id, self.entries.len());
        id
    }

    pub(crate) fn update_key(&mut self, id: StateId, key: StateKey) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.key = key;
                true
            }
            None => false,
        }
    }

    pub(crate) fn unregister(&mut self, id: StateId) -> bool {
        let removed = self.entries.remove(id);
        if let Some(entry) = removed {
            log::trace!(
                "Released {} render state {:?} ({} live)",
                entry.type_name,
                id,
                self.entries.len()
            );
        }
        removed.is_some()
    }

    /// Number of live states
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no state is live
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a state is still registered
    pub fn contains(&self, id: StateId) -> bool {
        self.entries.contains_key(id)
    }

    /// Current cache key of a live state
    pub fn cache_key(&self, id: StateId) -> Option<StateKey> {
        self.entries.get(id).map(|entry| entry.key)
    }

    /// Type tag of a live state
    pub fn type_name(&self, id: StateId) -> Option<&'static str> {
        self.entries.get(id).map(|entry| entry.type_name)
    }

    /// Other live states whose parameters are identical to `id`'s
    pub fn equivalents(&self, id: StateId) -> Vec<StateId> {
        let Some(key) = self.cache_key(id) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|(other, entry)| *other != id && entry.key == key)
            .map(|(other, _)| other)
            .collect()
    }

    /// Number of distinct parameter sets among live states
    pub fn distinct_keys(&self) -> usize {
        let mut counts: HashMap<StateKey, usize> = HashMap::with_capacity(self.entries.len());
        for entry in self.entries.values() {
            *counts.entry(entry.key).or_default() += 1;
        }
        counts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_unregister() {
        let mut pool = StatePool::new();
        let id = pool.register("EmphasisMaterial", StateKey(7));

        assert_eq!(pool.len(), 1);
        assert!(pool.contains(id));
        assert_eq!(pool.type_name(id), Some("EmphasisMaterial"));
        assert_eq!(pool.cache_key(id), Some(StateKey(7)));

        assert!(pool.unregister(id));
        assert!(!pool.unregister(id));
        assert!(pool.is_empty());
        assert_eq!(pool.cache_key(id), None);
    }

    #[test]
    fn test_stale_id_is_not_reused() {
        let mut pool = StatePool::new();
        let first = pool.register("A", StateKey(1));
        pool.unregister(first);
        let second = pool.register("A", StateKey(1));

        assert_ne!(first, second);
        assert!(!pool.contains(first));
        assert!(!pool.update_key(first, StateKey(2)));
    }

    #[test]
    fn test_equivalents_follow_key_updates() {
        let mut pool = StatePool::new();
        let a = pool.register("A", StateKey(1));
        let b = pool.register("A", StateKey(1));
        let c = pool.register("A", StateKey(2));

        assert_eq!(pool.equivalents(a), vec![b]);
        assert_eq!(pool.distinct_keys(), 2);

        pool.update_key(c, StateKey(1));
        let mut shared = pool.equivalents(a);
        shared.sort();
        let mut expected = vec![b, c];
        expected.sort();
        assert_eq!(shared, expected);
        assert_eq!(pool.distinct_keys(), 1);
    }
}
