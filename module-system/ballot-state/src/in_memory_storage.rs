use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use anyhow::bail;

use crate::scratchpad::OrderedWrites;
use crate::storage::{Storage, StorageKey, StorageValue};

#[derive(Clone, Debug, Default)]
struct VersionedState {
    version: u64,
    values: Arc<BTreeMap<StorageKey, StorageValue>>,
}

/// A [`Storage`] implementation that keeps all state in memory.
///
/// Clones share the same data. A [`Storage::commit`] applies its whole batch
/// under the write lock, so a reader observes either all writes of a batch or
/// none of them. [`Storage::snapshot`] pins a clone to the current version,
/// which gives a consistent view across many reads even while other clones
/// keep committing. Commits through a snapshot are rejected.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStorage {
    db: Arc<RwLock<VersionedState>>,
    pinned: Option<VersionedState>,
}

impl InMemoryStorage {
    /// Creates a new, empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if this instance is a pinned, read-only view.
    pub fn is_snapshot(&self) -> bool {
        self.pinned.is_some()
    }

    fn current(&self) -> VersionedState {
        match &self.pinned {
            Some(state) => state.clone(),
            None => self
                .db
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
        }
    }
}

impl Storage for InMemoryStorage {
    fn get(&self, key: &StorageKey) -> Option<StorageValue> {
        self.current().values.get(key).cloned()
    }

    fn commit(&self, writes: OrderedWrites) -> anyhow::Result<u64> {
        if let Some(pinned) = &self.pinned {
            bail!(
                "Cannot commit through a storage snapshot pinned at version {}",
                pinned.version
            );
        }

        let mut state = self.db.write().unwrap_or_else(PoisonError::into_inner);
        // Copies the map only while a snapshot still shares it.
        Arc::make_mut(&mut state.values).extend(writes.ordered_writes);
        state.version += 1;
        Ok(state.version)
    }

    fn version(&self) -> u64 {
        self.current().version
    }

    fn is_empty(&self) -> bool {
        self.current().values.is_empty()
    }

    fn snapshot(&self) -> Self {
        Self {
            db: self.db.clone(),
            pinned: Some(self.current()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::BorshCodec;
    use crate::Prefix;

    fn write(key: u8, value: u64) -> OrderedWrites {
        OrderedWrites {
            ordered_writes: vec![(
                StorageKey::singleton(&Prefix::new(vec![key])),
                StorageValue::new(&value, &BorshCodec),
            )],
        }
    }

    fn values_ptr(storage: &InMemoryStorage) -> *const BTreeMap<StorageKey, StorageValue> {
        Arc::as_ptr(&storage.db.read().unwrap().values)
    }

    #[test]
    fn test_commit_updates_unshared_state_in_place() {
        let storage = InMemoryStorage::new();
        storage.commit(write(1, 1)).unwrap();

        let before = values_ptr(&storage);
        storage.commit(write(2, 2)).unwrap();
        assert_eq!(values_ptr(&storage), before);
        assert_eq!(storage.version(), 2);
    }

    #[test]
    fn test_commit_copies_state_shared_with_snapshot() {
        let storage = InMemoryStorage::new();
        storage.commit(write(1, 1)).unwrap();

        let snapshot = storage.snapshot();
        let before = values_ptr(&storage);
        storage.commit(write(1, 2)).unwrap();
        assert_ne!(values_ptr(&storage), before);

        let key = StorageKey::singleton(&Prefix::new(vec![1]));
        assert_eq!(
            snapshot.get(&key),
            Some(StorageValue::new(&1u64, &BorshCodec))
        );
        assert_eq!(storage.get(&key), Some(StorageValue::new(&2u64, &BorshCodec)));
        assert_eq!(snapshot.version(), 1);
    }
}
