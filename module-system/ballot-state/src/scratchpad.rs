use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;

use crate::codec::{StateCodec, StateKeyCodec, StateValueCodec};
use crate::storage::{StorageKey, StorageValue};
use crate::{Event, Prefix, Storage};

/// The writes accumulated by a [`StateCheckpoint`], sorted by key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderedWrites {
    /// Writes in ascending key order.
    pub ordered_writes: Vec<(StorageKey, StorageValue)>,
}

/// Accumulates committed writes on top of the underlying storage.
struct Delta<S: Storage> {
    inner: S,
    writes: BTreeMap<StorageKey, StorageValue>,
}

/// A wrapper that adds additional writes on top of an underlying [`Delta`].
/// These are handy for implementing operations that might revert on top of an existing
/// checkpoint, without discarding the whole checkpoint if one operation reverts.
struct RevertableDelta<S: Storage> {
    /// The inner (non-revertable) delta.
    inner: Delta<S>,
    /// The most recent values written. Reads are first checked against this map,
    /// and if the key is not present, the underlying [`Delta`] is checked.
    writes: HashMap<StorageKey, StorageValue>,
}

impl<S: Storage> Debug for Delta<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Delta")
            .field("writes", &self.writes.len())
            .finish()
    }
}

impl<S: Storage> Debug for RevertableDelta<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevertableDelta")
            .field("inner", &self.inner)
            .field("writes", &self.writes.len())
            .finish()
    }
}

/// This structure holds the writes that survived all the working sets opened on it.
/// It is obtained from a [`WorkingSet`] with either the `checkpoint` or the `revert` method.
pub struct StateCheckpoint<S: Storage> {
    delta: Delta<S>,
}

impl<S: Storage> StateCheckpoint<S> {
    /// Creates an empty checkpoint over the given storage.
    pub fn new(inner: S) -> Self {
        Self {
            delta: Delta::new(inner),
        }
    }

    /// Opens a [`WorkingSet`] whose writes can later be checkpointed or reverted.
    pub fn to_revertable(self) -> WorkingSet<S> {
        WorkingSet {
            delta: self.delta.get_revertable_wrapper(),
            events: Default::default(),
        }
    }

    /// Takes the accumulated writes out of the checkpoint, leaving it empty.
    pub fn freeze(&mut self) -> OrderedWrites {
        self.delta.freeze()
    }

    /// Flushes the accumulated writes into the underlying storage.
    pub fn commit(mut self) -> anyhow::Result<u64> {
        let writes = self.freeze();
        self.delta.inner.commit(writes)
    }
}

/// This structure contains the read-write set and the events collected during the execution of a call.
/// There are two ways to convert it into a [`StateCheckpoint`]:
/// 1. By using the [`WorkingSet::checkpoint`] method, where all the changes are added to the underlying checkpoint.
/// 2. By using the [`WorkingSet::revert`] method, where the changes and events are dropped and the previous checkpoint is returned.
pub struct WorkingSet<S: Storage> {
    delta: RevertableDelta<S>,
    events: Vec<Event>,
}

impl<S: Storage> WorkingSet<S> {
    /// Opens a working set directly over the storage.
    pub fn new(inner: S) -> Self {
        StateCheckpoint::new(inner).to_revertable()
    }

    /// Folds the writes of this working set into the underlying checkpoint.
    pub fn checkpoint(self) -> StateCheckpoint<S> {
        StateCheckpoint {
            delta: self.delta.commit(),
        }
    }

    /// Drops the writes and events of this working set.
    pub fn revert(self) -> StateCheckpoint<S> {
        StateCheckpoint {
            delta: self.delta.revert(),
        }
    }

    /// Records an event.
    pub fn add_event(&mut self, key: &str, value: &str) {
        self.events.push(Event::new(key, value));
    }

    /// Takes all recorded events out of the working set.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Returns the events recorded so far.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    fn get(&mut self, key: &StorageKey) -> Option<StorageValue> {
        self.delta.get(key)
    }

    fn set(&mut self, key: StorageKey, value: StorageValue) {
        self.delta.set(key, value)
    }
}

impl<S: Storage> WorkingSet<S> {
    pub(crate) fn set_value<K, V, Codec>(
        &mut self,
        prefix: &Prefix,
        storage_key: &K,
        value: &V,
        codec: &Codec,
    ) where
        Codec: StateCodec,
        Codec::KeyCodec: StateKeyCodec<K>,
        Codec::ValueCodec: StateValueCodec<V>,
    {
        let storage_key = StorageKey::new(prefix, storage_key, codec.key_codec());
        let storage_value = StorageValue::new(value, codec.value_codec());
        self.set(storage_key, storage_value);
    }

    pub(crate) fn get_value<K, V, Codec>(
        &mut self,
        prefix: &Prefix,
        storage_key: &K,
        codec: &Codec,
    ) -> Option<V>
    where
        Codec: StateCodec,
        Codec::KeyCodec: StateKeyCodec<K>,
        Codec::ValueCodec: StateValueCodec<V>,
    {
        let storage_key = StorageKey::new(prefix, storage_key, codec.key_codec());
        self.get_decoded(&storage_key, codec)
    }

    pub(crate) fn set_singleton<V, Codec>(&mut self, prefix: &Prefix, value: &V, codec: &Codec)
    where
        Codec: StateCodec,
        Codec::ValueCodec: StateValueCodec<V>,
    {
        let storage_key = StorageKey::singleton(prefix);
        let storage_value = StorageValue::new(value, codec.value_codec());
        self.set(storage_key, storage_value);
    }

    pub(crate) fn get_singleton<V, Codec>(&mut self, prefix: &Prefix, codec: &Codec) -> Option<V>
    where
        Codec: StateCodec,
        Codec::ValueCodec: StateValueCodec<V>,
    {
        let storage_key = StorageKey::singleton(prefix);
        self.get_decoded(&storage_key, codec)
    }

    fn get_decoded<V, Codec>(&mut self, storage_key: &StorageKey, codec: &Codec) -> Option<V>
    where
        Codec: StateCodec,
        Codec::ValueCodec: StateValueCodec<V>,
    {
        let storage_value = self.get(storage_key)?;

        // It is ok to panic here. Deserialization problem means that something is terribly wrong.
        Some(
            codec
                .value_codec()
                .decode_value_unwrap(storage_value.value()),
        )
    }
}

impl<S: Storage> RevertableDelta<S> {
    fn get(&mut self, key: &StorageKey) -> Option<StorageValue> {
        if let Some(value) = self.writes.get(key) {
            return Some(value.clone());
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: StorageKey, value: StorageValue) {
        self.writes.insert(key, value);
    }

    fn commit(self) -> Delta<S> {
        let mut inner = self.inner;
        inner.writes.extend(self.writes);
        inner
    }

    fn revert(self) -> Delta<S> {
        self.inner
    }
}

impl<S: Storage> Delta<S> {
    fn new(inner: S) -> Self {
        Self {
            inner,
            writes: Default::default(),
        }
    }

    fn get_revertable_wrapper(self) -> RevertableDelta<S> {
        RevertableDelta {
            inner: self,
            writes: Default::default(),
        }
    }

    fn get(&self, key: &StorageKey) -> Option<StorageValue> {
        match self.writes.get(key) {
            Some(value) => Some(value.clone()),
            None => self.inner.get(key),
        }
    }

    fn freeze(&mut self) -> OrderedWrites {
        let writes = std::mem::take(&mut self.writes);
        OrderedWrites {
            ordered_writes: writes.into_iter().collect(),
        }
    }
}
