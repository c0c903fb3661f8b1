use super::*;

enum Operation {
    Checkpoint,
    Commit,
}

struct StorageOperation {
    operations: Vec<Operation>,
}

impl StorageOperation {
    fn execute(
        &self,
        storage: &InMemoryStorage,
        working_set: WorkingSet<InMemoryStorage>,
    ) -> WorkingSet<InMemoryStorage> {
        let mut working_set = working_set;
        for op in self.operations.iter() {
            working_set = match op {
                Operation::Checkpoint => working_set.checkpoint().to_revertable(),
                Operation::Commit => {
                    working_set
                        .checkpoint()
                        .commit()
                        .expect("In-memory commit must succeed");
                    WorkingSet::new(storage.clone())
                }
            }
        }
        working_set
    }
}

fn create_storage_operations() -> Vec<(StorageOperation, StorageOperation)> {
    // Various interweavings of checkpoints and commits between a write and a read.
    vec![
        (
            StorageOperation { operations: vec![] },
            StorageOperation { operations: vec![] },
        ),
        (
            StorageOperation {
                operations: vec![Operation::Checkpoint],
            },
            StorageOperation { operations: vec![] },
        ),
        (
            StorageOperation {
                operations: vec![Operation::Checkpoint, Operation::Commit],
            },
            StorageOperation { operations: vec![] },
        ),
        (
            StorageOperation {
                operations: vec![Operation::Checkpoint],
            },
            StorageOperation {
                operations: vec![Operation::Commit],
            },
        ),
        (
            StorageOperation { operations: vec![] },
            StorageOperation {
                operations: vec![Operation::Checkpoint, Operation::Commit],
            },
        ),
    ]
}

#[test]
fn test_state_map_overwrite() {
    for (before_overwrite, after_overwrite) in create_storage_operations() {
        let key = 1u32;
        let state_map: StateMap<u32, bool> = StateMap::new(Prefix::new(vec![0]));

        let storage = InMemoryStorage::new();
        let mut working_set = WorkingSet::new(storage.clone());
        state_map.set(&key, &false, &mut working_set);

        working_set = before_overwrite.execute(&storage, working_set);
        assert_eq!(state_map.get(&key, &mut working_set), Some(false));
        state_map.set(&key, &true, &mut working_set);

        working_set = after_overwrite.execute(&storage, working_set);
        assert_eq!(state_map.get(&key, &mut working_set), Some(true));
        assert!(state_map.get(&2, &mut working_set).is_none());
    }
}

#[test]
fn test_state_value_survives_checkpoints_and_commits() {
    for (before_read, after_read) in create_storage_operations() {
        let value = 7u64;
        let state_value: StateValue<u64> = StateValue::new(Prefix::new(vec![0]));

        let storage = InMemoryStorage::new();
        let mut working_set = WorkingSet::new(storage.clone());
        state_value.set(&value, &mut working_set);

        working_set = before_read.execute(&storage, working_set);
        assert_eq!(state_value.get(&mut working_set), Some(value));

        working_set = after_read.execute(&storage, working_set);
        assert_eq!(state_value.get_or_err(&mut working_set).unwrap(), value);
    }
}

#[test]
fn test_revert_discards_writes_and_events() {
    let storage = InMemoryStorage::new();
    let state_value: StateValue<u64> = StateValue::new(Prefix::new(vec![1]));

    let mut working_set = WorkingSet::new(storage.clone());
    state_value.set(&1, &mut working_set);
    let mut working_set = working_set.checkpoint().to_revertable();

    state_value.set(&2, &mut working_set);
    working_set.add_event("key", "value");
    assert_eq!(working_set.events().len(), 1);

    let mut working_set = working_set.revert().to_revertable();
    assert_eq!(state_value.get(&mut working_set), Some(1));
    assert!(working_set.events().is_empty());

    // Nothing reaches the storage until the checkpoint is committed.
    assert!(storage.is_empty());
    let version = working_set.checkpoint().commit().unwrap();
    assert_eq!(version, 1);
    assert!(!storage.is_empty());
}

#[test]
fn test_state_vec_push_and_iterate() {
    let state_vec: StateVec<String> = StateVec::new(Prefix::new(vec![2]));
    let mut working_set = WorkingSet::new(InMemoryStorage::new());

    assert_eq!(state_vec.len(&mut working_set), 0);
    assert_eq!(state_vec.iter(&mut working_set).count(), 0);

    assert_eq!(state_vec.push(&"a".to_owned(), &mut working_set), 0);
    assert_eq!(state_vec.push(&"b".to_owned(), &mut working_set), 1);
    assert_eq!(state_vec.push(&"c".to_owned(), &mut working_set), 2);

    assert_eq!(state_vec.len(&mut working_set), 3);
    assert_eq!(state_vec.get(2, &mut working_set), Some("c".to_owned()));

    let collected: Vec<String> = state_vec.iter(&mut working_set).collect();
    assert_eq!(collected, vec!["a", "b", "c"]);

    state_vec
        .set(1, &"B".to_owned(), &mut working_set)
        .unwrap();
    assert_eq!(state_vec.get_or_err(1, &mut working_set).unwrap(), "B");

    assert!(matches!(
        state_vec.get_or_err(3, &mut working_set),
        Err(StateVecError::IndexOutOfBounds(3))
    ));
    assert!(matches!(
        state_vec.set(3, &"d".to_owned(), &mut working_set),
        Err(StateVecError::IndexOutOfBounds(3))
    ));
}

#[test]
fn test_snapshot_is_pinned() {
    let storage = InMemoryStorage::new();
    let state_value: StateValue<u64> = StateValue::new(Prefix::new(vec![3]));

    let mut working_set = WorkingSet::new(storage.clone());
    state_value.set(&1, &mut working_set);
    working_set.checkpoint().commit().unwrap();

    let snapshot = storage.snapshot();
    assert!(snapshot.is_snapshot());

    let mut working_set = WorkingSet::new(storage.clone());
    state_value.set(&2, &mut working_set);
    working_set.checkpoint().commit().unwrap();

    let mut snapshot_ws = WorkingSet::new(snapshot.clone());
    assert_eq!(state_value.get(&mut snapshot_ws), Some(1));
    assert_eq!(snapshot.version(), 1);
    assert_eq!(storage.version(), 2);

    let mut live_ws = WorkingSet::new(storage);
    assert_eq!(state_value.get(&mut live_ws), Some(2));

    state_value.set(&3, &mut snapshot_ws);
    assert!(snapshot_ws.checkpoint().commit().is_err());
}

#[test]
fn test_missing_value_errors() {
    let mut working_set = WorkingSet::new(InMemoryStorage::new());

    let state_value: StateValue<u64> = StateValue::new(Prefix::new(b"value".to_vec()));
    let err = state_value.get_or_err(&mut working_set).unwrap_err();
    assert_eq!(err.to_string(), "Value not found for prefix: \"value\"");

    let state_map: StateMap<u64, u64> = StateMap::new(Prefix::new(b"map".to_vec()));
    assert!(matches!(
        state_map.get_or_err(&5, &mut working_set),
        Err(StateMapError::MissingValue(_, _))
    ));
}
