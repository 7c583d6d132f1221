//! In-memory item store.
//!
//! [`Records`] holds the item map and the ID counter with no synchronization.
//! [`InMemoryStore`] wraps it in a single `tokio::sync::Mutex` and is the type
//! shared across handler tasks. Every store operation takes the lock once,
//! performs exactly one `Records` call, and releases it; readers and writers
//! are equally exclusive.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::types::{Item, ItemId};

/// The unlocked item map plus the next ID to mint.
///
/// IDs start at 1 and are never reused, even after the item holding one is
/// deleted.
#[derive(Debug)]
pub struct Records {
    items: HashMap<ItemId, Item>,
    next_id: u64,
}

impl Records {
    pub fn new() -> Self {
        Records {
            items: HashMap::new(),
            next_id: 1,
        }
    }

    #[cfg(test)]
    fn starting_at(next_id: u64) -> Self {
        Records {
            items: HashMap::new(),
            next_id,
        }
    }

    /// Snapshot of all items, in no particular order.
    pub fn list(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    /// Stores a new item under the next counter value.
    pub fn create(&mut self, name: String) -> Result<Item, StorageError> {
        let following = self
            .next_id
            .checked_add(1)
            .ok_or(StorageError::IdSpaceExhausted)?;
        let id = ItemId::from_counter(self.next_id);
        self.next_id = following;

        let item = Item { id: id.clone(), name };
        self.items.insert(id, item.clone());
        Ok(item)
    }

    pub fn get(&self, id: &ItemId) -> Result<Item, StorageError> {
        self.items
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::ItemNotFound(id.clone()))
    }

    /// Replaces the name of an existing item. The ID is preserved.
    pub fn update(&mut self, id: &ItemId, name: String) -> Result<Item, StorageError> {
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| StorageError::ItemNotFound(id.clone()))?;
        item.name = name;
        Ok(item.clone())
    }

    pub fn delete(&mut self, id: &ItemId) -> Result<(), StorageError> {
        self.items
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StorageError::ItemNotFound(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The ID the next `create` will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for Records {
    fn default() -> Self {
        Self::new()
    }
}

/// Item store shared by all request handlers.
///
/// Uses `tokio::sync::Mutex` so a handler waiting on the lock yields to the
/// runtime instead of blocking a worker thread. The guard never outlives a
/// single method call, so request decoding and response encoding always
/// happen outside the critical section.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<Records>,
}

impl InMemoryStore {
    /// Creates an empty store whose first item will get ID `"1"`.
    pub fn new() -> Self {
        InMemoryStore {
            records: Mutex::new(Records::new()),
        }
    }

    pub async fn list(&self) -> Vec<Item> {
        self.records.lock().await.list()
    }

    pub async fn create(&self, name: String) -> Result<Item, StorageError> {
        let mut records = self.records.lock().await;
        let item = records.create(name)?;
        let stored = records.len();
        drop(records);
        tracing::debug!(id = %item.id, stored, "item created");
        Ok(item)
    }

    pub async fn get(&self, id: &ItemId) -> Result<Item, StorageError> {
        self.records.lock().await.get(id)
    }

    pub async fn update(&self, id: &ItemId, name: String) -> Result<Item, StorageError> {
        self.records.lock().await.update(id, name)
    }

    pub async fn delete(&self, id: &ItemId) -> Result<(), StorageError> {
        let mut records = self.records.lock().await;
        records.delete(id)?;
        let stored = records.len();
        drop(records);
        tracing::debug!(%id, stored, "item deleted");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn create_assigns_sequential_ids_from_one() {
        let mut records = Records::new();
        let a = records.create("a".into()).unwrap();
        let b = records.create("b".into()).unwrap();
        assert_eq!(a.id, ItemId::from("1"));
        assert_eq!(b.id, ItemId::from("2"));
        assert_eq!(records.next_id(), 3);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn get_round_trips_created_item() {
        let mut records = Records::new();
        let created = records.create("x".into()).unwrap();
        let fetched = records.get(&created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "x");
    }

    #[test]
    fn update_preserves_id() {
        let mut records = Records::new();
        let created = records.create("x".into()).unwrap();
        let updated = records.update(&created.id, "y".into()).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "y");
        assert_eq!(records.get(&created.id).unwrap().name, "y");
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut records = Records::new();
        let missing = ItemId::from("7");
        assert_eq!(
            records.update(&missing, "y".into()),
            Err(StorageError::ItemNotFound(missing.clone()))
        );
        assert!(records.is_empty());
    }

    #[test]
    fn delete_removes_and_second_delete_fails() {
        let mut records = Records::new();
        let created = records.create("x".into()).unwrap();
        records.delete(&created.id).unwrap();
        assert_eq!(
            records.get(&created.id),
            Err(StorageError::ItemNotFound(created.id.clone()))
        );
        assert_eq!(
            records.delete(&created.id),
            Err(StorageError::ItemNotFound(created.id.clone()))
        );
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut records = Records::new();
        let first = records.create("a".into()).unwrap();
        records.delete(&first.id).unwrap();
        let second = records.create("b".into()).unwrap();
        assert_eq!(second.id, ItemId::from("2"));
    }

    #[test]
    fn empty_id_is_never_found() {
        let mut records = Records::new();
        records.create("a".into()).unwrap();
        let empty = ItemId::from("");
        assert!(records.get(&empty).is_err());
        assert!(records.update(&empty, "b".into()).is_err());
        assert!(records.delete(&empty).is_err());
    }

    #[test]
    fn list_reflects_deletes() {
        let mut records = Records::new();
        let a = records.create("A".into()).unwrap();
        let b = records.create("B".into()).unwrap();
        records.delete(&a.id).unwrap();
        assert_eq!(records.list(), vec![b]);
    }

    #[test]
    fn counter_exhaustion_is_an_error() {
        let mut records = Records::starting_at(u64::MAX - 1);
        let last = records.create("last".into()).unwrap();
        assert_eq!(last.id, ItemId::from_counter(u64::MAX - 1));
        assert_eq!(
            records.create("overflow".into()),
            Err(StorageError::IdSpaceExhausted)
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records.next_id(), u64::MAX);
    }

    #[tokio::test]
    async fn store_operations_delegate_to_records() {
        let store = InMemoryStore::new();
        assert!(store.list().await.is_empty());

        let created = store.create("pen".into()).await.unwrap();
        assert_eq!(created.id, ItemId::from("1"));
        assert_eq!(store.get(&created.id).await.unwrap().name, "pen");

        let updated = store.update(&created.id, "pencil".into()).await.unwrap();
        assert_eq!(updated.name, "pencil");
        assert_eq!(store.len().await, 1);

        store.delete(&created.id).await.unwrap();
        assert!(store.get(&created.id).await.is_err());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_ids() {
        const N: u64 = 200;
        let store = Arc::new(InMemoryStore::new());

        let handles: Vec<_> = (0..N)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(format!("item-{i}")).await.unwrap() })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().id);
        }

        let expected: HashSet<ItemId> = (1..=N).map(ItemId::from_counter).collect();
        assert_eq!(ids, expected);
        assert_eq!(store.len().await, N as usize);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Create(String),
        Delete(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-z]{0,8}".prop_map(Op::Create),
            (0usize..16).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #[test]
        fn ids_strictly_increase_and_list_matches_model(
            ops in proptest::collection::vec(op_strategy(), 0..64)
        ) {
            let mut records = Records::new();
            let mut model: Vec<Item> = Vec::new();
            let mut last_id = 0u64;

            for op in ops {
                match op {
                    Op::Create(name) => {
                        let item = records.create(name.clone()).unwrap();
                        let n: u64 = item.id.as_str().parse().unwrap();
                        prop_assert!(n > last_id);
                        last_id = n;
                        prop_assert_eq!(&item.name, &name);
                        model.push(item);
                    }
                    Op::Delete(idx) => {
                        if model.is_empty() {
                            continue;
                        }
                        let victim = model.remove(idx % model.len());
                        prop_assert!(records.delete(&victim.id).is_ok());
                    }
                }
            }

            let mut listed = records.list();
            listed.sort_by(|a, b| a.id.cmp(&b.id));
            model.sort_by(|a, b| a.id.cmp(&b.id));
            prop_assert_eq!(listed, model);
        }
    }
}
