use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The identity no longer exists in the store (stale editor copy,
    /// double delete). Surfaced explicitly instead of a silent no-op so
    /// the caller can distinguish "nothing to do" from a bug.
    #[error("data dengan id {0} tidak ditemukan")]
    NotFound(String),
    #[error("id {0} sudah terpakai")]
    DuplicateId(String),
}

/// Contract between the store and its records.
pub trait StoreRecord: Clone {
    type Id: PartialEq + Clone + std::fmt::Debug;

    fn record_id(&self) -> Self::Id;

    /// Most human-readable field, used when a confirmation dialog or an
    /// error message must name the record (document code, worker name).
    fn display_label(&self) -> String;
}

/// The authoritative ordered list of records for one dashboard.
///
/// Ordering is insertion order with new records prepended; sorting for
/// display is the view's concern and never mutates the store.
#[derive(Debug, Clone)]
pub struct EntityStore<R: StoreRecord> {
    records: Vec<R>,
}

impl<R: StoreRecord> EntityStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Seed the store with sample data. Seed identity collisions are a
    /// programming error in the seed set itself.
    pub fn seeded(records: Vec<R>) -> Self {
        let mut store = Self::new();
        for record in records {
            debug_assert!(
                !store.contains(&record.record_id()),
                "duplicate identity in seed data"
            );
            store.records.push(record);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.records.iter().any(|r| r.record_id() == *id)
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.iter().find(|r| r.record_id() == *id)
    }

    /// Insert a new record at the front of the store.
    pub fn create(&mut self, record: R) -> Result<(), StoreError> {
        let id = record.record_id();
        if self.contains(&id) {
            return Err(StoreError::DuplicateId(format!("{:?}", id)));
        }
        self.records.insert(0, record);
        Ok(())
    }

    /// Replace the whole record carrying the same identity, preserving
    /// its position in the store.
    pub fn update(&mut self, record: R) -> Result<(), StoreError> {
        let id = record.record_id();
        match self.records.iter_mut().find(|r| r.record_id() == id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("{:?}", id))),
        }
    }

    /// Remove the record with the given identity, returning it.
    pub fn delete(&mut self, id: &R::Id) -> Result<R, StoreError> {
        match self.records.iter().position(|r| r.record_id() == *id) {
            Some(pos) => Ok(self.records.remove(pos)),
            None => Err(StoreError::NotFound(format!("{:?}", id))),
        }
    }
}

impl<R: StoreRecord> Default for EntityStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Next free numeric identity for register-style records.
pub fn next_numeric_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        name: String,
    }

    impl StoreRecord for Item {
        type Id = i64;

        fn record_id(&self) -> i64 {
            self.id
        }

        fn display_label(&self) -> String {
            self.name.clone()
        }
    }

    fn item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_create_prepends() {
        let mut store = EntityStore::new();
        store.create(item(1, "a")).unwrap();
        store.create(item(2, "b")).unwrap();
        let ids: Vec<i64> = store.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_create_rejects_duplicate_identity() {
        let mut store = EntityStore::new();
        store.create(item(1, "a")).unwrap();
        let err = store.create(item(1, "b")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&1).map(|r| r.name.as_str()), Some("a"));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = EntityStore::seeded(vec![item(3, "c"), item(2, "b"), item(1, "a")]);
        store.update(item(2, "B")).unwrap();
        let names: Vec<&str> = store.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "B", "a"]);
    }

    #[test]
    fn test_update_missing_is_not_found_and_no_mutation() {
        let mut store = EntityStore::seeded(vec![item(1, "a")]);
        let err = store.update(item(9, "x")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_twice_leaves_store_unchanged() {
        let mut store = EntityStore::seeded(vec![item(2, "b"), item(1, "a")]);
        let removed = store.delete(&2).unwrap();
        assert_eq!(removed.name, "b");
        let snapshot: Vec<Item> = store.records().to_vec();

        // Second delete reports NotFound but must not change anything.
        assert!(matches!(store.delete(&2), Err(StoreError::NotFound(_))));
        assert_eq!(store.records(), snapshot.as_slice());
    }

    #[test]
    fn test_next_numeric_id() {
        assert_eq!(next_numeric_id([].into_iter()), 1);
        assert_eq!(next_numeric_id([4, 2, 9].into_iter()), 10);
    }
}
