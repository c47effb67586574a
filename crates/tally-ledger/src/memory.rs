//! # In-Memory State Store
//!
//! DashMap-backed [`StateStore`] implementation. Used by the test suites and
//! by embedders that want a self-contained ledger without an external store.
//!
//! Version checks and writes happen under the DashMap entry lock for the
//! key, so the `Expected` precondition is evaluated atomically with the
//! write it guards.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::store::{Expected, StateStore, StoreError, VersionedRecord};

/// Shared in-memory store.
///
/// Cheaply cloneable via `Arc`; all clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<DashMap<String, VersionedRecord>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held. Test convenience.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<VersionedRecord>, StoreError> {
        Ok(self.records.get(key).map(|r| r.value().clone()))
    }

    fn put(&self, key: &str, bytes: Vec<u8>, expected: Expected) -> Result<(), StoreError> {
        match self.records.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                let current = occupied.get().version;
                match expected {
                    Expected::Version(v) if v == current => {
                        occupied.insert(VersionedRecord {
                            bytes,
                            version: current + 1,
                        });
                        Ok(())
                    }
                    _ => Err(StoreError::Conflict {
                        key: key.to_string(),
                    }),
                }
            }
            Entry::Vacant(vacant) => match expected {
                Expected::Absent => {
                    vacant.insert(VersionedRecord { bytes, version: 1 });
                    Ok(())
                }
                Expected::Version(_) => Err(StoreError::Conflict {
                    key: key.to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nope").unwrap(), None);
    }

    #[test]
    fn test_create_then_get() {
        let store = MemoryStore::new();
        store.put("k", b"v1".to_vec(), Expected::Absent).unwrap();
        let rec = store.get("k").unwrap().unwrap();
        assert_eq!(rec.bytes, b"v1");
        assert_eq!(rec.version, 1);
    }

    #[test]
    fn test_create_over_existing_conflicts() {
        let store = MemoryStore::new();
        store.put("k", b"v1".to_vec(), Expected::Absent).unwrap();
        let err = store.put("k", b"v2".to_vec(), Expected::Absent).unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
        // First write preserved.
        assert_eq!(store.get("k").unwrap().unwrap().bytes, b"v1");
    }

    #[test]
    fn test_versioned_overwrite() {
        let store = MemoryStore::new();
        store.put("k", b"v1".to_vec(), Expected::Absent).unwrap();
        store.put("k", b"v2".to_vec(), Expected::Version(1)).unwrap();
        let rec = store.get("k").unwrap().unwrap();
        assert_eq!(rec.bytes, b"v2");
        assert_eq!(rec.version, 2);
    }

    #[test]
    fn test_stale_version_conflicts() {
        let store = MemoryStore::new();
        store.put("k", b"v1".to_vec(), Expected::Absent).unwrap();
        store.put("k", b"v2".to_vec(), Expected::Version(1)).unwrap();
        // A writer still holding version 1 loses.
        let err = store
            .put("k", b"v3".to_vec(), Expected::Version(1))
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
        assert_eq!(store.get("k").unwrap().unwrap().bytes, b"v2");
    }

    #[test]
    fn test_version_expectation_on_missing_key_conflicts() {
        let store = MemoryStore::new();
        let err = store
            .put("k", b"v".to_vec(), Expected::Version(1))
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
    }

    #[test]
    fn test_clones_share_data() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.put("k", b"v".to_vec(), Expected::Absent).unwrap();
        assert!(other.get("k").unwrap().is_some());
    }

    #[test]
    fn test_concurrent_cas_has_single_winner() {
        let store = MemoryStore::new();
        store.put("k", b"v1".to_vec(), Expected::Absent).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store.put("k", format!("w{i}").into_bytes(), Expected::Version(1))
                })
            })
            .collect();
        let wins = handles
            .into_iter()
            .map(|h| h.join().expect("writer thread panicked"))
            .filter(Result::is_ok)
            .count();

        // Exactly one writer may pass the version-1 expectation.
        assert_eq!(wins, 1);
        assert_eq!(store.get("k").unwrap().unwrap().version, 2);
    }
}
