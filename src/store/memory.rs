//! In-memory storage implementation

use super::error::StoreError;
use bytes::Bytes;
use parking_lot::RwLock;
use siphasher::sip::SipHasher13;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

/// Type alias for our hash map with SipHasher
type StoreMap = HashMap<Bytes, Bytes, BuildHasherDefault<SipHasher13>>;

/// Concurrency-safe key-value store keyed by client identification
///
/// A single reader/writer lock guards the whole map: lookups and the entry
/// count take it in shared mode, upserts and deletes take it exclusively.
/// Keys and values are opaque byte sequences; nothing is validated,
/// normalized, or expired.
pub struct AgentStore {
    /// The main storage map, behind the store's single lock
    map: RwLock<StoreMap>,
}

impl AgentStore {
    /// Create a new store with default capacity
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a new store with specified initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        AgentStore {
            map: RwLock::new(HashMap::with_capacity_and_hasher(
                capacity,
                BuildHasherDefault::<SipHasher13>::default(),
            )),
        }
    }

    /// Get the value stored for an identification
    ///
    /// Takes the lock in shared mode; any number of lookups may proceed
    /// concurrently. The returned `Bytes` is a cheap handle to the stored
    /// payload. A missing identification is the store's one error condition.
    pub fn get(&self, key: &Bytes) -> Result<Bytes, StoreError> {
        let map = self.map.read();

        map.get(key)
            .cloned()
            .ok_or_else(|| StoreError::not_found(key))
    }

    /// Store a value under an identification, replacing any prior value
    ///
    /// Takes the lock exclusively for the duration of the mutation. The
    /// overwrite is unconditional; there is no compare-and-swap and no merge.
    /// Returns the stored value. Always succeeds.
    pub fn upsert(&self, key: impl Into<Bytes>, value: impl Into<Bytes>) -> Bytes {
        let key = key.into();
        let value = value.into();

        let mut map = self.map.write();
        map.insert(key, value.clone());

        value
    }

    /// Remove the entry for an identification
    ///
    /// Takes the lock exclusively. A missing identification is reported as
    /// `NotFound` so callers can distinguish a miss from a removal; delete is
    /// deliberately not an idempotent no-op.
    pub fn delete(&self, key: &Bytes) -> Result<(), StoreError> {
        let mut map = self.map.write();

        match map.remove(key) {
            Some(_) => Ok(()),
            None => Err(StoreError::not_found(key)),
        }
    }

    /// Get the number of identifications currently stored
    ///
    /// Same concurrency class as `get`: shared lock.
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AgentStore {
    fn default() -> Self {
        Self::new()
    }
}
