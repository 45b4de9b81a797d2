//! Nullable store: in-memory map and variable storage for the mock ledger.

use skillchain_store::{MapStore, Record, StoreError, VarKey, VarStore};
use skillchain_types::{CompositeKey, Principal};
use std::collections::HashMap;

/// An in-memory map + variable store.
///
/// Map slots are addressed by the canonical form of their composite key, so two
/// structurally equal keys always resolve to the same record.
#[derive(Debug, Default)]
pub struct NullStore {
    maps: HashMap<String, HashMap<String, Record>>,
    vars: HashMap<VarKey, Principal>,
}

impl NullStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in `map`, or `None` if the map does not exist.
    pub fn entry_count(&self, map: &str) -> Option<usize> {
        self.maps.get(map).map(HashMap::len)
    }

    fn map(&self, map: &str) -> Result<&HashMap<String, Record>, StoreError> {
        self.maps
            .get(map)
            .ok_or_else(|| StoreError::UnknownMap(map.to_string()))
    }
}

impl MapStore for NullStore {
    fn get_entry(&self, map: &str, key: &CompositeKey) -> Result<Option<Record>, StoreError> {
        Ok(self.map(map)?.get(&key.canonical()).cloned())
    }

    fn has_entry(&self, map: &str, key: &CompositeKey) -> Result<bool, StoreError> {
        Ok(self.map(map)?.contains_key(&key.canonical()))
    }

    fn put_entry(&mut self, map: &str, key: &CompositeKey, record: Record) -> Result<(), StoreError> {
        self.maps
            .get_mut(map)
            .ok_or_else(|| StoreError::UnknownMap(map.to_string()))?
            .insert(key.canonical(), record);
        Ok(())
    }

    fn init_map(&mut self, map: &str) {
        self.maps.insert(map.to_string(), HashMap::new());
    }

    fn has_map(&self, map: &str) -> bool {
        self.maps.contains_key(map)
    }

    fn clear_maps(&mut self) {
        self.maps.clear();
    }
}

impl VarStore for NullStore {
    fn get_var(&self, key: &VarKey) -> Option<Principal> {
        self.vars.get(key).cloned()
    }

    fn set_var(&mut self, key: &VarKey, value: Principal) {
        self.vars.insert(key.clone(), value);
    }

    fn clear_vars(&mut self) {
        self.vars.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use skillchain_types::ContractId;

    fn worker_key(id: &str) -> CompositeKey {
        CompositeKey::new().field("worker-id", id)
    }

    #[test]
    fn test_put_get_entry() {
        let mut store = NullStore::new();
        store.init_map("workers");
        store
            .put_entry("workers", &worker_key("w1"), json!({"name": "Ada"}))
            .unwrap();
        assert_eq!(
            store.get_entry("workers", &worker_key("w1")).unwrap(),
            Some(json!({"name": "Ada"}))
        );
        assert!(store.has_entry("workers", &worker_key("w1")).unwrap());
    }

    #[test]
    fn test_missing_entry_is_none() {
        let mut store = NullStore::new();
        store.init_map("workers");
        assert_eq!(store.get_entry("workers", &worker_key("nobody")).unwrap(), None);
        assert!(!store.has_entry("workers", &worker_key("nobody")).unwrap());
    }

    #[test]
    fn test_put_overwrites() {
        let mut store = NullStore::new();
        store.init_map("skills");
        let key = CompositeKey::new().field("skill-id", "s1");
        store.put_entry("skills", &key, json!({"v": 1})).unwrap();
        store.put_entry("skills", &key, json!({"v": 2})).unwrap();
        assert_eq!(store.get_entry("skills", &key).unwrap(), Some(json!({"v": 2})));
        assert_eq!(store.entry_count("skills"), Some(1));
    }

    #[test]
    fn test_structurally_equal_keys_share_slot() {
        let mut store = NullStore::new();
        store.init_map("worker-skills");
        let written = CompositeKey::new().field("worker-id", "w1").field("skill-id", "s1");
        store.put_entry("worker-skills", &written, json!(true)).unwrap();
        let rebuilt = CompositeKey::new()
            .field("worker-id", String::from("w1"))
            .field("skill-id", String::from("s1"));
        assert_eq!(store.get_entry("worker-skills", &rebuilt).unwrap(), Some(json!(true)));
    }

    #[test]
    fn test_unknown_map_is_an_error() {
        let mut store = NullStore::new();
        let key = worker_key("w1");
        assert_eq!(
            store.get_entry("workers", &key),
            Err(StoreError::UnknownMap("workers".into()))
        );
        assert!(store.put_entry("workers", &key, json!({})).is_err());
    }

    #[test]
    fn test_init_map_clears_existing_entries() {
        let mut store = NullStore::new();
        store.init_map("workers");
        store.put_entry("workers", &worker_key("w1"), json!({})).unwrap();
        store.init_map("workers");
        assert_eq!(store.entry_count("workers"), Some(0));
    }

    #[test]
    fn test_vars_set_get_clear() {
        let mut store = NullStore::new();
        let key = VarKey::admin(ContractId::WorkerVerification);
        assert_eq!(store.get_var(&key), None);
        store.set_var(&key, Principal::new("SP1ADMIN"));
        assert_eq!(store.get_var(&key), Some(Principal::new("SP1ADMIN")));
        store.clear_vars();
        assert_eq!(store.get_var(&key), None);
    }

    #[test]
    fn test_clear_maps_drops_everything() {
        let mut store = NullStore::new();
        store.init_map("workers");
        store.clear_maps();
        assert!(!store.has_map("workers"));
    }
}
