//! Composite-key map storage trait.

use crate::StoreError;
use skillchain_types::CompositeKey;

/// A stored record: a JSON object of field name to value.
pub type Record = serde_json::Value;

/// Trait for named maps addressed by composite keys.
///
/// Maps are created by [`MapStore::init_map`] when a contract is deployed.
/// Every other operation on a map that was never initialised fails with
/// [`StoreError::UnknownMap`].
pub trait MapStore {
    fn get_entry(&self, map: &str, key: &CompositeKey) -> Result<Option<Record>, StoreError>;
    fn has_entry(&self, map: &str, key: &CompositeKey) -> Result<bool, StoreError>;
    /// Insert or overwrite the record stored under `key`.
    fn put_entry(&mut self, map: &str, key: &CompositeKey, record: Record) -> Result<(), StoreError>;
    /// Create `map`, or empty it if it already exists.
    fn init_map(&mut self, map: &str);
    fn has_map(&self, map: &str) -> bool;
    /// Drop every map.
    fn clear_maps(&mut self);
}
