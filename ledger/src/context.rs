//! Execution contexts handed to contract handlers.
//!
//! A [`CallContext`] backs public calls and can write state. A [`ReadContext`]
//! backs read-only calls and only holds a shared reference to the store, so a
//! read-only handler cannot mutate anything.

use crate::ContractError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use skillchain_store::{StateStore, StoreError, VarKey};
use skillchain_types::{BlockHeight, CompositeKey, ContractId, Principal};

fn load<T: DeserializeOwned>(
    store: &dyn StateStore,
    map: &str,
    key: &CompositeKey,
) -> Result<Option<T>, ContractError> {
    match store.get_entry(map, key)? {
        Some(record) => serde_json::from_value(record)
            .map(Some)
            .map_err(|e| {
                ContractError::Storage(StoreError::Corrupt {
                    map: map.to_string(),
                    reason: e.to_string(),
                })
            }),
        None => Ok(None),
    }
}

/// Context for a state-changing call.
pub struct CallContext<'a> {
    store: &'a mut dyn StateStore,
    contract: ContractId,
    sender: &'a Principal,
    height: BlockHeight,
}

impl<'a> CallContext<'a> {
    pub fn new(
        store: &'a mut dyn StateStore,
        contract: ContractId,
        sender: &'a Principal,
        height: BlockHeight,
    ) -> Self {
        Self {
            store,
            contract,
            sender,
            height,
        }
    }

    pub fn contract(&self) -> ContractId {
        self.contract
    }

    /// The self-reported caller.
    pub fn sender(&self) -> &Principal {
        self.sender
    }

    pub fn block_height(&self) -> BlockHeight {
        self.height
    }

    pub fn get<T: DeserializeOwned>(
        &self,
        map: &str,
        key: &CompositeKey,
    ) -> Result<Option<T>, ContractError> {
        load(&*self.store, map, key)
    }

    pub fn contains(&self, map: &str, key: &CompositeKey) -> Result<bool, ContractError> {
        Ok(self.store.has_entry(map, key)?)
    }

    /// Insert or overwrite a record.
    pub fn put<T: Serialize>(
        &mut self,
        map: &str,
        key: &CompositeKey,
        value: &T,
    ) -> Result<(), ContractError> {
        let record = serde_json::to_value(value)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store.put_entry(map, key, record)?;
        Ok(())
    }

    pub fn admin(&self) -> Option<Principal> {
        self.store.get_var(&VarKey::admin(self.contract))
    }

    /// Whether the sender is the contract's current admin.
    pub fn sender_is_admin(&self) -> bool {
        self.admin().as_ref() == Some(self.sender)
    }

    pub fn set_admin(&mut self, admin: Principal) {
        self.store.set_var(&VarKey::admin(self.contract), admin);
    }
}

/// Context for a read-only call.
pub struct ReadContext<'a> {
    store: &'a dyn StateStore,
    height: BlockHeight,
}

impl<'a> ReadContext<'a> {
    pub fn new(store: &'a dyn StateStore, height: BlockHeight) -> Self {
        Self { store, height }
    }

    pub fn block_height(&self) -> BlockHeight {
        self.height
    }

    pub fn get<T: DeserializeOwned>(
        &self,
        map: &str,
        key: &CompositeKey,
    ) -> Result<Option<T>, ContractError> {
        load(self.store, map, key)
    }
}
