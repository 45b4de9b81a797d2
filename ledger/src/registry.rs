//! Contract registry: the dispatch table.
//!
//! Each registered definition is validated once, up front. Dispatch afterwards
//! is a pair of table lookups keyed by contract id and function name.

use crate::{ContractDefinition, LedgerError, PublicHandler, ReadOnlyHandler};
use skillchain_types::ContractId;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(Default)]
pub struct ContractRegistry {
    definitions: BTreeMap<ContractId, &'static ContractDefinition>,
    public: HashMap<ContractId, HashMap<&'static str, PublicHandler>>,
    read_only: HashMap<ContractId, HashMap<&'static str, ReadOnlyHandler>>,
    map_owners: HashMap<&'static str, ContractId>,
}

impl ContractRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a contract definition.
    ///
    /// Fails without registering anything if the contract is already known,
    /// declares a function name twice for the same call kind, or declares a map
    /// owned by another contract.
    pub fn register(&mut self, definition: &'static ContractDefinition) -> Result<(), LedgerError> {
        let id = definition.id;
        if self.definitions.contains_key(&id) {
            return Err(LedgerError::DuplicateContract(id));
        }
        for map in definition.maps {
            if let Some(owner) = self.map_owners.get(map) {
                return Err(LedgerError::MapAlreadyOwned {
                    map: *map,
                    owner: *owner,
                });
            }
        }

        let public = build_table(id, definition.public)?;
        let read_only = build_table(id, definition.read_only)?;

        for map in definition.maps {
            self.map_owners.insert(*map, id);
        }
        self.public.insert(id, public);
        self.read_only.insert(id, read_only);
        self.definitions.insert(id, definition);
        Ok(())
    }

    /// Builder-style [`ContractRegistry::register`].
    pub fn with(mut self, definition: &'static ContractDefinition) -> Result<Self, LedgerError> {
        self.register(definition)?;
        Ok(self)
    }

    pub fn definition(&self, id: ContractId) -> Option<&'static ContractDefinition> {
        self.definitions.get(&id).copied()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &'static ContractDefinition> + '_ {
        self.definitions.values().copied()
    }

    pub fn public_handler(&self, id: ContractId, function: &str) -> Option<PublicHandler> {
        self.public.get(&id)?.get(function).copied()
    }

    pub fn read_only_handler(&self, id: ContractId, function: &str) -> Option<ReadOnlyHandler> {
        self.read_only.get(&id)?.get(function).copied()
    }
}

impl fmt::Debug for ContractRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.definitions.values()).finish()
    }
}

fn build_table<H: Copy>(
    contract: ContractId,
    entries: &'static [(&'static str, H)],
) -> Result<HashMap<&'static str, H>, LedgerError> {
    let mut table = HashMap::with_capacity(entries.len());
    for (function, handler) in entries {
        if table.insert(*function, *handler).is_some() {
            return Err(LedgerError::DuplicateFunction {
                contract,
                function: *function,
            });
        }
    }
    Ok(table)
}
