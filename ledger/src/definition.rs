//! Static contract definitions.

use crate::{Args, CallContext, ContractError, ReadContext};
use serde_json::Value;
use skillchain_types::ContractId;
use std::fmt;

/// Handler for a state-changing call.
pub type PublicHandler = fn(&mut CallContext<'_>, &Args<'_>) -> Result<(), ContractError>;

/// Handler for a read-only call. `Value::Null` means "no such record".
pub type ReadOnlyHandler = fn(&ReadContext<'_>, &Args<'_>) -> Result<Value, ContractError>;

/// Everything the ledger needs to deploy and dispatch to a contract.
///
/// Map names share one namespace across all contracts, so two definitions may
/// not declare the same map.
pub struct ContractDefinition {
    pub id: ContractId,
    /// Maps created (or emptied) on deployment.
    pub maps: &'static [&'static str],
    pub public: &'static [(&'static str, PublicHandler)],
    pub read_only: &'static [(&'static str, ReadOnlyHandler)],
}

impl ContractDefinition {
    pub fn public_functions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.public.iter().map(|(name, _)| *name)
    }

    pub fn read_only_functions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.read_only.iter().map(|(name, _)| *name)
    }
}

impl fmt::Debug for ContractDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractDefinition")
            .field("id", &self.id)
            .field("maps", &self.maps)
            .field("public", &self.public_functions().collect::<Vec<_>>())
            .field("read_only", &self.read_only_functions().collect::<Vec<_>>())
            .finish()
    }
}
