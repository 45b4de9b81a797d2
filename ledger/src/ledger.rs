//! The mock ledger harness.
//!
//! Owns the in-memory store, the logical clock, the contract registry and the
//! record of which contracts are deployed. Every call runs to completion
//! (including its state change) before the next one starts.

use crate::{
    Args, CallContext, CallError, ContractError, ContractRegistry, LedgerConfig, LedgerError,
    PublicCall, PublicResult, ReadContext, ReadOnlyCall, ReadOnlyResult, Record,
    CONTRACT_NOT_FOUND, NOT_IMPLEMENTED,
};
use serde::Serialize;
use skillchain_nullables::{NullClock, NullStore};
use skillchain_store::{MapStore, VarKey, VarStore};
use skillchain_types::{BlockHeight, CompositeKey, ContractId, Principal};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// A deployed contract instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Deployment {
    pub deployer: Principal,
    pub deployed_at: BlockHeight,
}

/// Per-contract state summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContractSummary {
    pub contract: ContractId,
    pub deployer: Principal,
    pub admin: Option<Principal>,
    /// Record count per owned map.
    pub entries: BTreeMap<&'static str, usize>,
}

/// Summary statistics for the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub block_height: BlockHeight,
    pub contracts: Vec<ContractSummary>,
}

pub struct MockLedger {
    config: LedgerConfig,
    registry: ContractRegistry,
    store: NullStore,
    clock: NullClock,
    deployments: BTreeMap<ContractId, Deployment>,
}

impl MockLedger {
    /// A ledger with default configuration.
    pub fn new(registry: ContractRegistry) -> Self {
        Self::with_config(LedgerConfig::default(), registry)
    }

    pub fn with_config(config: LedgerConfig, registry: ContractRegistry) -> Self {
        let clock = NullClock::new(config.initial_height());
        Self {
            config,
            registry,
            store: NullStore::new(),
            clock,
            deployments: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn registry(&self) -> &ContractRegistry {
        &self.registry
    }

    // ── Lifecycle ──────────────────────────────────────────────────────

    /// Deploy (or redeploy) a contract.
    ///
    /// Creates the contract's maps, emptying them on redeploy, and makes the
    /// deployer the contract admin. Unknown contract names are ignored and
    /// `None` is returned.
    pub fn deploy(&mut self, contract: &str, deployer: impl Into<Principal>) -> Option<ContractId> {
        let Some(definition) = contract
            .parse::<ContractId>()
            .ok()
            .and_then(|id| self.registry.definition(id))
        else {
            warn!(contract, "ignoring deployment of unknown contract");
            return None;
        };

        let deployer = deployer.into();
        for map in definition.maps {
            self.store.init_map(map);
        }
        self.store
            .set_var(&VarKey::admin(definition.id), deployer.clone());
        info!(
            contract = %definition.id,
            deployer = %deployer,
            height = %self.clock.now(),
            "contract deployed"
        );
        self.deployments.insert(
            definition.id,
            Deployment {
                deployer,
                deployed_at: self.clock.now(),
            },
        );
        Some(definition.id)
    }

    /// Clear all maps, variables and deployments and rewind the clock.
    pub fn reset(&mut self) {
        self.store.clear_maps();
        self.store.clear_vars();
        self.deployments.clear();
        self.clock.reset();
        info!(height = %self.clock.now(), "ledger reset");
    }

    // ── Clock ──────────────────────────────────────────────────────────

    pub fn block_height(&self) -> BlockHeight {
        self.clock.now()
    }

    /// Advance the clock by one block and return the new height.
    pub fn mine_block(&mut self) -> BlockHeight {
        self.mine_blocks(1)
    }

    pub fn mine_blocks(&mut self, blocks: u64) -> BlockHeight {
        self.clock.advance(blocks);
        debug!(blocks, height = %self.clock.now(), "mined blocks");
        self.clock.now()
    }

    /// Jump the clock forward to `height`. The clock never moves backwards.
    pub fn set_block_height(&mut self, height: BlockHeight) -> Result<(), LedgerError> {
        let current = self.clock.now();
        if height < current {
            return Err(LedgerError::ClockRegression {
                current,
                requested: height,
            });
        }
        self.clock.set(height);
        Ok(())
    }

    // ── Calls ──────────────────────────────────────────────────────────

    /// Execute a state-changing call.
    pub fn call_public(&mut self, call: &PublicCall) -> PublicResult {
        match self.dispatch_public(call) {
            Ok(()) => PublicResult::ok(),
            Err(err) => PublicResult::failed(err),
        }
    }

    /// Execute a side-effect-free call.
    ///
    /// A function the contract does not expose fails with
    /// [`NOT_IMPLEMENTED`] instead of returning `{result: null}`, so `null`
    /// only ever means "no such record".
    pub fn call_read_only(&self, call: &ReadOnlyCall) -> ReadOnlyResult {
        match self.dispatch_read_only(call) {
            Ok(value) => ReadOnlyResult::value(value),
            Err(err) => ReadOnlyResult::failed(err),
        }
    }

    fn dispatch_public(&mut self, call: &PublicCall) -> Result<(), CallError> {
        let id = self.resolve(&call.contract)?;
        let handler = self
            .registry
            .public_handler(id, &call.function)
            .ok_or_else(|| not_implemented(id, &call.function))?;

        debug!(
            contract = %id,
            function = %call.function,
            sender = %call.sender,
            "public call"
        );
        let height = self.clock.now();
        let mut ctx = CallContext::new(&mut self.store, id, &call.sender, height);
        handler(&mut ctx, &Args::new(&call.args)).map_err(|e| to_call_error(id, &call.function, e))
    }

    fn dispatch_read_only(&self, call: &ReadOnlyCall) -> Result<serde_json::Value, CallError> {
        let id = self.resolve(&call.contract)?;
        let handler = self
            .registry
            .read_only_handler(id, &call.function)
            .ok_or_else(|| not_implemented(id, &call.function))?;

        debug!(contract = %id, function = %call.function, "read-only call");
        let ctx = ReadContext::new(&self.store, self.clock.now());
        handler(&ctx, &Args::new(&call.args)).map_err(|e| to_call_error(id, &call.function, e))
    }

    fn resolve(&self, contract: &str) -> Result<ContractId, CallError> {
        contract
            .parse::<ContractId>()
            .ok()
            .filter(|id| self.deployments.contains_key(id))
            .ok_or_else(|| {
                debug!(contract, "call to unknown contract");
                CallError::Message(CONTRACT_NOT_FOUND.to_string())
            })
    }

    // ── Inspection ─────────────────────────────────────────────────────

    /// Read a stored record directly, bypassing contract accessors.
    pub fn get_map_entry(&self, map: &str, key: &CompositeKey) -> Result<Option<Record>, LedgerError> {
        Ok(self.store.get_entry(map, key)?)
    }

    pub fn is_deployed(&self, contract: ContractId) -> bool {
        self.deployments.contains_key(&contract)
    }

    pub fn deployer_of(&self, contract: ContractId) -> Option<&Principal> {
        self.deployments.get(&contract).map(|d| &d.deployer)
    }

    pub fn admin_of(&self, contract: ContractId) -> Option<Principal> {
        self.store.get_var(&VarKey::admin(contract))
    }

    pub fn summary(&self) -> LedgerSummary {
        let contracts = self
            .deployments
            .iter()
            .map(|(id, deployment)| {
                let entries = self
                    .registry
                    .definition(*id)
                    .map(|def| {
                        def.maps
                            .iter()
                            .map(|map| (*map, self.store.entry_count(map).unwrap_or(0)))
                            .collect()
                    })
                    .unwrap_or_default();
                ContractSummary {
                    contract: *id,
                    deployer: deployment.deployer.clone(),
                    admin: self.admin_of(*id),
                    entries,
                }
            })
            .collect();
        LedgerSummary {
            block_height: self.clock.now(),
            contracts,
        }
    }
}

fn not_implemented(contract: ContractId, function: &str) -> CallError {
    debug!(%contract, function, "no handler registered");
    CallError::Message(NOT_IMPLEMENTED.to_string())
}

fn to_call_error(contract: ContractId, function: &str, err: ContractError) -> CallError {
    match err {
        ContractError::Code(code) => {
            debug!(%contract, function, code, "call rejected");
            CallError::Code(code)
        }
        fault => {
            warn!(%contract, function, error = %fault, "call failed with internal fault");
            CallError::Message(fault.to_string())
        }
    }
}
