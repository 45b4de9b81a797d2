//! Mock ledger engine.
//!
//! Emulates the deterministic state transitions of a contract chain in
//! memory: named maps, per-contract admin variables and a block height that
//! only moves when the harness mines a block. Contract calls are routed
//! through a lookup table built when each contract definition is registered.
//!
//! There is no consensus, persistence or signature checking. Callers
//! self-report their principal.

pub mod args;
pub mod config;
pub mod context;
pub mod definition;
pub mod error;
pub mod ledger;
pub mod registry;
pub mod result;

pub use args::Args;
pub use config::LedgerConfig;
pub use context::{CallContext, ReadContext};
pub use definition::{ContractDefinition, PublicHandler, ReadOnlyHandler};
pub use error::{ContractError, LedgerError};
pub use ledger::{ContractSummary, Deployment, LedgerSummary, MockLedger};
pub use registry::ContractRegistry;
pub use result::{
    CallError, PublicCall, PublicResult, ReadOnlyCall, ReadOnlyResult, CONTRACT_NOT_FOUND,
    NOT_IMPLEMENTED,
};

pub use serde_json::Value;
pub use skillchain_store::Record;
