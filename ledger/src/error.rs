use skillchain_store::StoreError;
use skillchain_types::{BlockHeight, ContractId};
use thiserror::Error;

/// Errors raised by the ledger harness itself.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("contract {0} is already registered")]
    DuplicateContract(ContractId),

    #[error("{contract} declares function {function} twice")]
    DuplicateFunction {
        contract: ContractId,
        function: &'static str,
    },

    #[error("map {map} is already owned by {owner}")]
    MapAlreadyOwned {
        map: &'static str,
        owner: ContractId,
    },

    #[error("block height cannot move backwards from {current} to {requested}")]
    ClockRegression {
        current: BlockHeight,
        requested: BlockHeight,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Errors raised by contract handlers.
///
/// `Code` is a contract-defined rejection and is reported to the caller as a
/// bare integer. Everything else is an internal fault and is reported as a
/// message.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("rejected with code {0}")]
    Code(u32),

    #[error("missing argument {index} ({name})")]
    MissingArgument { index: usize, name: &'static str },

    #[error("invalid argument {index} ({name}): expected {expected}")]
    InvalidArgument {
        index: usize,
        name: &'static str,
        expected: &'static str,
    },

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
