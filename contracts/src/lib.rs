//! Contracts served by the SkillChain mock ledger.
//!
//! - **worker-verification**: workers register, attach documents, and are
//!   verified by the contract admin.
//! - **skill-certification**: the admin maintains a skill catalogue and
//!   certifies workers at a level from 1 to 5, optionally expiring.
//! - **assignment-tracking** and **performance-rating**: deployable, own their
//!   maps, but expose no functions yet.
//!
//! Every contract's admin starts out as its deployer and can only be changed
//! by the current admin through `transfer-admin`.

pub mod admin;
pub mod assignment_tracking;
pub mod error;
pub mod performance_rating;
pub mod skill_certification;
pub mod worker_verification;

pub use error::{SkillCertificationError, WorkerVerificationError};
pub use skill_certification::{Certification, Skill};
pub use worker_verification::{Document, Worker};

use skillchain_ledger::{ContractDefinition, ContractRegistry, LedgerConfig, LedgerError, MockLedger};

/// Every contract this crate provides.
pub static CONTRACTS: [&ContractDefinition; 4] = [
    &worker_verification::DEFINITION,
    &skill_certification::DEFINITION,
    &assignment_tracking::DEFINITION,
    &performance_rating::DEFINITION,
];

/// A registry with all contracts registered.
pub fn registry() -> Result<ContractRegistry, LedgerError> {
    let mut registry = ContractRegistry::new();
    for definition in CONTRACTS {
        registry.register(definition)?;
    }
    Ok(registry)
}

/// A mock ledger with all contracts registered and none deployed.
pub fn mock_ledger() -> Result<MockLedger, LedgerError> {
    mock_ledger_with_config(LedgerConfig::default())
}

pub fn mock_ledger_with_config(config: LedgerConfig) -> Result<MockLedger, LedgerError> {
    Ok(MockLedger::with_config(config, registry()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillchain_types::ContractId;

    #[test]
    fn every_contract_registers() {
        let registry = registry().unwrap();
        for id in ContractId::ALL {
            assert!(registry.definition(id).is_some(), "{id} missing");
        }
    }
}
