#![allow(dead_code)]

use serde_json::Value;
use skillchain_contracts::mock_ledger;
use skillchain_ledger::{MockLedger, PublicCall, PublicResult, ReadOnlyCall, ReadOnlyResult};

pub const ADMIN: &str = "SP1ADMIN...";
pub const WORKER: &str = "SP2WORKER...";
pub const OTHER: &str = "SP3OTHER...";

pub const WORKER_VERIFICATION: &str = "worker-verification";
pub const SKILL_CERTIFICATION: &str = "skill-certification";

/// A fresh ledger with `contract` deployed by [`ADMIN`].
pub fn deployed(contract: &str) -> MockLedger {
    let mut ledger = mock_ledger().expect("contracts register");
    ledger.deploy(contract, ADMIN);
    ledger
}

pub fn call(
    ledger: &mut MockLedger,
    contract: &str,
    function: &str,
    sender: &str,
    args: Vec<Value>,
) -> PublicResult {
    ledger.call_public(&PublicCall::new(contract, function, sender, args))
}

pub fn read(ledger: &MockLedger, contract: &str, function: &str, args: Vec<Value>) -> ReadOnlyResult {
    ledger.call_read_only(&ReadOnlyCall::new(contract, function, args))
}
