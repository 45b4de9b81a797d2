mod common;

use common::{call, read, ADMIN};
use serde_json::json;
use skillchain_contracts::assignment_tracking::{ASSIGNMENTS, ASSIGNMENT_HISTORY, ASSIGNMENT_SEQUENCE};
use skillchain_contracts::mock_ledger;
use skillchain_contracts::performance_rating::{RATINGS, WORKER_AGGREGATE_RATINGS};
use skillchain_ledger::{CallError, NOT_IMPLEMENTED};
use skillchain_types::{CompositeKey, ContractId, Principal};

#[test]
fn test_stub_contracts_deploy_their_maps() {
    let mut ledger = mock_ledger().unwrap();
    assert_eq!(ledger.deploy("assignment-tracking", ADMIN), Some(ContractId::AssignmentTracking));
    assert_eq!(ledger.deploy("performance-rating", ADMIN), Some(ContractId::PerformanceRating));

    let key = CompositeKey::new().field("assignment-id", 1i64);
    for map in [ASSIGNMENTS, ASSIGNMENT_HISTORY, ASSIGNMENT_SEQUENCE, RATINGS, WORKER_AGGREGATE_RATINGS] {
        assert_eq!(ledger.get_map_entry(map, &key).unwrap(), None, "{map}");
    }
    assert_eq!(
        ledger.admin_of(ContractId::PerformanceRating),
        Some(Principal::new(ADMIN))
    );
}

#[test]
fn test_every_stub_call_is_not_implemented() {
    let mut ledger = mock_ledger().unwrap();
    ledger.deploy("assignment-tracking", ADMIN);
    ledger.deploy("performance-rating", ADMIN);
    let not_implemented = Some(CallError::Message(NOT_IMPLEMENTED.to_string()));

    for contract in ["assignment-tracking", "performance-rating"] {
        let result = call(&mut ledger, contract, "transfer-admin", ADMIN, vec![json!("SP9")]);
        assert!(!result.success);
        assert_eq!(result.error, not_implemented);

        let result = read(&ledger, contract, "get-rating", vec![json!("worker123")]);
        assert_eq!(result.error().cloned(), not_implemented);
    }
}

#[test]
fn test_undeployed_map_is_an_error() {
    let ledger = mock_ledger().unwrap();
    let key = CompositeKey::new().field("worker-id", "w");
    assert!(ledger.get_map_entry("workers", &key).is_err());
}
