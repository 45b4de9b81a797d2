mod common;

use common::{call, deployed, read, ADMIN, SKILL_CERTIFICATION, WORKER, WORKER_VERIFICATION};
use proptest::prelude::*;
use serde_json::{json, Value};
use skillchain_contracts::skill_certification::{certification_key, skill_key, SKILLS, WORKER_SKILLS};
use skillchain_contracts::worker_verification::{worker_key, WORKERS};

fn id() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,12}"
}

proptest! {
    /// A second create-skill with the same id fails with 2 and changes nothing.
    #[test]
    fn duplicate_skill_never_overwrites(
        skill_id in id(),
        first in "[A-Za-z]{1,10}",
        second in "[A-Za-z]{1,10}",
        category in "[A-Za-z]{1,10}",
    ) {
        let mut ledger = deployed(SKILL_CERTIFICATION);
        let ok = call(&mut ledger, SKILL_CERTIFICATION, "create-skill", ADMIN,
            vec![json!(skill_id), json!(first), json!(category)]);
        prop_assert!(ok.success);
        let before = ledger.get_map_entry(SKILLS, &skill_key(&skill_id)).unwrap();

        ledger.mine_block();
        let again = call(&mut ledger, SKILL_CERTIFICATION, "create-skill", ADMIN,
            vec![json!(skill_id), json!(second), json!("Other")]);
        prop_assert_eq!(again.error_code(), Some(2));
        prop_assert_eq!(ledger.get_map_entry(SKILLS, &skill_key(&skill_id)).unwrap(), before);
    }

    /// Levels outside 1..=5 fail with 4 and leave no certification.
    #[test]
    fn out_of_range_levels_rejected(
        level in prop_oneof![i64::MIN..1i64, 6i64..i64::MAX],
        worker_id in id(),
    ) {
        let mut ledger = deployed(SKILL_CERTIFICATION);
        call(&mut ledger, SKILL_CERTIFICATION, "create-skill", ADMIN,
            vec![json!("s1"), json!("Rust"), json!("Programming")]);
        let result = call(&mut ledger, SKILL_CERTIFICATION, "certify-skill", ADMIN,
            vec![json!(worker_id), json!("s1"), json!(level), Value::Null, Value::Null]);
        prop_assert_eq!(result.error_code(), Some(4));
        prop_assert_eq!(
            ledger.get_map_entry(WORKER_SKILLS, &certification_key(&worker_id, "s1")).unwrap(),
            None
        );
    }

    /// Levels inside 1..=5 are stored as given.
    #[test]
    fn in_range_levels_accepted(level in 1i64..=5) {
        let mut ledger = deployed(SKILL_CERTIFICATION);
        call(&mut ledger, SKILL_CERTIFICATION, "create-skill", ADMIN,
            vec![json!("s1"), json!("Rust"), json!("Programming")]);
        let result = call(&mut ledger, SKILL_CERTIFICATION, "certify-skill", ADMIN,
            vec![json!("w1"), json!("s1"), json!(level)]);
        prop_assert!(result.success);
        let cert = ledger.get_map_entry(WORKER_SKILLS, &certification_key("w1", "s1")).unwrap().unwrap();
        prop_assert_eq!(&cert["level"], &json!(level));
    }

    /// is-skill-valid is true iff height < expiration.
    #[test]
    fn validity_follows_strict_expiry(expiration in 0u64..40, mined in 0u64..40) {
        let mut ledger = deployed(SKILL_CERTIFICATION);
        call(&mut ledger, SKILL_CERTIFICATION, "create-skill", ADMIN,
            vec![json!("s1"), json!("Rust"), json!("Programming")]);
        call(&mut ledger, SKILL_CERTIFICATION, "certify-skill", ADMIN,
            vec![json!("w1"), json!("s1"), json!(3), json!(expiration), Value::Null]);
        let height = ledger.mine_blocks(mined);

        let valid = read(&ledger, SKILL_CERTIFICATION, "is-skill-valid", vec![json!("w1"), json!("s1")]);
        prop_assert_eq!(valid.result(), Some(&json!(height.as_u64() < expiration)));
    }

    /// register-worker succeeds any number of times until the worker is verified.
    #[test]
    fn registration_idempotent_until_verified(worker_id in id(), repeats in 1usize..5) {
        let mut ledger = deployed(WORKER_VERIFICATION);
        for _ in 0..repeats {
            let result = call(&mut ledger, WORKER_VERIFICATION, "register-worker", WORKER,
                vec![json!(worker_id), json!("Name")]);
            prop_assert!(result.success);
        }
        call(&mut ledger, WORKER_VERIFICATION, "verify-worker", ADMIN, vec![json!(worker_id)]);
        let result = call(&mut ledger, WORKER_VERIFICATION, "register-worker", WORKER,
            vec![json!(worker_id), json!("Name")]);
        prop_assert_eq!(result.error_code(), Some(1));
        let worker = ledger.get_map_entry(WORKERS, &worker_key(&worker_id)).unwrap().unwrap();
        prop_assert_eq!(&worker["verified"], &json!(true));
    }
}
