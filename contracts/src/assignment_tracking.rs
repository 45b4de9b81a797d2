//! Assignment tracking.
//!
//! Deployable and owns its maps, but exposes no functions yet: every call is
//! reported as not implemented.

use skillchain_ledger::ContractDefinition;
use skillchain_types::ContractId;

pub const ASSIGNMENTS: &str = "assignments";
pub const ASSIGNMENT_HISTORY: &str = "assignment-history";
pub const ASSIGNMENT_SEQUENCE: &str = "assignment-sequence";

pub static DEFINITION: ContractDefinition = ContractDefinition {
    id: ContractId::AssignmentTracking,
    maps: &[ASSIGNMENTS, ASSIGNMENT_HISTORY, ASSIGNMENT_SEQUENCE],
    public: &[],
    read_only: &[],
};
