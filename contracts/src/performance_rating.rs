//! Performance ratings. No functions yet.

use skillchain_ledger::ContractDefinition;
use skillchain_types::ContractId;

pub const RATINGS: &str = "ratings";
pub const WORKER_AGGREGATE_RATINGS: &str = "worker-aggregate-ratings";

pub static DEFINITION: ContractDefinition = ContractDefinition {
    id: ContractId::PerformanceRating,
    maps: &[RATINGS, WORKER_AGGREGATE_RATINGS],
    public: &[],
    read_only: &[],
};
