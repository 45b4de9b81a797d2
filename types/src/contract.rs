//! Contract identifiers.

use crate::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The contracts known to the mock ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractId {
    /// Worker identity and document verification.
    WorkerVerification,
    /// Skill catalogue and per-worker certifications.
    SkillCertification,
    /// Work assignment tracking (no functions yet).
    AssignmentTracking,
    /// Performance ratings (no functions yet).
    PerformanceRating,
}

impl ContractId {
    pub const ALL: [ContractId; 4] = [
        Self::WorkerVerification,
        Self::SkillCertification,
        Self::AssignmentTracking,
        Self::PerformanceRating,
    ];

    /// The on-ledger contract name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WorkerVerification => "worker-verification",
            Self::SkillCertification => "skill-certification",
            Self::AssignmentTracking => "assignment-tracking",
            Self::PerformanceRating => "performance-rating",
        }
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| TypeError::UnknownContract(s.to_string()))
    }
}
