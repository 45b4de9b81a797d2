//! Contract rejection codes.
//!
//! Codes are scoped per contract and are part of the observable interface:
//! callers see the bare integer.

use skillchain_ledger::ContractError;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum WorkerVerificationError {
    #[error("worker is already verified")]
    AlreadyVerified,

    #[error("worker not found")]
    WorkerNotFound,

    #[error("caller is not the worker's registered principal")]
    NotWorkerOwner,

    #[error("document not found")]
    DocumentNotFound,

    #[error("caller is not the contract admin")]
    NotAdmin,
}

impl WorkerVerificationError {
    pub fn code(&self) -> u32 {
        match self {
            Self::AlreadyVerified => 1,
            Self::WorkerNotFound => 2,
            Self::NotWorkerOwner => 3,
            Self::DocumentNotFound => 4,
            Self::NotAdmin => 5,
        }
    }
}

impl From<WorkerVerificationError> for ContractError {
    fn from(err: WorkerVerificationError) -> Self {
        ContractError::Code(err.code())
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SkillCertificationError {
    #[error("caller is not the contract admin")]
    NotAdmin,

    #[error("skill already exists")]
    SkillExists,

    #[error("skill not found")]
    SkillNotFound,

    #[error("certification level must be between 1 and 5")]
    InvalidLevel,

    #[error("only the admin can transfer admin rights")]
    NotAdminForTransfer,
}

impl SkillCertificationError {
    pub fn code(&self) -> u32 {
        match self {
            Self::NotAdmin => 1,
            Self::SkillExists => 2,
            Self::SkillNotFound => 3,
            Self::InvalidLevel => 4,
            Self::NotAdminForTransfer => 5,
        }
    }
}

impl From<SkillCertificationError> for ContractError {
    fn from(err: SkillCertificationError) -> Self {
        ContractError::Code(err.code())
    }
}
