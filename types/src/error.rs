//! Errors raised while parsing core types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown contract: {0}")]
    UnknownContract(String),
}
