//! Fundamental types for the SkillChain mock ledger.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! principals, block heights, composite map keys, and contract identifiers.

pub mod contract;
pub mod error;
pub mod height;
pub mod key;
pub mod principal;

pub use contract::ContractId;
pub use error::TypeError;
pub use height::BlockHeight;
pub use key::{CompositeKey, KeyValue};
pub use principal::Principal;
