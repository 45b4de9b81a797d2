//! Shared utilities for the SkillChain mock ledger.

pub mod logging;

pub use logging::{init_logging, LogFormat, UnknownLogFormat};
