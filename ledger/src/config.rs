//! Ledger configuration with TOML file support.

use serde::{Deserialize, Serialize};
use skillchain_types::BlockHeight;

use crate::LedgerError;

/// Configuration for a mock ledger.
///
/// Can be loaded from a TOML file via [`LedgerConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Block height the ledger starts at, and returns to on reset.
    #[serde(default = "default_initial_block_height")]
    pub initial_block_height: u64,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_initial_block_height() -> u64 {
    BlockHeight::GENESIS.as_u64()
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl LedgerConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, LedgerError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| LedgerError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, LedgerError> {
        toml::from_str(s).map_err(|e| LedgerError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, LedgerError> {
        toml::to_string_pretty(self).map_err(|e| LedgerError::Config(e.to_string()))
    }

    pub fn initial_height(&self) -> BlockHeight {
        BlockHeight::new(self.initial_block_height)
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            initial_block_height: default_initial_block_height(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
