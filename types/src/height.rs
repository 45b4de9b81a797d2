//! Block height, the ledger's logical clock.
//!
//! Heights only move forward when the harness mines blocks. Handlers read the
//! current height to timestamp records and to evaluate expirations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A block height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockHeight(u64);

impl BlockHeight {
    /// Height zero, used as the "never" marker for unset dates.
    pub const ZERO: Self = Self(0);

    /// The height a freshly reset ledger starts at.
    pub const GENESIS: Self = Self(1);

    pub fn new(height: u64) -> Self {
        Self(height)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The height `blocks` blocks after this one.
    pub fn advanced_by(&self, blocks: u64) -> Self {
        Self(self.0.saturating_add(blocks))
    }

    /// Whether something expiring at `expiration` is still live at this height.
    ///
    /// Expiry is exclusive: at `self == expiration` the item is already expired.
    pub fn is_before(&self, expiration: BlockHeight) -> bool {
        self.0 < expiration.0
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for BlockHeight {
    fn from(height: u64) -> Self {
        Self(height)
    }
}
