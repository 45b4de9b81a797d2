//! Nullable clock: deterministic block height for testing.

use skillchain_types::BlockHeight;
use std::cell::Cell;

/// A deterministic block-height clock.
///
/// Height only advances when you tell it to.
pub struct NullClock {
    initial: BlockHeight,
    current: Cell<BlockHeight>,
}

impl NullClock {
    pub fn new(initial: BlockHeight) -> Self {
        Self {
            initial,
            current: Cell::new(initial),
        }
    }

    /// Get the current height.
    pub fn now(&self) -> BlockHeight {
        self.current.get()
    }

    /// Advance the height by a number of blocks.
    pub fn advance(&self, blocks: u64) {
        self.current.set(self.current.get().advanced_by(blocks));
    }

    /// Set the height to a specific value.
    pub fn set(&self, height: BlockHeight) {
        self.current.set(height);
    }

    /// Return to the initial height.
    pub fn reset(&self) {
        self.current.set(self.initial);
    }
}

impl Default for NullClock {
    fn default() -> Self {
        Self::new(BlockHeight::GENESIS)
    }
}
