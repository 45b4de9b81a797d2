//! Nullable infrastructure for deterministic contract testing.
//!
//! The mock ledger never touches the filesystem, the network or the wall
//! clock. This crate provides the in-memory implementations it runs on:
//! - a logical block-height clock that only moves when told to,
//! - a map + variable store held entirely in memory.

pub mod clock;
pub mod store;

pub use clock::NullClock;
pub use store::NullStore;
