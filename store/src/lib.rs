//! Abstract storage traits for the SkillChain mock ledger.
//!
//! Contract handlers depend only on these traits. The in-memory backend lives
//! in `skillchain-nullables`.
//!
//! Reads take `&self` and writes take `&mut self`, so a handler holding a
//! shared reference to a store cannot mutate ledger state.

pub mod error;
pub mod map;
pub mod var;

pub use error::StoreError;
pub use map::{MapStore, Record};
pub use var::{VarKey, VarStore};

/// A backend holding both contract maps and contract variables.
pub trait StateStore: MapStore + VarStore {}

impl<T: MapStore + VarStore> StateStore for T {}
