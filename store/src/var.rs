//! Scalar variable storage trait.

use skillchain_types::{ContractId, Principal};
use std::fmt;

/// A contract-namespaced variable name, rendered as `<contract>.<name>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VarKey {
    pub contract: ContractId,
    pub name: &'static str,
}

impl VarKey {
    pub const ADMIN: &'static str = "admin";

    pub fn new(contract: ContractId, name: &'static str) -> Self {
        Self { contract, name }
    }

    /// The admin variable of `contract`.
    pub fn admin(contract: ContractId) -> Self {
        Self::new(contract, Self::ADMIN)
    }
}

impl fmt::Display for VarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.contract, self.name)
    }
}

/// Trait for per-contract scalar variables.
///
/// The only variable type in use is a principal (the contract admin).
pub trait VarStore {
    fn get_var(&self, key: &VarKey) -> Option<Principal>;
    fn set_var(&mut self, key: &VarKey, value: Principal);
    fn clear_vars(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_key_is_namespaced() {
        let key = VarKey::admin(ContractId::SkillCertification);
        assert_eq!(key.to_string(), "skill-certification.admin");
    }
}
