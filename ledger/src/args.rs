//! Typed access to positional call arguments.
//!
//! Calls carry their arguments as a list of JSON values. Handlers pull typed
//! values out by position; a missing or mistyped argument is an internal fault
//! rather than a contract rejection.

use crate::ContractError;
use serde_json::{Number, Value};
use skillchain_types::{BlockHeight, Principal};

/// Positional arguments of a contract call.
#[derive(Clone, Copy, Debug)]
pub struct Args<'a> {
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub fn new(values: &'a [Value]) -> Self {
        Self { values }
    }

    fn required(&self, index: usize, name: &'static str) -> Result<&'a Value, ContractError> {
        self.values
            .get(index)
            .ok_or(ContractError::MissingArgument { index, name })
    }

    /// A string argument.
    pub fn text(&self, index: usize, name: &'static str) -> Result<&'a str, ContractError> {
        self.required(index, name)?
            .as_str()
            .ok_or(ContractError::InvalidArgument {
                index,
                name,
                expected: "string",
            })
    }

    pub fn principal(&self, index: usize, name: &'static str) -> Result<Principal, ContractError> {
        self.text(index, name).map(Principal::from)
    }

    /// A numeric argument of any magnitude or precision. Range checks are
    /// left to the contract.
    pub fn number(&self, index: usize, name: &'static str) -> Result<&'a Number, ContractError> {
        match self.required(index, name)? {
            Value::Number(n) => Ok(n),
            _ => Err(ContractError::InvalidArgument {
                index,
                name,
                expected: "number",
            }),
        }
    }

    /// An optional block height. Absent trailing arguments count as `null`.
    pub fn optional_height(
        &self,
        index: usize,
        name: &'static str,
    ) -> Result<Option<BlockHeight>, ContractError> {
        match self.values.get(index) {
            None | Some(Value::Null) => Ok(None),
            Some(v) => v
                .as_u64()
                .map(|h| Some(BlockHeight::new(h)))
                .ok_or(ContractError::InvalidArgument {
                    index,
                    name,
                    expected: "non-negative integer or null",
                }),
        }
    }

    /// An optional string. Absent trailing arguments count as `null`.
    pub fn optional_text(
        &self,
        index: usize,
        name: &'static str,
    ) -> Result<Option<String>, ContractError> {
        match self.values.get(index) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(ContractError::InvalidArgument {
                index,
                name,
                expected: "string or null",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_typed_values() {
        let values = vec![json!("worker123"), json!(4), json!(null)];
        let args = Args::new(&values);
        assert_eq!(args.text(0, "worker-id").unwrap(), "worker123");
        assert_eq!(args.number(1, "level").unwrap().as_u64(), Some(4));
        assert_eq!(args.optional_height(2, "expiration-date").unwrap(), None);
        assert_eq!(args.optional_text(3, "proof-hash").unwrap(), None);
    }

    #[test]
    fn missing_required_argument() {
        let values = vec![json!("only-one")];
        let args = Args::new(&values);
        assert!(matches!(
            args.text(1, "name"),
            Err(ContractError::MissingArgument { index: 1, name: "name" })
        ));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let values = vec![json!(12), json!("four"), json!(-3)];
        let args = Args::new(&values);
        assert!(matches!(args.text(0, "id"), Err(ContractError::InvalidArgument { .. })));
        assert!(matches!(args.number(1, "level"), Err(ContractError::InvalidArgument { .. })));
        assert!(matches!(
            args.optional_height(2, "expiration-date"),
            Err(ContractError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn numbers_keep_their_representation() {
        let values = vec![json!(-7), json!(u64::MAX), json!(7.5)];
        let args = Args::new(&values);
        assert_eq!(args.number(0, "level").unwrap().as_i64(), Some(-7));
        assert_eq!(args.number(1, "level").unwrap().as_u64(), Some(u64::MAX));
        assert_eq!(args.number(2, "level").unwrap().as_f64(), Some(7.5));
    }
}
