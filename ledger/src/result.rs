//! Call envelopes and in-band results.
//!
//! Results serialize to the shapes contract test suites assert on:
//! `{"success":true}`, `{"success":false,"error":3}` and `{"result":...}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use skillchain_types::Principal;

/// Reported when the target contract is unknown or not deployed.
pub const CONTRACT_NOT_FOUND: &str = "Contract not found";

/// Reported when the contract has no handler for the requested function.
pub const NOT_IMPLEMENTED: &str = "Function not implemented in mock";

/// A state-changing contract call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublicCall {
    pub contract: String,
    pub function: String,
    pub sender: Principal,
    #[serde(default)]
    pub args: Vec<Value>,
}

impl PublicCall {
    pub fn new(
        contract: impl Into<String>,
        function: impl Into<String>,
        sender: impl Into<Principal>,
        args: Vec<Value>,
    ) -> Self {
        Self {
            contract: contract.into(),
            function: function.into(),
            sender: sender.into(),
            args,
        }
    }
}

/// A side-effect-free contract call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReadOnlyCall {
    pub contract: String,
    pub function: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

impl ReadOnlyCall {
    pub fn new(contract: impl Into<String>, function: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            contract: contract.into(),
            function: function.into(),
            args,
        }
    }
}

/// Why a call failed: a contract error code, or a message for faults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallError {
    Code(u32),
    Message(String),
}

impl CallError {
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Code(code) => Some(*code),
            Self::Message(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Code(_) => None,
            Self::Message(msg) => Some(msg),
        }
    }
}

/// Outcome of a public call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CallError>,
}

impl PublicResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: CallError) -> Self {
        Self {
            success: false,
            error: Some(error),
        }
    }

    /// The contract error code, if the call was rejected with one.
    pub fn error_code(&self) -> Option<u32> {
        self.error.as_ref().and_then(CallError::code)
    }
}

/// Outcome of a read-only call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadOnlyResult {
    Value { result: Value },
    Failed { success: bool, error: CallError },
}

impl ReadOnlyResult {
    pub fn value(result: Value) -> Self {
        Self::Value { result }
    }

    pub fn failed(error: CallError) -> Self {
        Self::Failed {
            success: false,
            error,
        }
    }

    /// The returned value; `Some(&Value::Null)` means "no such record".
    pub fn result(&self) -> Option<&Value> {
        match self {
            Self::Value { result } => Some(result),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&CallError> {
        match self {
            Self::Value { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }
}
