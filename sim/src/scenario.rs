//! Scenario scripts.
//!
//! A scenario is a JSON array of steps tagged by `"op"`. Each step produces one
//! JSON output. A step may carry an `expect` value which must equal its output.

use anyhow::Context;
use serde::Deserialize;
use serde_json::{json, Value};
use skillchain_ledger::{ContractDefinition, MockLedger, PublicCall, ReadOnlyCall};
use skillchain_types::{CompositeKey, Principal};

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Step {
    Deploy {
        contract: String,
        deployer: Principal,
        #[serde(default)]
        expect: Option<Value>,
    },
    Call {
        contract: String,
        function: String,
        sender: Principal,
        #[serde(default)]
        args: Vec<Value>,
        #[serde(default)]
        expect: Option<Value>,
    },
    Read {
        contract: String,
        function: String,
        #[serde(default)]
        args: Vec<Value>,
        #[serde(default)]
        expect: Option<Value>,
    },
    Mine {
        #[serde(default = "one_block")]
        blocks: u64,
        #[serde(default)]
        expect: Option<Value>,
    },
    Entry {
        map: String,
        key: CompositeKey,
        #[serde(default)]
        expect: Option<Value>,
    },
    Summary,
    Reset,
}

fn one_block() -> u64 {
    1
}

impl Step {
    fn expect(&self) -> Option<&Value> {
        match self {
            Self::Deploy { expect, .. }
            | Self::Call { expect, .. }
            | Self::Read { expect, .. }
            | Self::Mine { expect, .. }
            | Self::Entry { expect, .. } => expect.as_ref(),
            Self::Summary | Self::Reset => None,
        }
    }
}

/// Outputs of a scenario run.
#[derive(Debug, Default)]
pub struct Report {
    /// One compact JSON line per step.
    pub outputs: Vec<String>,
    /// Number of steps that carried an expectation.
    pub checked: usize,
    pub failures: Vec<String>,
}

pub fn parse(text: &str) -> anyhow::Result<Vec<Step>> {
    serde_json::from_str(text).context("parsing scenario")
}

pub fn run(ledger: &mut MockLedger, steps: &[Step]) -> anyhow::Result<Report> {
    let mut report = Report::default();
    for (index, step) in steps.iter().enumerate() {
        let output = execute(ledger, step).with_context(|| format!("step {index}"))?;
        if let Some(expected) = step.expect() {
            report.checked += 1;
            if expected != &output {
                report
                    .failures
                    .push(format!("step {index}: expected {expected}, got {output}"));
            }
        }
        report.outputs.push(output.to_string());
    }
    Ok(report)
}

fn execute(ledger: &mut MockLedger, step: &Step) -> anyhow::Result<Value> {
    let output = match step {
        Step::Deploy {
            contract, deployer, ..
        } => {
            let deployed = ledger.deploy(contract, deployer.clone());
            json!({ "deployed": deployed })
        }
        Step::Call {
            contract,
            function,
            sender,
            args,
            ..
        } => {
            let call = PublicCall::new(contract.as_str(), function.as_str(), sender.clone(), args.clone());
            serde_json::to_value(ledger.call_public(&call))?
        }
        Step::Read {
            contract,
            function,
            args,
            ..
        } => {
            let call = ReadOnlyCall::new(contract.as_str(), function.as_str(), args.clone());
            serde_json::to_value(ledger.call_read_only(&call))?
        }
        Step::Mine { blocks, .. } => {
            let height = ledger.mine_blocks(*blocks);
            json!({ "block-height": height })
        }
        Step::Entry { map, key, .. } => {
            let entry = ledger.get_map_entry(map, key)?;
            json!({ "entry": entry })
        }
        Step::Summary => serde_json::to_value(ledger.summary())?,
        Step::Reset => {
            ledger.reset();
            json!({ "block-height": ledger.block_height() })
        }
    };
    Ok(output)
}

/// One-line JSON description of a registered contract.
pub fn describe(definition: &ContractDefinition) -> Value {
    json!({
        "contract": definition.id,
        "maps": definition.maps,
        "public": definition.public_functions().collect::<Vec<_>>(),
        "read-only": definition.read_only_functions().collect::<Vec<_>>(),
    })
}
