//! SkillChain scenario runner: drives the mock ledger from a JSON script.

mod scenario;

use anyhow::{bail, Context};
use clap::Parser;
use skillchain_ledger::LedgerConfig;
use skillchain_utils::{init_logging, LogFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillchain-sim", about = "Run contract scenarios against the mock ledger")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "SKILLCHAIN_CONFIG")]
    config: Option<PathBuf>,

    /// Block height the ledger starts at (and returns to on reset).
    #[arg(long, env = "SKILLCHAIN_INITIAL_HEIGHT")]
    initial_height: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "SKILLCHAIN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "SKILLCHAIN_LOG_FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Execute a scenario file and print one JSON result per step.
    Run {
        /// Path to the scenario (a JSON array of steps).
        scenario: PathBuf,
    },
    /// List the registered contracts with their maps and functions.
    Contracts,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => LedgerConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LedgerConfig::default(),
    };
    if let Some(height) = cli.initial_height {
        config.initial_block_height = height;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    let format: LogFormat = config.log_format.parse()?;
    init_logging(format, &config.log_level);

    match cli.command {
        Command::Run { scenario } => {
            let text = std::fs::read_to_string(&scenario)
                .with_context(|| format!("reading scenario {}", scenario.display()))?;
            let steps = scenario::parse(&text)?;
            let mut ledger = skillchain_contracts::mock_ledger_with_config(config)?;
            let report = scenario::run(&mut ledger, &steps)?;
            for line in &report.outputs {
                println!("{line}");
            }
            if !report.failures.is_empty() {
                for failure in &report.failures {
                    eprintln!("{failure}");
                }
                bail!(
                    "{} of {} expectations failed",
                    report.failures.len(),
                    report.checked
                );
            }
            tracing::info!(steps = steps.len(), checked = report.checked, "scenario passed");
        }
        Command::Contracts => {
            let registry = skillchain_contracts::registry()?;
            for definition in registry.definitions() {
                println!("{}", scenario::describe(definition));
            }
        }
    }
    Ok(())
}
