//! # Counterfight Peer
//!
//! `cf-peer run <script.json>` replays invocations against a fresh
//! in-memory ledger and prints every response.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use cf_01_ledger_substrate::InMemoryLedger;
use cf_02_custody_chaincode::CustodyChaincode;
use cf_peer::{load_script, InvocationOutcome, OutputFormat, PeerConfig, PeerRuntime};

/// Counterfight peer: hosts the custody chaincode
#[derive(Parser, Debug)]
#[command(name = "cf-peer")]
#[command(about = "Chain-of-custody chaincode host on an in-memory ledger")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log filter (overrides CF_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit JSON log lines (overrides CF_JSON_LOGS)
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an invocation script
    Run {
        /// JSON array of {creator, function, args}
        script: PathBuf,

        /// Package limit per carton (overrides CF_MAX_PACKAGES)
        #[arg(long)]
        max_packages: Option<u32>,

        /// Response output format (overrides CF_OUTPUT)
        #[arg(long, value_enum)]
        output: Option<OutputFormat>,

        /// Print Prometheus metrics after the replay
        #[arg(long)]
        metrics: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = PeerConfig::from_env();
    if let Some(level) = cli.log_level {
        config.telemetry.log_level = level;
    }
    if cli.json_logs {
        config.telemetry.json_logs = true;
    }

    match cli.command {
        Command::Run {
            script,
            max_packages,
            output,
            metrics,
        } => {
            if let Some(max) = max_packages {
                config.chaincode.max_packages_per_carton = max;
            }
            if let Some(output) = output {
                config.output = output;
            }
            run(config, &script, metrics)
        }
    }
}

fn run(config: PeerConfig, script: &Path, print_metrics: bool) -> Result<()> {
    config.validate().context("invalid configuration")?;
    cf_telemetry::init_telemetry(&config.telemetry).context("failed to initialize telemetry")?;

    let invocations = load_script(script)?;
    info!(script = %script.display(), invocations = invocations.len(), "replaying script");

    let chaincode = CustodyChaincode::new(config.chaincode.clone())?;
    let runtime = PeerRuntime::new(InMemoryLedger::new(), chaincode);

    for outcome in runtime.run(&invocations) {
        println!("{}", render(&outcome, config.output)?);
    }

    if print_metrics {
        print!("{}", cf_telemetry::encode_metrics()?);
    }
    Ok(())
}

fn render(outcome: &InvocationOutcome, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(outcome)?,
        OutputFormat::Compact => serde_json::to_string(outcome)?,
    };
    Ok(text)
}
