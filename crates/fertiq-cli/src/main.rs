use std::fs;
use std::io::Write;
use std::path::Path;

use clap::Parser;
use fertiq_cdse::DecisionSupport;
use fertiq_core::models::observations::ClinicalObservations;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let engine = load_engine(cli.thresholds.as_deref())?;

    match cli.command {
        Commands::Summarize { input, output } => {
            let contents = fs::read_to_string(&input)
                .map_err(|e| eyre::eyre!("failed to read {}: {e}", input.display()))?;
            let observations = ClinicalObservations::from_json(&contents)?;
            let summary = engine.summarize(&observations);
            let json = summary.to_json_pretty()?;

            match output {
                Some(path) => {
                    fs::write(&path, json.as_bytes())?;
                    tracing::info!(path = %path.display(), "summary written");
                }
                None => writeln!(std::io::stdout(), "{json}")?,
            }
        }
        Commands::Thresholds => {
            let json = serde_json::to_string_pretty(engine.thresholds())?;
            writeln!(std::io::stdout(), "{json}")?;
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_engine(path: Option<&Path>) -> eyre::Result<DecisionSupport> {
    let Some(path) = path else {
        return Ok(DecisionSupport::default());
    };
    let contents = fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read thresholds at {}: {e}", path.display()))?;
    let engine = DecisionSupport::from_json(&contents)?;
    tracing::info!(path = %path.display(), "threshold overrides loaded");
    Ok(engine)
}
