use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fertiq")]
#[command(about = "Fertility clinic decision support", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON threshold overrides; omitted keys keep their WHO 2021 value
    #[arg(long, global = true, env = "FERTIQ_THRESHOLDS")]
    pub thresholds: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a diagnostic summary from an observation snapshot
    Summarize {
        /// Observation snapshot (JSON)
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the active threshold table
    Thresholds,
}
