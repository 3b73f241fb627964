use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::ComponentKind;

/// Bottleneck Solver - find out whether your CPU and GPU are a good match
#[derive(Parser)]
#[command(name = "bottleneck-solver")]
#[command(about = "Estimate whether the CPU or GPU limits gaming performance at a resolution")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to a JSON catalog replacing the built-in component list
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive terminal interface
    Tui,
    /// Calculate the bottleneck for one pairing
    Calculate {
        /// Processor id (see `list processors`)
        #[arg(long)]
        cpu: String,
        /// Graphics card id (see `list graphics`)
        #[arg(long)]
        gpu: String,
        /// Resolution id (see `list resolutions`)
        #[arg(short, long, default_value = "1080p")]
        resolution: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Also request an AI explanation (needs an API key)
        #[arg(short, long)]
        explain: bool,
    },
    /// List catalog entries
    List {
        /// Collection to list (processors, graphics, resolutions); all when omitted
        kind: Option<ComponentKind>,
    },
    /// Write the active catalog to a JSON file
    ExportCatalog {
        /// Destination file
        output: PathBuf,
    },
    /// Write the active settings to a JSON file usable with --config
    ExportConfig {
        /// Destination file
        output: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
