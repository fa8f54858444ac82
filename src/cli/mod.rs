use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod analyze;
mod config;
mod demo;
mod info;

/// cvPeak - Cyclic-Voltammetry Sweep Analyzer
#[derive(Parser)]
#[command(name = "cvpeak")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more measurement files
    Analyze {
        /// Input measurement files
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        /// Write the full analysis records as JSON to this path ("-" for stdout)
        #[arg(long, value_name = "OUT")]
        json: Option<PathBuf>,

        /// Load tunables from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Show preamble diagnostics for a measurement file
    Info {
        /// Input measurement file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Load tunables from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Generate a synthetic cyclic-voltammetry file for testing
    Demo {
        /// Output file path
        #[arg(value_name = "OUT", default_value = "demo_cv_scan.csv")]
        output: PathBuf,

        /// Number of full cycles to generate
        #[arg(short = 'n', long, default_value = "3")]
        cycles: u32,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            files,
            json,
            config,
        } => analyze::run(files, json, config),
        Commands::Info { file, config } => info::run(file, config),
        Commands::Demo { output, cycles } => demo::run(output, cycles),
    }
}
