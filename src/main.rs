//! dayroute - Command Line Interface
//!
//! Optimizes a day's stop order from a JSON request and prints the result.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dayroute::config::OptimizerConfig;
use dayroute::models::OptimizationResult;
use dayroute::optimizer::RouteOptimizer;
use dayroute::schedule::sequence_assignments;
use log::info;

#[derive(Parser)]
#[command(name = "dayroute")]
#[command(version)]
#[command(about = "Reorder a day's appointments to shorten the round trip from home")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimize the stop order of a request
    Optimize {
        /// Request JSON file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        request: PathBuf,

        /// Optimizer configuration JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pretty-print the result
        #[arg(long)]
        pretty: bool,
    },

    /// Turn an accepted result into 1-based sequence numbers
    Sequence {
        /// Result JSON file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        result: PathBuf,
    },
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Optimize {
            request,
            config,
            pretty,
        } => {
            let config = match config {
                Some(path) => OptimizerConfig::from_json(&read_input(&path)?)
                    .with_context(|| format!("invalid configuration in {}", path.display()))?,
                None => OptimizerConfig::default(),
            };
            let optimizer = RouteOptimizer::new(config)?;
            let result = optimizer.optimize_json(&read_input(&request)?)?;
            info!(
                "{} stops: {:.1} mi -> {:.1} mi, saves {} min",
                result.original_order.len(),
                result.original_miles,
                result.optimized_miles,
                result.savings_minutes
            );
            let out = if pretty {
                result.to_json_pretty()?
            } else {
                result.to_json()?
            };
            println!("{out}");
        }
        Commands::Sequence { result } => {
            let result: OptimizationResult = serde_json::from_str(&read_input(&result)?)
                .context("malformed optimization result")?;
            let assignments = sequence_assignments(&result.optimized_order);
            println!("{}", serde_json::to_string(&assignments)?);
        }
    }

    Ok(())
}
