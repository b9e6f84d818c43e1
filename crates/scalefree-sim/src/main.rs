//! Command-line driver for the scale-free graph generators.
//!
//! Every subcommand prints a JSON summary to stdout; diagnostics go to
//! stderr through `tracing`.

use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{
    ensemble::{self, EnsembleArgs},
    grow::{self, GrowArgs},
    rewire::{self, RewireArgs},
    version::{self, VersionArgs},
};
use tracing::error;

mod commands;
mod logging;
mod summary;

#[derive(Parser, Debug)]
#[command(name = "scalefree-sim", about = "Scale-free graph generator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Grow a graph by preferential attachment.
    Grow(GrowArgs),
    /// Build a graph by power-law rewiring of a uniform random graph.
    Rewire(RewireArgs),
    /// Run independent replicas of one generator with derived seeds.
    Ensemble(EnsembleArgs),
    /// Print the CLI version.
    Version(VersionArgs),
}

fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Grow(args) => grow::run(&args),
        Command::Rewire(args) => rewire::run(&args),
        Command::Ensemble(args) => ensemble::run(&args),
        Command::Version(args) => version::run(&args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }
    if let Err(err) = dispatch(cli) {
        error!(error = %err, "command execution failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
