//! Command-line interface for the courier route optimizer.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod solve;

pub use error::CliError;

const ARG_SOLVE_REQUEST: &str = "request";
const ARG_SOLVE_AVERAGE_SPEED: &str = "average-speed-kmph";
const ARG_SOLVE_ENFORCE_PICKUP: &str = "enforce-pickup-before-dropoff";
const ENV_SOLVE_REQUEST: &str = "COURIER_CMDS_SOLVE_REQUEST_PATH";

/// Run the courier CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration merging,
/// request loading, the search, or writing the response fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => solve::run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Find the fastest pickup and dropoff order for two deliveries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Choose the fastest ordering for a JSON-encoded delivery request.
    Solve(solve::SolveArgs),
}

#[cfg(test)]
mod tests;
