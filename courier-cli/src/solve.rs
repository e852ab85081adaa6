//! Solve command implementation for the courier CLI.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use courier_core::{AverageSpeed, DeliveryRequest, SearchResult, Solver};
use courier_solver::{RouteOptimizer, RouteOptimizerConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::{
    ARG_SOLVE_AVERAGE_SPEED, ARG_SOLVE_ENFORCE_PICKUP, ARG_SOLVE_REQUEST, CliError,
    ENV_SOLVE_REQUEST,
};

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Find the fastest order in which to visit two restaurants \
                 and their two customers. The request is a JSON-encoded \
                 DeliveryRequest; the result is printed as JSON.",
    about = "Solve a two-order delivery request"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file containing a DeliveryRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Constant courier speed in km/h (default 20).
    #[arg(long = ARG_SOLVE_AVERAGE_SPEED, value_name = "kmph")]
    #[serde(default)]
    pub(crate) average_speed_kmph: Option<f64>,
    /// Only consider orderings that reach each restaurant before its customer.
    #[arg(long = ARG_SOLVE_ENFORCE_PICKUP, value_name = "bool")]
    #[serde(default)]
    pub(crate) enforce_pickup_before_dropoff: Option<bool>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Optimizer settings after defaults are applied.
    pub(crate) optimizer: RouteOptimizerConfig,
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SOLVE_REQUEST,
            env: ENV_SOLVE_REQUEST,
        })?;
        let speed = AverageSpeed::new(
            args.average_speed_kmph
                .unwrap_or(AverageSpeed::DEFAULT_KMPH),
        )
        .map_err(CliError::InvalidConfiguration)?;
        Ok(Self {
            request_path,
            optimizer: RouteOptimizerConfig {
                average_speed_kmph: speed.kmph(),
                enforce_pickup_before_dropoff: args
                    .enforce_pickup_before_dropoff
                    .unwrap_or_default(),
            },
        })
    }
}

/// Builds a solver instance for the current solve invocation.
pub(super) trait SolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError>;
}

pub(super) struct DefaultSolverBuilder;

impl SolverBuilder for DefaultSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
        let optimizer =
            RouteOptimizer::new(config.optimizer).map_err(CliError::InvalidConfiguration)?;
        Ok(Box::new(optimizer))
    }
}

pub(super) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_solve_with(args, &DefaultSolverBuilder, &mut stdout)
}

pub(super) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let result = execute_solve(&config, builder)?;
    write_search_result(writer, &result)
}

pub(super) fn execute_solve(
    config: &SolveConfig,
    builder: &dyn SolverBuilder,
) -> Result<SearchResult, CliError> {
    let request = load_request(&config.request_path)?;
    let solver = builder.build(config)?;
    log::debug!("solving delivery request from {}", config.request_path);
    solver
        .solve(&request)
        .map_err(|source| CliError::Solve { source })
}

/// Loads a JSON-encoded [`DeliveryRequest`] from disk.
///
/// Coordinates are validated while decoding, so an out-of-range latitude
/// or longitude surfaces as [`CliError::ParseRequest`].
pub(super) fn load_request(path: &Utf8Path) -> Result<DeliveryRequest, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenRequest {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn write_search_result(
    writer: &mut dyn Write,
    result: &SearchResult,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(result).map_err(CliError::SerializeResult)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
