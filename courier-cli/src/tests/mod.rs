//! Shared test harness modules for the courier CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]
#![expect(
    clippy::expect_used,
    reason = "Tests use expect for readable failures"
)]

use super::*;
use crate::solve::{
    DefaultSolverBuilder, SolveArgs, SolveConfig, SolverBuilder, config_from_layers_for_test,
    execute_solve, load_request, run_solve_with, write_search_result,
};

mod helpers;
