//! Exhaustive route optimizer for two-order courier deliveries.
//!
//! This crate provides [`RouteOptimizer`], the default implementation of the
//! [`Solver`](courier_core::Solver) trait. With only four stops the search
//! space is 4! = 24 orderings, so every ordering is generated, scored from
//! the courier's start point, and the minimum kept. Generalising to more
//! stops turns this into a travelling salesman problem and would need a
//! heuristic or dynamic-programming search instead.
//!
//! Scoring failures for individual candidates are reported to the injected
//! [`SearchObserver`](courier_core::SearchObserver) and excluded; the search
//! only fails when no candidate survives.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod permutations;
mod solver;

pub use permutations::{IndexPermutations, generate_routes};
pub use solver::{RouteOptimizer, RouteOptimizerConfig};
