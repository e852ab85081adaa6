//! Facade crate for the courier route engine.
//!
//! This crate re-exports the core domain types and exposes the exhaustive
//! route optimizer behind a feature flag.

#![forbid(unsafe_code)]

pub use courier_core::{
    Axis, AverageSpeed, DeliveryError, DeliveryRequest, GeoPoint, LogObserver, NoopObserver,
    PreparationTimes, Route, SearchObserver, SearchResult, Solver, Stop, StopRole,
};

#[cfg(feature = "solver")]
pub use courier_solver::{RouteOptimizer, RouteOptimizerConfig};

#[cfg(feature = "test-support")]
pub use courier_core::test_support;
