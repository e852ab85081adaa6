//! Core domain types for the courier route engine.
//!
//! These models validate on construction so that downstream components only
//! ever see coordinates inside their legal ranges and routes that visit every
//! stop exactly once. Constructors return `Result` to surface invalid input
//! early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub mod geo_point;
pub mod observer;
mod preparation;
pub mod route;
mod solver;
pub mod speed;
pub mod stop;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{Axis, DeliveryError};
pub use geo_point::GeoPoint;
pub use observer::{LogObserver, NoopObserver, SearchObserver};
pub use preparation::PreparationTimes;
pub use route::Route;
pub use solver::{DeliveryRequest, SearchResult, Solver};
pub use speed::AverageSpeed;
pub use stop::{Stop, StopRole};
