//! Test-only fixtures shared by unit, behaviour and property tests.
//!
//! Gated behind the `test-support` feature (and `cfg(test)`).

use std::sync::{Mutex, PoisonError};

use crate::{
    DeliveryError, DeliveryRequest, GeoPoint, PreparationTimes, Route, SearchObserver,
    SearchResult, StopRole,
};

/// Construct a point, panicking on invalid input.
///
/// # Panics
///
/// Panics when the coordinate is out of range; fixtures are expected to be
/// valid.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures use literal coordinates")]
pub fn point(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint::new(latitude, longitude).expect("fixture coordinate should be valid")
}

/// Bangalore two-order scenario with 15 and 10 minute preparation delays.
///
/// # Examples
/// ```rust
/// use courier_core::test_support::sample_request;
///
/// let request = sample_request();
/// assert_eq!(request.preparation.restaurant_1, 15.0);
/// ```
#[must_use]
pub fn sample_request() -> DeliveryRequest {
    DeliveryRequest {
        start: point(12.97, 77.59),
        restaurant_1: point(12.93, 77.62),
        customer_1: point(13.01, 77.68),
        restaurant_2: point(12.99, 77.65),
        customer_2: point(12.95, 77.55),
        preparation: PreparationTimes::new(15.0, 10.0),
    }
}

/// Event captured by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// A candidate was scored.
    Scored {
        /// Visiting order of the candidate.
        roles: [StopRole; 4],
        /// Score in minutes.
        total_minutes: f64,
    },
    /// A candidate was disqualified.
    Rejected {
        /// Visiting order of the candidate.
        roles: [StopRole; 4],
        /// Why the candidate failed.
        error: DeliveryError,
    },
    /// A winner was chosen.
    Selected(SearchResult),
    /// Every candidate was disqualified.
    NoValidRoute {
        /// Number of rejected candidates.
        rejected: usize,
    },
}

/// Observer that stores every event for later inspection.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<SearchEvent>>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> Vec<SearchEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of scored candidates recorded.
    #[must_use]
    pub fn scored(&self) -> usize {
        self.count(|event| matches!(event, SearchEvent::Scored { .. }))
    }

    /// Number of rejected candidates recorded.
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.count(|event| matches!(event, SearchEvent::Rejected { .. }))
    }

    fn count(&self, predicate: impl Fn(&SearchEvent) -> bool) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|event| predicate(event))
            .count()
    }

    fn push(&self, event: SearchEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl SearchObserver for RecordingObserver {
    fn candidate_scored(&self, route: &Route, total_minutes: f64) {
        self.push(SearchEvent::Scored {
            roles: route.roles(),
            total_minutes,
        });
    }

    fn candidate_rejected(&self, route: &Route, error: &DeliveryError) {
        self.push(SearchEvent::Rejected {
            roles: route.roles(),
            error: error.clone(),
        });
    }

    fn best_route_selected(&self, result: &SearchResult) {
        self.push(SearchEvent::Selected(*result));
    }

    fn no_valid_route(&self, rejected: usize) {
        self.push(SearchEvent::NoValidRoute { rejected });
    }
}
