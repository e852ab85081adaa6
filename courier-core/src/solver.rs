use crate::{DeliveryError, GeoPoint, PreparationTimes, Route, Stop, StopRole};

/// Inputs for a single best-route search.
///
/// The request bundles the courier's start point, both orders and the
/// restaurants' preparation delays.
///
/// # Examples
/// ```rust
/// use courier_core::{DeliveryRequest, GeoPoint, PreparationTimes, StopRole};
///
/// # fn main() -> Result<(), courier_core::DeliveryError> {
/// let request = DeliveryRequest {
///     start: GeoPoint::new(12.97, 77.59)?,
///     restaurant_1: GeoPoint::new(12.93, 77.62)?,
///     customer_1: GeoPoint::new(13.01, 77.68)?,
///     restaurant_2: GeoPoint::new(12.99, 77.65)?,
///     customer_2: GeoPoint::new(12.95, 77.55)?,
///     preparation: PreparationTimes::new(15.0, 10.0),
/// };
/// assert_eq!(request.stops()[2].role, StopRole::Restaurant2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryRequest {
    /// Where the courier sets off from.
    pub start: GeoPoint,
    /// Pickup point for the first order.
    pub restaurant_1: GeoPoint,
    /// Dropoff point for the first order.
    pub customer_1: GeoPoint,
    /// Pickup point for the second order.
    pub restaurant_2: GeoPoint,
    /// Dropoff point for the second order.
    pub customer_2: GeoPoint,
    /// Restaurant preparation delays in minutes.
    pub preparation: PreparationTimes,
}

impl DeliveryRequest {
    /// The four role-tagged stops in [`StopRole::ALL`] order.
    #[must_use]
    pub const fn stops(&self) -> [Stop; 4] {
        [
            Stop::new(StopRole::Restaurant1, self.restaurant_1),
            Stop::new(StopRole::Customer1, self.customer_1),
            Stop::new(StopRole::Restaurant2, self.restaurant_2),
            Stop::new(StopRole::Customer2, self.customer_2),
        ]
    }
}

/// Outcome of a successful search.
///
/// Contains the winning [`Route`], its total elapsed time and counters
/// describing how many candidates were considered.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// The minimum-time ordering.
    pub route: Route,
    /// Travel plus preparation time, in minutes.
    pub total_minutes: f64,
    /// Candidates that were scored successfully.
    pub candidates_evaluated: usize,
    /// Candidates excluded because scoring failed.
    pub candidates_rejected: usize,
}

impl SearchResult {
    /// Total time as a [`std::time::Duration`].
    ///
    /// Saturates to zero for values that cannot be represented.
    #[expect(
        clippy::float_arithmetic,
        reason = "minutes are converted to fractional seconds"
    )]
    #[must_use]
    pub fn total_duration(&self) -> std::time::Duration {
        std::time::Duration::try_from_secs_f64(self.total_minutes * 60.0).unwrap_or_default()
    }
}

/// Find the fastest ordering of a delivery request's stops.
///
/// Implementations return [`DeliveryError::NoValidRoute`] when no candidate
/// can be scored rather than panicking.
/// Solvers must be `Send + Sync` to operate safely across threads.
pub trait Solver: Send + Sync {
    /// Solve a request, producing the best route or an error.
    fn solve(&self, request: &DeliveryRequest) -> Result<SearchResult, DeliveryError>;
}
