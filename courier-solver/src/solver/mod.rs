//! `RouteOptimizer` implementation: enumerate, score, keep the minimum.
//!
//! Supports an opt-in pickup-before-dropoff filter; by default every
//! ordering competes, including ones that reach a customer before the
//! matching restaurant.

use courier_core::{
    AverageSpeed, DeliveryError, DeliveryRequest, GeoPoint, LogObserver, PreparationTimes, Route,
    SearchObserver, SearchResult, Solver,
};

use crate::permutations::generate_routes;

/// Configuration for [`RouteOptimizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteOptimizerConfig {
    /// Constant courier speed in km/h. Must be positive.
    pub average_speed_kmph: f64,
    /// Discard orderings that visit a customer before its restaurant.
    pub enforce_pickup_before_dropoff: bool,
}

impl Default for RouteOptimizerConfig {
    fn default() -> Self {
        Self {
            average_speed_kmph: AverageSpeed::DEFAULT_KMPH,
            enforce_pickup_before_dropoff: false,
        }
    }
}

/// Exhaustive best-route search over the four delivery stops.
///
/// The optimizer holds only immutable configuration and an observer, so a
/// single instance can serve concurrent searches.
///
/// # Examples
/// ```rust
/// use courier_core::test_support::sample_request;
/// use courier_solver::{RouteOptimizer, RouteOptimizerConfig};
///
/// # fn main() -> Result<(), courier_core::DeliveryError> {
/// let optimizer = RouteOptimizer::new(RouteOptimizerConfig::default())?;
/// let request = sample_request();
/// let result = optimizer.find_best_route(
///     request.start,
///     request.restaurant_1,
///     request.customer_1,
///     request.restaurant_2,
///     request.customer_2,
///     15.0,
///     10.0,
/// )?;
/// assert!(result.total_minutes > 25.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer<O = LogObserver> {
    speed: AverageSpeed,
    enforce_pickup_before_dropoff: bool,
    observer: O,
}

impl RouteOptimizer<LogObserver> {
    /// Construct an optimizer that reports through the `log` facade.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::InvalidConfiguration`] when the configured
    /// speed is not positive.
    pub fn new(config: RouteOptimizerConfig) -> Result<Self, DeliveryError> {
        Self::with_observer(config, LogObserver)
    }
}

impl Default for RouteOptimizer<LogObserver> {
    fn default() -> Self {
        Self {
            speed: AverageSpeed::default(),
            enforce_pickup_before_dropoff: false,
            observer: LogObserver,
        }
    }
}

impl<O: SearchObserver> RouteOptimizer<O> {
    /// Construct an optimizer with an explicit observer.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::InvalidConfiguration`] when the configured
    /// speed is not positive.
    pub fn with_observer(config: RouteOptimizerConfig, observer: O) -> Result<Self, DeliveryError> {
        let speed = AverageSpeed::new(config.average_speed_kmph)?;
        Ok(Self {
            speed,
            enforce_pickup_before_dropoff: config.enforce_pickup_before_dropoff,
            observer,
        })
    }

    /// The validated courier speed.
    #[must_use]
    pub const fn average_speed(&self) -> AverageSpeed {
        self.speed
    }

    /// The observer receiving search events.
    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Total elapsed minutes for driving `route` from `start`.
    ///
    /// Each leg adds its travel time; arriving at a restaurant adds that
    /// restaurant's preparation time. No precedence rule is applied.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::InvalidPreparationTime`] when either
    /// preparation time is negative or not finite, before any leg is timed.
    #[expect(
        clippy::float_arithmetic,
        reason = "route time accumulates fractional minutes"
    )]
    pub fn score_route(
        &self,
        route: &Route,
        start: &GeoPoint,
        preparation: &PreparationTimes,
    ) -> Result<f64, DeliveryError> {
        preparation.validate()?;
        let mut total = 0.0;
        let mut current = *start;
        for stop in route {
            total += self.speed.travel_minutes(&current, &stop.location);
            total += preparation.for_role(stop.role)?;
            current = stop.location;
        }
        Ok(total)
    }

    /// Find the fastest ordering of the two pickups and two dropoffs.
    ///
    /// All 24 orderings are scored (fewer when the pickup-before-dropoff
    /// filter is enabled). The first ordering with the strictly smallest
    /// time wins; later ties never replace it.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::NoValidRoute`] when every candidate fails
    /// scoring, for example because a preparation time is negative.
    #[expect(
        clippy::too_many_arguments,
        reason = "mirrors the positional start, stops and preparation inputs"
    )]
    pub fn find_best_route(
        &self,
        start: GeoPoint,
        restaurant_1: GeoPoint,
        customer_1: GeoPoint,
        restaurant_2: GeoPoint,
        customer_2: GeoPoint,
        prep_restaurant_1: f64,
        prep_restaurant_2: f64,
    ) -> Result<SearchResult, DeliveryError> {
        let request = DeliveryRequest {
            start,
            restaurant_1,
            customer_1,
            restaurant_2,
            customer_2,
            preparation: PreparationTimes::new(prep_restaurant_1, prep_restaurant_2),
        };
        self.search(&request)
    }

    fn search(&self, request: &DeliveryRequest) -> Result<SearchResult, DeliveryError> {
        let candidates = self.candidates(request)?;
        let outcomes = self.score_all(&candidates, request);

        let mut best: Option<(Route, f64)> = None;
        let mut evaluated = 0_usize;
        let mut rejected = 0_usize;
        for (route, outcome) in candidates.iter().zip(outcomes) {
            match outcome {
                Ok(minutes) => {
                    evaluated += 1;
                    self.observer.candidate_scored(route, minutes);
                    if best.is_none_or(|(_, best_minutes)| minutes < best_minutes) {
                        best = Some((*route, minutes));
                    }
                }
                Err(error) => {
                    rejected += 1;
                    self.observer.candidate_rejected(route, &error);
                }
            }
        }

        let Some((route, total_minutes)) = best else {
            self.observer.no_valid_route(rejected);
            return Err(DeliveryError::NoValidRoute { rejected });
        };
        let result = SearchResult {
            route,
            total_minutes,
            candidates_evaluated: evaluated,
            candidates_rejected: rejected,
        };
        self.observer.best_route_selected(&result);
        Ok(result)
    }

    fn candidates(&self, request: &DeliveryRequest) -> Result<Vec<Route>, DeliveryError> {
        let mut routes = generate_routes(&request.stops())?;
        if self.enforce_pickup_before_dropoff {
            routes.retain(Route::respects_pickup_order);
        }
        Ok(routes)
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all(
        &self,
        candidates: &[Route],
        request: &DeliveryRequest,
    ) -> Vec<Result<f64, DeliveryError>> {
        candidates
            .iter()
            .map(|route| self.score_route(route, &request.start, &request.preparation))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn score_all(
        &self,
        candidates: &[Route],
        request: &DeliveryRequest,
    ) -> Vec<Result<f64, DeliveryError>> {
        use rayon::prelude::*;

        // Indexed collection keeps generation order for the reduction.
        candidates
            .par_iter()
            .map(|route| self.score_route(route, &request.start, &request.preparation))
            .collect()
    }
}

impl<O: SearchObserver> Solver for RouteOptimizer<O> {
    fn solve(&self, request: &DeliveryRequest) -> Result<SearchResult, DeliveryError> {
        log::debug!(
            "solving delivery from ({}, {}) at {} km/h",
            request.start.latitude(),
            request.start.longitude(),
            self.speed.kmph()
        );
        self.search(request)
    }
}
