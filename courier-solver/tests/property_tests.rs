//! Property-based tests for the exhaustive route search.
//!
//! # Invariants tested
//!
//! - **Optimality:** the selected route is no slower than any candidate.
//! - **Coverage:** every search scores all 24 orderings when unconstrained.
//! - **Distinctness:** the generated orderings are pairwise distinct.
//! - **Lower bound:** the total time is at least the summed preparation.

use courier_core::{DeliveryRequest, GeoPoint, NoopObserver, PreparationTimes, Solver};
use courier_solver::{RouteOptimizer, RouteOptimizerConfig, generate_routes};
use proptest::prelude::*;

fn geo_point() -> impl Strategy<Value = GeoPoint> {
    // A city-sized box keeps legs realistic for a courier.
    (12.8_f64..13.1, 77.4_f64..77.8).prop_map(|(lat, lon)| {
        GeoPoint::new(lat, lon).unwrap_or_else(|err| panic!("in-range point rejected: {err}"))
    })
}

fn request() -> impl Strategy<Value = DeliveryRequest> {
    (
        geo_point(),
        geo_point(),
        geo_point(),
        geo_point(),
        geo_point(),
        0.0_f64..60.0,
        0.0_f64..60.0,
    )
        .prop_map(
            |(start, restaurant_1, customer_1, restaurant_2, customer_2, prep_1, prep_2)| {
                DeliveryRequest {
                    start,
                    restaurant_1,
                    customer_1,
                    restaurant_2,
                    customer_2,
                    preparation: PreparationTimes::new(prep_1, prep_2),
                }
            },
        )
}

fn optimizer() -> RouteOptimizer<NoopObserver> {
    RouteOptimizer::with_observer(RouteOptimizerConfig::default(), NoopObserver)
        .unwrap_or_else(|err| panic!("default config rejected: {err}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: no candidate ordering beats the selected one.
    #[test]
    fn best_route_is_minimal(req in request()) {
        let optimizer = optimizer();
        let result = optimizer.solve(&req).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(result.candidates_evaluated, 24);
        let routes = generate_routes(&req.stops()).map_err(|e| TestCaseError::fail(e.to_string()))?;
        for route in routes {
            let score = optimizer
                .score_route(&route, &req.start, &req.preparation)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert!(result.total_minutes <= score);
        }
    }

    /// Property: the total never undercuts the preparation delays.
    #[test]
    fn total_includes_preparation(req in request()) {
        let result = optimizer().solve(&req).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let floor = req.preparation.restaurant_1 + req.preparation.restaurant_2;
        prop_assert!(result.total_minutes >= floor);
    }

    /// Property: the 24 orderings are pairwise distinct.
    #[test]
    fn orderings_are_distinct(req in request()) {
        let routes = generate_routes(&req.stops()).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(routes.len(), 24);
        let mut roles: Vec<_> = routes.iter().map(|route| route.roles()).collect();
        roles.sort();
        roles.dedup();
        prop_assert_eq!(roles.len(), 24);
    }
}
