#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for `RouteOptimizer` using rstest-bdd.

use std::cell::RefCell;

use courier_core::test_support::{RecordingObserver, sample_request};
use courier_core::{DeliveryError, DeliveryRequest, PreparationTimes, SearchResult, Solver, StopRole};
use courier_solver::{RouteOptimizer, RouteOptimizerConfig};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct OptimizerWorld {
    request: RefCell<Option<DeliveryRequest>>,
    config: RefCell<Option<RouteOptimizerConfig>>,
    observer: RecordingObserver,
    construction: RefCell<Option<DeliveryError>>,
    outcome: RefCell<Option<Result<SearchResult, DeliveryError>>>,
}

impl OptimizerWorld {
    fn expect_outcome(&self) -> Result<SearchResult, DeliveryError> {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
    }
}

#[fixture]
fn world() -> OptimizerWorld {
    OptimizerWorld::default()
}

#[given("the Bangalore two-order request")]
fn given_sample_request(world: &OptimizerWorld) {
    world.request.replace(Some(sample_request()));
}

#[given("restaurant 2 reports a negative preparation time")]
fn given_negative_preparation(world: &OptimizerWorld) {
    let mut request = world.request.borrow_mut();
    if let Some(req) = request.as_mut() {
        req.preparation = PreparationTimes::new(req.preparation.restaurant_1, -4.0);
    }
}

#[given("an optimizer at the default speed")]
fn given_default_optimizer(world: &OptimizerWorld) {
    world.config.replace(Some(RouteOptimizerConfig::default()));
}

#[given("an optimizer that requires pickups before dropoffs")]
fn given_precedence_optimizer(world: &OptimizerWorld) {
    world.config.replace(Some(RouteOptimizerConfig {
        enforce_pickup_before_dropoff: true,
        ..RouteOptimizerConfig::default()
    }));
}

#[given("an optimizer configured with a speed of zero")]
fn given_zero_speed(world: &OptimizerWorld) {
    let config = RouteOptimizerConfig {
        average_speed_kmph: 0.0,
        ..RouteOptimizerConfig::default()
    };
    let built = RouteOptimizer::with_observer(config, &world.observer);
    world.construction.replace(built.err());
}

#[when("the optimizer searches for the best route")]
fn when_search(world: &OptimizerWorld) {
    let config = world.config.borrow().expect("config should be set");
    let request = world.request.borrow().expect("request should be set");
    let optimizer =
        RouteOptimizer::with_observer(config, &world.observer).expect("config should be valid");
    world.outcome.replace(Some(optimizer.solve(&request)));
}

#[then("a route visiting all four stops is returned")]
fn then_route_returned(world: &OptimizerWorld) {
    let result = world.expect_outcome().expect("expected search success");
    let mut roles = result.route.roles();
    roles.sort();
    let mut expected = StopRole::ALL;
    expected.sort();
    assert_eq!(roles, expected);
}

#[then("the total time exceeds both preparation delays")]
fn then_time_exceeds_preparation(world: &OptimizerWorld) {
    let result = world.expect_outcome().expect("expected search success");
    assert!(result.total_minutes > 25.0);
}

#[then("the search fails with NoValidRoute")]
fn then_no_valid_route(world: &OptimizerWorld) {
    let err = world
        .expect_outcome()
        .expect_err("expected NoValidRoute error");
    assert!(matches!(err, DeliveryError::NoValidRoute { .. }));
}

#[then("every candidate was reported as rejected")]
fn then_all_rejected(world: &OptimizerWorld) {
    assert_eq!(world.observer.rejected(), 24);
    assert_eq!(world.observer.scored(), 0);
}

#[then("every customer is visited after its restaurant")]
fn then_precedence_respected(world: &OptimizerWorld) {
    let result = world.expect_outcome().expect("expected search success");
    assert!(result.route.respects_pickup_order());
    assert_eq!(result.candidates_evaluated, 6);
}

#[then("construction fails with InvalidConfiguration")]
fn then_invalid_configuration(world: &OptimizerWorld) {
    assert!(matches!(
        *world.construction.borrow(),
        Some(DeliveryError::InvalidConfiguration { .. })
    ));
}

#[scenario(path = "tests/features/route_optimizer.feature", index = 0)]
fn fastest_ordering(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_optimizer.feature", index = 1)]
fn negative_preparation(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_optimizer.feature", index = 2)]
fn pickup_precedence(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_optimizer.feature", index = 3)]
fn zero_speed(world: OptimizerWorld) {
    let _ = world;
}
