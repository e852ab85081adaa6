//! Hooks for watching a route search.
//!
//! The optimizer receives an observer at construction instead of touching
//! global logging state. [`LogObserver`] forwards events to the `log` facade;
//! [`NoopObserver`] discards them.

use log::{debug, error, info};

use crate::{DeliveryError, Route, SearchResult};

/// Receives events emitted while candidate routes are evaluated.
///
/// Every method defaults to doing nothing. Observers must be `Send + Sync`
/// so that a single optimizer can be shared across threads.
pub trait SearchObserver: Send + Sync {
    /// A candidate was scored successfully.
    fn candidate_scored(&self, route: &Route, total_minutes: f64) {
        let _ = (route, total_minutes);
    }

    /// A candidate failed scoring and was excluded from contention.
    fn candidate_rejected(&self, route: &Route, error: &DeliveryError) {
        let _ = (route, error);
    }

    /// The search finished with a winner.
    fn best_route_selected(&self, result: &SearchResult) {
        let _ = result;
    }

    /// The search finished without any scorable candidate.
    fn no_valid_route(&self, rejected: usize) {
        let _ = rejected;
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for &O {
    fn candidate_scored(&self, route: &Route, total_minutes: f64) {
        (**self).candidate_scored(route, total_minutes);
    }

    fn candidate_rejected(&self, route: &Route, error: &DeliveryError) {
        (**self).candidate_rejected(route, error);
    }

    fn best_route_selected(&self, result: &SearchResult) {
        (**self).best_route_selected(result);
    }

    fn no_valid_route(&self, rejected: usize) {
        (**self).no_valid_route(rejected);
    }
}

/// Observer that reports search events through the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn candidate_scored(&self, route: &Route, total_minutes: f64) {
        debug!("route {:?} scored {total_minutes:.2} minutes", route.roles());
    }

    fn candidate_rejected(&self, route: &Route, error: &DeliveryError) {
        error!("error calculating route time for {:?}: {error}", route.roles());
    }

    fn best_route_selected(&self, result: &SearchResult) {
        info!(
            "selected route {:?} at {:.2} minutes from {} candidates",
            result.route.roles(),
            result.total_minutes,
            result.candidates_evaluated
        );
    }

    fn no_valid_route(&self, rejected: usize) {
        error!("could not find a valid route; {rejected} candidates rejected");
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
