//! Candidate delivery routes.
//!
//! A route is one ordering of the four input stops. Routes are produced in
//! bulk during search, scored, and discarded except for the winner.

use crate::{DeliveryError, Stop, StopRole};

/// Number of stops in every route.
pub const STOP_COUNT: usize = 4;

/// An ordered visit of all four stops.
///
/// # Examples
/// ```
/// use courier_core::{GeoPoint, Route, Stop, StopRole};
///
/// # fn main() -> Result<(), courier_core::DeliveryError> {
/// let here = GeoPoint::new(0.0, 0.0)?;
/// let stops = StopRole::ALL.map(|role| Stop::new(role, here));
/// let route = Route::permuted(&stops, [2, 3, 0, 1])?;
/// assert_eq!(
///     route.roles(),
///     [StopRole::Restaurant2, StopRole::Customer2, StopRole::Restaurant1, StopRole::Customer1]
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RouteStops", into = "RouteStops")
)]
pub struct Route {
    stops: [Stop; STOP_COUNT],
}

impl Route {
    /// Construct a route visiting `stops` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::InvalidRoute`] unless every [`StopRole`]
    /// appears exactly once.
    pub fn new(stops: [Stop; STOP_COUNT]) -> Result<Self, DeliveryError> {
        let mut seen = [false; STOP_COUNT];
        for stop in &stops {
            let slot = StopRole::ALL
                .iter()
                .position(|role| *role == stop.role)
                .and_then(|index| seen.get_mut(index));
            match slot {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(DeliveryError::InvalidRoute),
            }
        }
        Ok(Self { stops })
    }

    /// Reorder `stops` so that position `i` of the route holds
    /// `stops[order[i]]`.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::InvalidRoute`] unless `order` names every
    /// input position exactly once and the stops carry distinct roles.
    pub fn permuted(
        stops: &[Stop; STOP_COUNT],
        order: [usize; STOP_COUNT],
    ) -> Result<Self, DeliveryError> {
        let mut seen = [false; STOP_COUNT];
        for &index in &order {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(DeliveryError::InvalidRoute),
            }
        }
        let mut reordered = *stops;
        for (slot, &index) in reordered.iter_mut().zip(&order) {
            *slot = *stops.get(index).ok_or(DeliveryError::InvalidRoute)?;
        }
        Self::new(reordered)
    }

    /// Stops in visiting order.
    #[must_use]
    pub const fn stops(&self) -> &[Stop; STOP_COUNT] {
        &self.stops
    }

    /// Iterate over stops in visiting order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Stop> {
        self.stops.iter()
    }

    /// Roles in visiting order.
    #[must_use]
    pub fn roles(&self) -> [StopRole; STOP_COUNT] {
        self.stops.map(|stop| stop.role)
    }

    /// Whether every customer is visited after the restaurant it depends on.
    ///
    /// A customer whose restaurant does not appear in the route at all is
    /// treated as out of order.
    #[must_use]
    pub fn respects_pickup_order(&self) -> bool {
        self.stops.iter().enumerate().all(|(position, stop)| {
            stop.role.pickup().is_none_or(|restaurant| {
                self.stops
                    .iter()
                    .take(position)
                    .any(|earlier| earlier.role == restaurant)
            })
        })
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Stop;
    type IntoIter = std::slice::Iter<'a, Stop>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Wire shape for [`Route`]; deserialisation re-runs validation.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RouteStops {
    stops: [Stop; STOP_COUNT],
}

#[cfg(feature = "serde")]
impl TryFrom<RouteStops> for Route {
    type Error = DeliveryError;

    fn try_from(raw: RouteStops) -> Result<Self, Self::Error> {
        Self::new(raw.stops)
    }
}

#[cfg(feature = "serde")]
impl From<Route> for RouteStops {
    fn from(route: Route) -> Self {
        Self { stops: route.stops }
    }
}
