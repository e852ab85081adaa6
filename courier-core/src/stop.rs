//! Role-tagged stops in a two-order delivery task.
//!
//! The role travels with the coordinate through permutation so that
//! preparation delays are matched by role and never by location.

use crate::GeoPoint;

/// The part a stop plays in the delivery task.
///
/// # Examples
/// ```
/// use courier_core::StopRole;
///
/// assert_eq!(StopRole::Restaurant1.as_str(), "restaurant-1");
/// assert_eq!(StopRole::Customer2.pickup(), Some(StopRole::Restaurant2));
/// assert!("customer-1".parse::<StopRole>().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopRole {
    /// Pickup for the first order.
    #[cfg_attr(feature = "serde", serde(rename = "restaurant-1"))]
    Restaurant1,
    /// Dropoff for the first order.
    #[cfg_attr(feature = "serde", serde(rename = "customer-1"))]
    Customer1,
    /// Pickup for the second order.
    #[cfg_attr(feature = "serde", serde(rename = "restaurant-2"))]
    Restaurant2,
    /// Dropoff for the second order.
    #[cfg_attr(feature = "serde", serde(rename = "customer-2"))]
    Customer2,
}

impl StopRole {
    /// Every role, in the order stops are supplied to the optimizer.
    pub const ALL: [Self; 4] = [
        Self::Restaurant1,
        Self::Customer1,
        Self::Restaurant2,
        Self::Customer2,
    ];

    /// Return the role as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant1 => "restaurant-1",
            Self::Customer1 => "customer-1",
            Self::Restaurant2 => "restaurant-2",
            Self::Customer2 => "customer-2",
        }
    }

    /// Whether a preparation delay can apply at this stop.
    #[must_use]
    pub const fn is_restaurant(self) -> bool {
        matches!(self, Self::Restaurant1 | Self::Restaurant2)
    }

    /// The restaurant a customer's order is collected from.
    ///
    /// Returns `None` for restaurant roles.
    #[must_use]
    pub const fn pickup(self) -> Option<Self> {
        match self {
            Self::Customer1 => Some(Self::Restaurant1),
            Self::Customer2 => Some(Self::Restaurant2),
            Self::Restaurant1 | Self::Restaurant2 => None,
        }
    }
}

impl std::fmt::Display for StopRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StopRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown stop role '{s}'"))
    }
}

/// A location tagged with its [`StopRole`].
///
/// # Examples
/// ```
/// use courier_core::{GeoPoint, Stop, StopRole};
///
/// # fn main() -> Result<(), courier_core::DeliveryError> {
/// let stop = Stop::new(StopRole::Restaurant1, GeoPoint::new(12.93, 77.62)?);
/// assert!(stop.role.is_restaurant());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Part this stop plays in the task.
    pub role: StopRole,
    /// Where the stop is.
    pub location: GeoPoint,
}

impl Stop {
    /// Tag `location` with `role`.
    #[must_use]
    pub const fn new(role: StopRole, location: GeoPoint) -> Self {
        Self { role, location }
    }
}
