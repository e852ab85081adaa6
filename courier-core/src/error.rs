//! Errors raised while validating delivery inputs and searching for routes.

use thiserror::Error;

use crate::StopRole;

/// Coordinate axis named in [`DeliveryError::InvalidCoordinate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// North-south position, valid within `[-90, 90]`.
    Latitude,
    /// East-west position, valid within `[-180, 180]`.
    Longitude,
}

impl Axis {
    /// Return the inclusive magnitude bound for this axis in degrees.
    ///
    /// # Examples
    /// ```
    /// use courier_core::Axis;
    ///
    /// assert_eq!(Axis::Latitude.limit(), 90.0);
    /// assert_eq!(Axis::Longitude.limit(), 180.0);
    /// ```
    #[must_use]
    pub const fn limit(self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }

    /// Return the axis name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the courier domain and route search.
///
/// Construction errors ([`InvalidCoordinate`](Self::InvalidCoordinate),
/// [`InvalidConfiguration`](Self::InvalidConfiguration)) are fatal to the
/// caller. [`InvalidPreparationTime`](Self::InvalidPreparationTime) is raised
/// per candidate route and is contained by the search loop, which only
/// surfaces [`NoValidRoute`](Self::NoValidRoute) once every candidate has
/// been disqualified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeliveryError {
    /// A latitude or longitude fell outside its valid range.
    #[error("{axis} must be between -{limit} and {limit} degrees, got {value}", limit = .axis.limit())]
    InvalidCoordinate {
        /// Axis that failed validation.
        axis: Axis,
        /// Rejected value in degrees.
        value: f64,
    },
    /// The configured average speed was not a positive, finite number.
    #[error("average speed must be a positive value, got {average_speed_kmph} km/h")]
    InvalidConfiguration {
        /// Rejected speed in kilometres per hour.
        average_speed_kmph: f64,
    },
    /// A restaurant's preparation time was negative.
    #[error("preparation time at {role} must be non-negative, got {minutes} minutes")]
    InvalidPreparationTime {
        /// Restaurant whose preparation time was rejected.
        role: StopRole,
        /// Rejected preparation time in minutes.
        minutes: f64,
    },
    /// A route did not contain each of the four stops exactly once.
    #[error("route must visit each of the four stops exactly once")]
    InvalidRoute,
    /// Every candidate route was disqualified.
    #[error("no valid route found ({rejected} candidates rejected)")]
    NoValidRoute {
        /// Number of candidates that failed scoring.
        rejected: usize,
    },
}
