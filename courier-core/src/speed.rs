//! Constant courier speed and the travel-time model built on it.

use crate::{DeliveryError, GeoPoint};

/// Average courier speed in kilometres per hour.
///
/// Guaranteed positive and finite.
///
/// # Examples
/// ```
/// use courier_core::{AverageSpeed, GeoPoint};
///
/// # fn main() -> Result<(), courier_core::DeliveryError> {
/// let speed = AverageSpeed::new(60.0)?;
/// let a = GeoPoint::new(0.0, 0.0)?;
/// let b = GeoPoint::new(0.0, 1.0)?;
/// // About 111 km at 60 km/h.
/// assert!((speed.travel_minutes(&a, &b) - 111.19).abs() < 0.01);
/// assert!(AverageSpeed::new(0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageSpeed(f64);

impl AverageSpeed {
    /// Speed used when none is configured.
    pub const DEFAULT_KMPH: f64 = 20.0;

    /// Validate and wrap a speed in km/h.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::InvalidConfiguration`] when `kmph` is zero,
    /// negative, or not finite.
    pub fn new(kmph: f64) -> Result<Self, DeliveryError> {
        if kmph.is_finite() && kmph > 0.0 {
            Ok(Self(kmph))
        } else {
            Err(DeliveryError::InvalidConfiguration {
                average_speed_kmph: kmph,
            })
        }
    }

    /// Speed in km/h.
    #[must_use]
    pub const fn kmph(self) -> f64 {
        self.0
    }

    /// Minutes needed to cover the great-circle distance between two points.
    #[expect(
        clippy::float_arithmetic,
        reason = "travel time is distance over speed in fractional minutes"
    )]
    #[must_use]
    pub fn travel_minutes(self, from: &GeoPoint, to: &GeoPoint) -> f64 {
        from.haversine_distance_km(to) / self.0 * 60.0
    }
}

impl Default for AverageSpeed {
    fn default() -> Self {
        Self(Self::DEFAULT_KMPH)
    }
}
