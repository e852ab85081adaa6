//! Validated WGS84 positions and great-circle distance.
//!
//! Coordinates are stored as a [`geo::Coord`] with `x = longitude` and
//! `y = latitude`, matching the convention used across the `geo` ecosystem.

use geo::{Coord, Point};

use crate::{Axis, DeliveryError};

/// Mean Earth radius used by [`GeoPoint::haversine_distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// An immutable latitude/longitude pair.
///
/// Both bounds are inclusive: `±90` latitude and `±180` longitude are valid.
///
/// # Examples
/// ```
/// use courier_core::GeoPoint;
///
/// # fn main() -> Result<(), courier_core::DeliveryError> {
/// let point = GeoPoint::new(12.97, 77.59)?;
/// assert_eq!(point.latitude(), 12.97);
/// assert_eq!(point.longitude(), 77.59);
/// assert!(GeoPoint::new(90.0001, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LatLon", into = "LatLon")
)]
pub struct GeoPoint {
    location: Coord<f64>,
}

impl GeoPoint {
    /// Validate and construct a [`GeoPoint`].
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::InvalidCoordinate`] when either value lies
    /// outside its range. `NaN` is never inside a range and is rejected.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DeliveryError> {
        check_axis(Axis::Latitude, latitude)?;
        check_axis(Axis::Longitude, longitude)?;
        Ok(Self {
            location: Coord {
                x: longitude,
                y: latitude,
            },
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Return the underlying `geo` coordinate.
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        self.location
    }

    /// Great-circle distance to `other` in kilometres.
    ///
    /// Uses the haversine formula on a sphere of radius
    /// [`EARTH_RADIUS_KM`]. The result is symmetric, non-negative and zero
    /// for identical points.
    ///
    /// # Examples
    /// ```
    /// use courier_core::GeoPoint;
    ///
    /// # fn main() -> Result<(), courier_core::DeliveryError> {
    /// let equator = GeoPoint::new(0.0, 0.0)?;
    /// let one_degree_east = GeoPoint::new(0.0, 1.0)?;
    /// let km = equator.haversine_distance_km(&one_degree_east);
    /// assert!((km - 111.195).abs() < 0.001);
    /// assert_eq!(equator.haversine_distance_km(&equator), 0.0);
    /// # Ok(())
    /// # }
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "the haversine formula is floating-point trigonometry"
    )]
    #[must_use]
    pub fn haversine_distance_km(&self, other: &Self) -> f64 {
        let lat1 = self.latitude().to_radians();
        let lat2 = other.latitude().to_radians();
        let half_dlat = (lat2 - lat1) / 2.0;
        let half_dlon = (other.longitude().to_radians() - self.longitude().to_radians()) / 2.0;

        let a = half_dlon
            .sin()
            .powi(2)
            .mul_add(lat1.cos() * lat2.cos(), half_dlat.sin().powi(2));
        // Rounding can push `a` a hair past 1 for antipodal points.
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

fn check_axis(axis: Axis, value: f64) -> Result<(), DeliveryError> {
    let limit = axis.limit();
    if (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(DeliveryError::InvalidCoordinate { axis, value })
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        point.location
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Point(point.location)
    }
}

impl TryFrom<Coord<f64>> for GeoPoint {
    type Error = DeliveryError;

    fn try_from(coord: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(coord.y, coord.x)
    }
}

/// Wire shape for [`GeoPoint`]; deserialisation re-runs validation.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct LatLon {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<LatLon> for GeoPoint {
    type Error = DeliveryError;

    fn try_from(raw: LatLon) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

#[cfg(feature = "serde")]
impl From<GeoPoint> for LatLon {
    fn from(point: GeoPoint) -> Self {
        Self {
            latitude: point.latitude(),
            longitude: point.longitude(),
        }
    }
}
