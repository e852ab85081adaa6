//! Property-based tests for coordinate validation and great-circle distance.
//!
//! # Invariants tested
//!
//! - **Bounds:** construction succeeds exactly for in-range coordinates.
//! - **Identity:** the distance from a point to itself is zero.
//! - **Symmetry:** `distance(a, b) == distance(b, a)`.
//! - **Range:** distances are finite and never exceed half the circumference.

use courier_core::geo_point::EARTH_RADIUS_KM;
use courier_core::{DeliveryError, GeoPoint};
use proptest::prelude::*;

fn latitude() -> impl Strategy<Value = f64> {
    -90.0_f64..=90.0_f64
}

fn longitude() -> impl Strategy<Value = f64> {
    -180.0_f64..=180.0_f64
}

fn geo_point() -> impl Strategy<Value = GeoPoint> {
    (latitude(), longitude()).prop_map(|(lat, lon)| {
        GeoPoint::new(lat, lon).unwrap_or_else(|err| panic!("in-range point rejected: {err}"))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: every in-range pair constructs.
    #[test]
    fn in_range_coordinates_are_accepted(lat in latitude(), lon in longitude()) {
        prop_assert!(GeoPoint::new(lat, lon).is_ok());
    }

    /// Property: latitudes beyond the poles are rejected whatever the longitude.
    #[test]
    fn out_of_range_latitude_is_rejected(
        magnitude in 90.0001_f64..1_000.0,
        negative in any::<bool>(),
        lon in longitude(),
    ) {
        let lat = if negative { -magnitude } else { magnitude };
        let is_coordinate_error = matches!(
            GeoPoint::new(lat, lon),
            Err(DeliveryError::InvalidCoordinate { .. })
        );
        prop_assert!(is_coordinate_error);
    }

    /// Property: longitudes beyond the antimeridian are rejected.
    #[test]
    fn out_of_range_longitude_is_rejected(
        lat in latitude(),
        magnitude in 180.0001_f64..1_000.0,
        negative in any::<bool>(),
    ) {
        let lon = if negative { -magnitude } else { magnitude };
        prop_assert!(GeoPoint::new(lat, lon).is_err());
    }

    /// Property: distance to self is zero.
    #[test]
    fn distance_identity(a in geo_point()) {
        prop_assert!(a.haversine_distance_km(&a).abs() < 1e-9);
    }

    /// Property: distance is symmetric and bounded by half the circumference.
    #[test]
    fn distance_is_symmetric_and_bounded(a in geo_point(), b in geo_point()) {
        let forward = a.haversine_distance_km(&b);
        let backward = b.haversine_distance_km(&a);
        prop_assert!(forward.is_finite());
        prop_assert!(forward >= 0.0);
        prop_assert!((forward - backward).abs() < 1e-6);
        prop_assert!(forward <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
    }
}
