use crate::domain::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points on a spherical earth.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let delta_lat = (to.latitude() - from.latitude()).to_radians();
    let delta_lon = (to.longitude() - from.longitude()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from.latitude().to_radians().cos() * to.latitude().to_radians().cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).unwrap()
    }

    #[test]
    fn nairobi_cbd_to_jkia() {
        let distance = haversine_km(point(-1.2921, 36.8219), point(-1.3192, 36.9275));

        assert!((distance - 12.1197).abs() < 0.001, "unexpected distance {}", distance);
    }

    #[test]
    fn one_degree_of_longitude_on_the_equator() {
        let distance = haversine_km(point(0.0, 0.0), point(0.0, 1.0));

        assert!((distance - 111.1949).abs() < 0.001, "unexpected distance {}", distance);
    }

    #[rstest]
    #[case(point(-1.2921, 36.8219), point(-1.3192, 36.9275))]
    #[case(point(52.52, 13.405), point(51.5074, -0.1278))]
    #[case(point(-33.8688, 151.2093), point(40.7128, -74.006))]
    #[case(point(89.9, 0.0), point(-89.9, 179.9))]
    fn distance_is_symmetric(#[case] a: GeoPoint, #[case] b: GeoPoint) {
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

    #[rstest]
    #[case(point(0.0, 0.0))]
    #[case(point(-1.3192, 36.9275))]
    #[case(point(90.0, -180.0))]
    fn distance_to_itself_is_zero(#[case] a: GeoPoint) {
        assert_eq!(haversine_km(a, a), 0.0);
    }

    #[rstest]
    #[case(point(-87.5, -180.0), point(87.5, 0.0))]
    #[case(point(-45.3, 10.0), point(45.3, -170.0))]
    #[case(point(-0.1, -179.9), point(0.1, 0.1))]
    fn near_antipodal_points_have_a_finite_distance(#[case] a: GeoPoint, #[case] b: GeoPoint) {
        let distance = haversine_km(a, b);

        assert!(distance.is_finite(), "distance {} is not finite", distance);
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1.0, "unexpected distance {}", distance);
    }

    #[test]
    fn sweep_of_antipodal_pairs_never_yields_nan() {
        for lat_tenths in -899..=899 {
            let latitude = f64::from(lat_tenths) / 10.0;
            for lon in -100..=100 {
                let longitude = f64::from(lon) * 0.9 - 90.0;
                let distance = haversine_km(point(-latitude, longitude), point(latitude, longitude + 180.0));
                assert!(!distance.is_nan(), "NaN for {},{}", latitude, longitude);
            }
        }
    }

    #[test]
    fn antipodal_points_are_half_the_circumference_apart() {
        let distance = haversine_km(point(0.0, 0.0), point(0.0, 180.0));

        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 0.001);
    }
}
