//! Spatial math for path interpolation, distances and wind drift.

use crate::models::Coordinate;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Flat kilometers-per-degree factor used for drift conversion.
pub const KM_PER_DEG: f64 = 111.1;

/// Calculate distance between two points in kilometers using Haversine formula.
///
/// This is the standard formula for calculating great-circle distance
/// between two points on a sphere given their latitudes and longitudes.
///
/// # Arguments
/// * `a`, `b` - Coordinates in decimal degrees
///
/// # Returns
/// Distance in kilometers
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lng - a.lng).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Sum of great-circle distances between consecutive points, in kilometers.
pub fn path_length<'a, I>(points: I) -> f64
where
    I: IntoIterator<Item = &'a Coordinate>,
{
    let mut points = points.into_iter();
    let Some(mut prev) = points.next() else {
        return 0.0;
    };
    let mut total = 0.0;
    for point in points {
        total += haversine_distance(prev, point);
        prev = point;
    }
    total
}

/// Point at fraction `t` along the straight lat/lng line from `a` to `b`.
///
/// This is not a geodesic. The endpoints are returned exactly for `t = 0`
/// and `t = 1`, so vertices never pick up rounding error.
pub fn interpolate_point(a: &Coordinate, b: &Coordinate, t: f64) -> Coordinate {
    if t <= 0.0 {
        return *a;
    }
    if t >= 1.0 {
        return *b;
    }
    Coordinate {
        lat: a.lat + (b.lat - a.lat) * t,
        lng: a.lng + (b.lng - a.lng) * t,
    }
}

/// North/east displacement in degrees caused by wind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftOffset {
    pub dlat: f64,
    pub dlng: f64,
}

/// Degree offsets for wind exposure at a given latitude.
///
/// # Arguments
/// * `wind_speed_kmh` - Wind speed in km/h
/// * `wind_direction_deg` - Direction in degrees (0 = north, 90 = east)
/// * `hours` - Exposure time
/// * `ref_lat_deg` - Latitude used to scale the east/west component
pub fn drift_offset(
    wind_speed_kmh: f64,
    wind_direction_deg: f64,
    hours: f64,
    ref_lat_deg: f64,
) -> DriftOffset {
    let drift_km = wind_speed_kmh * hours;
    let direction_rad = wind_direction_deg.to_radians();
    let north_km = drift_km * direction_rad.cos();
    let east_km = drift_km * direction_rad.sin();

    // Degrees of longitude shrink with cos(lat).
    DriftOffset {
        dlat: north_km / KM_PER_DEG,
        dlng: east_km / (KM_PER_DEG * ref_lat_deg.to_radians().cos()),
    }
}

/// Offset a point by the drift accumulated over `hours` of wind exposure.
pub fn apply_drift(
    point: &Coordinate,
    wind_speed_kmh: f64,
    wind_direction_deg: f64,
    hours: f64,
) -> Coordinate {
    let offset = drift_offset(wind_speed_kmh, wind_direction_deg, hours, point.lat);
    Coordinate {
        lat: point.lat + offset.dlat,
        lng: point.lng + offset.dlng,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_distance() {
        // ~111km between these points (1 degree latitude)
        let dist = haversine_distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(1.0, 0.0));
        assert!((dist - 111.195).abs() < 0.01);
    }

    #[test]
    fn test_haversine_same_point() {
        let p = Coordinate::new(25.2630, 82.9922);
        assert_eq!(haversine_distance(&p, &p), 0.0);
    }

    #[test]
    fn haversine_is_symmetric() {
        let pairs = [
            (Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 10.0)),
            (Coordinate::new(25.2630, 82.9922), Coordinate::new(25.3176, 82.9739)),
            (Coordinate::new(-33.86, 151.21), Coordinate::new(51.5, -0.12)),
            (Coordinate::new(89.9, 179.9), Coordinate::new(-89.9, -179.9)),
        ];
        for (a, b) in pairs {
            assert_eq!(haversine_distance(&a, &b), haversine_distance(&b, &a));
        }
    }

    #[test]
    fn equator_ten_degrees_is_about_1112_km() {
        let dist = haversine_distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 10.0));
        assert!((dist - 1111.95).abs() < 0.1, "got {dist}");
    }

    #[test]
    fn interpolation_endpoints_are_exact() {
        let a = Coordinate::new(25.2630, 82.9922);
        let b = Coordinate::new(25.3176, 82.9739);
        assert_eq!(interpolate_point(&a, &b, 0.0), a);
        assert_eq!(interpolate_point(&a, &b, 1.0), b);
    }

    #[test]
    fn interpolation_midpoint() {
        let mid = interpolate_point(&Coordinate::new(10.0, 20.0), &Coordinate::new(12.0, 16.0), 0.5);
        assert!((mid.lat - 11.0).abs() < 1e-12);
        assert!((mid.lng - 18.0).abs() < 1e-12);
    }

    #[test]
    fn path_length_sums_segments() {
        let pts = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(1.0, 1.0),
        ];
        let expected = haversine_distance(&pts[0], &pts[1]) + haversine_distance(&pts[1], &pts[2]);
        assert!((path_length(&pts) - expected).abs() < 1e-12);
        assert_eq!(path_length(&pts[..1]), 0.0);
        assert_eq!(path_length(&[] as &[Coordinate]), 0.0);
    }

    #[test]
    fn north_wind_moves_latitude_only() {
        // 11.11 km/h for one hour -> 0.1 degree north
        let drifted = apply_drift(&Coordinate::new(0.0, 0.0), 11.11, 0.0, 1.0);
        assert!((drifted.lat - 0.1).abs() < 1e-9);
        assert!(drifted.lng.abs() < 1e-12);
    }

    #[test]
    fn east_drift_scales_with_latitude() {
        let at_equator = drift_offset(11.11, 90.0, 1.0, 0.0);
        let at_sixty = drift_offset(11.11, 90.0, 1.0, 60.0);
        assert!((at_equator.dlng - 0.1).abs() < 1e-9);
        // cos(60) = 0.5, so twice as many degrees for the same distance
        assert!((at_sixty.dlng - 0.2).abs() < 1e-9);
        assert!(at_sixty.dlat.abs() < 1e-9);
    }

    #[test]
    fn zero_wind_leaves_point_in_place() {
        let p = Coordinate::new(25.3, 83.0);
        assert_eq!(apply_drift(&p, 0.0, 137.0, 0.25), p);
    }
}
