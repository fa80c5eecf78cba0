//! Great-circle distance between two points on the Earth's surface.

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Known only when both halves are present.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        latitude.zip(longitude).map(|(lat, lon)| Self::new(lat, lon))
    }
}

/// Haversine distance in kilometres. Inputs are not validated.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let dlat = (to.latitude - from.latitude).to_radians();
    let dlon = (to.longitude - from.longitude).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Round to one decimal place for display. Filtering compares unrounded values.
pub fn round_for_display(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        let p = Coordinates::new(40.0, -75.0);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = Coordinates::new(40.0, -75.0);
        let b = Coordinates::new(41.0, -75.0);
        let d = haversine_km(a, b);
        assert!((d - 111.2).abs() < 1.0, "got {d}");
        assert_eq!(round_for_display(d), 111.2);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (Coordinates::new(33.749, -84.388), Coordinates::new(33.8021, -84.3915)),
            (Coordinates::new(-33.86, 151.21), Coordinates::new(51.5, -0.12)),
            (Coordinates::new(0.0, 179.9), Coordinates::new(0.0, -179.9)),
        ];
        for (a, b) in pairs {
            assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
        }
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let d = haversine_km(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn from_parts_requires_both_halves() {
        assert!(Coordinates::from_parts(Some(1.0), None).is_none());
        assert!(Coordinates::from_parts(None, Some(1.0)).is_none());
        assert_eq!(
            Coordinates::from_parts(Some(1.0), Some(2.0)),
            Some(Coordinates::new(1.0, 2.0))
        );
    }

    #[test]
    fn display_rounding() {
        assert_eq!(round_for_display(5.94), 5.9);
        assert_eq!(round_for_display(5.95), 6.0);
        assert_eq!(round_for_display(0.0), 0.0);
    }
}
