use serde::{Deserialize, Serialize};

/// Latitude beyond which Web Mercator is undefined.
pub const MAX_LATITUDE: f64 = 85.05112878;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Longitude wrapped into `[-180, 180)`.
    pub fn wrapped(self) -> Self {
        let lng = (self.lng + 180.0).rem_euclid(360.0) - 180.0;
        Self { lat: self.lat, lng }
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_longitude_past_antimeridian() {
        let wrapped = LatLng::new(10.0, 190.0).wrapped();

        assert_eq!(wrapped.lat, 10.0);
        assert!((wrapped.lng - -170.0).abs() < 1e-9);
    }

    #[test]
    fn keeps_longitude_in_range() {
        let wrapped = LatLng::new(-23.5, -46.8).wrapped();

        assert_eq!(wrapped.lat, -23.5);
        assert!((wrapped.lng - -46.8).abs() < 1e-9);
    }
}
