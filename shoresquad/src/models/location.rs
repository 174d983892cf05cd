use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the distance helper, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lng: f64,
}
impl GeoCoordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
    pub fn distance_km(&self, other: &GeoCoordinate) -> f64 {
        calculate_distance(self.lat, self.lng, other.lat, other.lng)
    }
}
impl Default for GeoCoordinate {
    /// Venice Beach.
    fn default() -> Self {
        Self::new(34.0195, -118.4912)
    }
}

/// Why the host could not report a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable: {0}")]
    Unavailable(String),

    #[error("Timed out waiting for a position")]
    Timeout,
}

/// Great-circle distance in kilometres (Haversine).
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
