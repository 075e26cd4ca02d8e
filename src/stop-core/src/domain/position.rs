use serde::{Deserialize, Serialize};

/// Radius of the sphere used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6372.8;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Position {
        Position {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance in kilometers to `other`, using the haversine formula.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = lat2 - lat1;
        let delta_lon = other.longitude.to_radians() - self.longitude.to_radians();

        let h = haversine(delta_lat) + lat1.cos() * lat2.cos() * haversine(delta_lon);

        // Rounding can push `h` slightly outside [0, 1] for (near) antipodal points.
        2.0 * EARTH_RADIUS_KM * h.clamp(0.0, 1.0).sqrt().asin()
    }
}

fn haversine(theta: f64) -> f64 {
    (1.0 - theta.cos()) / 2.0
}
