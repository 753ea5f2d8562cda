//! Geographic points

use serde::{Deserialize, Serialize};
use std::fmt;

/// Web-Mercator latitude limit (degrees)
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// A WGS84 coordinate, used for map clicks and the marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Clamp latitude to the Mercator range and wrap longitude into [-180, 180)
    pub fn normalized(self) -> Self {
        let latitude = self.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        let longitude = (self.longitude + 180.0).rem_euclid(360.0) - 180.0;
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
