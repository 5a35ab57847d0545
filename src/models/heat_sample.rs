use crate::domain::GeoPoint;

/// A synthetic risk point near the selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatSample {
    pub point: GeoPoint,
    /// Weight in [0.3, 1.0]
    pub intensity: f64,
}

impl HeatSample {
    pub fn new(lat: f64, lon: f64, intensity: f64) -> Self {
        Self {
            point: GeoPoint::new(lat, lon),
            intensity,
        }
    }

    pub fn lat(&self) -> f64 {
        self.point.lat
    }

    pub fn lon(&self) -> f64 {
        self.point.lon
    }
}
