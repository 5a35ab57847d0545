use crate::domain::GeoPoint;

/// The user picked a location on a map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationSelected {
    pub lat: f64,
    pub lon: f64,
}

impl LocationSelected {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

impl From<GeoPoint> for LocationSelected {
    fn from(p: GeoPoint) -> Self {
        Self::new(p.lat, p.lon)
    }
}

/// What a transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// New point: selection replaced and prediction regenerated.
    Regenerated,
    /// Same point as stored: nothing changed.
    Unchanged,
}
