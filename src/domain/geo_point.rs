use std::fmt;

/// A WGS84 position in decimal degrees.
/// No range validation: any pair the map reports is accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn offset(&self, d_lat: f64, d_lon: f64) -> Self {
        Self::new(self.lat + d_lat, self.lon + d_lon)
    }

    /// True if both coordinates are within `tolerance_deg` of `other` (a square, not a circle).
    pub fn within(&self, other: &GeoPoint, tolerance_deg: f64) -> bool {
        (self.lat - other.lat).abs() <= tolerance_deg && (self.lon - other.lon).abs() <= tolerance_deg
    }

    /// Plot coordinates: x is longitude, y is latitude.
    pub fn to_plot(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_five_decimals() {
        let p = GeoPoint::new(24.9, 91.87);
        assert_eq!(p.to_string(), "24.90000, 91.87000");
    }

    #[test]
    fn within_is_inclusive_per_axis() {
        let center = GeoPoint::new(10.0, 20.0);
        assert!(center.offset(0.01, -0.01).within(&center, 0.010_000_1));
        assert!(!center.offset(0.02, 0.0).within(&center, 0.01));
    }

    #[test]
    fn plot_coordinates_are_lon_lat() {
        assert_eq!(GeoPoint::new(1.0, 2.0).to_plot(), [2.0, 1.0]);
    }
}
