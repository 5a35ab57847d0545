use crate::{config::MAP_CONFIG, domain::GeoPoint};

/// Axis-aligned lat/lon rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    pub fn around(center: GeoPoint, half_lat: f64, half_lon: f64) -> Self {
        Self {
            min_lat: center.lat - half_lat,
            max_lat: center.lat + half_lat,
            min_lon: center.lon - half_lon,
            max_lon: center.lon + half_lon,
        }
    }

    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat >= self.min_lat && p.lat <= self.max_lat && p.lon >= self.min_lon && p.lon <= self.max_lon
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}

/// A map camera: center plus slippy-map zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
}

impl MapView {
    pub fn new(center: GeoPoint, zoom: u8) -> Self {
        Self { center, zoom }
    }

    /// The view the app opens with.
    pub fn initial() -> Self {
        Self::new(MAP_CONFIG.initial_center.into(), MAP_CONFIG.initial_zoom)
    }

    /// Heatmap view for a selected point.
    pub fn focused_on(point: GeoPoint) -> Self {
        Self::new(point, MAP_CONFIG.result_zoom)
    }

    /// Degrees of longitude per screen pixel.
    /// Zoom z shows 2^z tiles around the globe, each `tile_size_px` wide.
    pub fn deg_per_px(&self) -> f64 {
        360.0 / (2f64.powi(self.zoom as i32) * MAP_CONFIG.tile_size_px)
    }

    pub fn lon_span(&self) -> f64 {
        self.deg_per_px() * MAP_CONFIG.canvas_width as f64
    }

    /// Latitude span shrinks with cos(lat) so the canvas keeps square ground distances.
    pub fn lat_span(&self) -> f64 {
        let height_ratio = MAP_CONFIG.canvas_height as f64 / MAP_CONFIG.canvas_width as f64;
        self.lon_span() * height_ratio * self.center.lat.to_radians().cos().abs()
    }

    pub fn bounds(&self) -> GeoBounds {
        GeoBounds::around(self.center, self.lat_span() / 2.0, self.lon_span() / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_view_contains_center() {
        let view = MapView::initial();
        assert_eq!(view.zoom, 13);
        assert_eq!(view.center, GeoPoint::new(24.8949, 91.8687));
        assert!(view.bounds().contains(view.center));
    }

    #[test]
    fn each_zoom_level_halves_the_span() {
        let center = GeoPoint::new(24.8949, 91.8687);
        let z13 = MapView::new(center, 13);
        let z14 = MapView::new(center, 14);
        assert!((z13.lon_span() / z14.lon_span() - 2.0).abs() < 1e-12);
        assert!((z13.lat_span() / z14.lat_span() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn heatmap_view_holds_all_jittered_samples() {
        let view = MapView::focused_on(GeoPoint::new(24.9, 91.87));
        let b = view.bounds();
        assert!(b.contains(GeoPoint::new(24.91, 91.88)));
        assert!(b.contains(GeoPoint::new(24.89, 91.86)));
    }
}
