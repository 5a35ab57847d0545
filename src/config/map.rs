//! Map view configuration

pub struct MapConfig {
    /// Where the selection map opens, (lat, lon) in degrees
    pub initial_center: (f64, f64),
    pub initial_zoom: u8,
    /// Zoom of the heatmap view (centered on the selected point)
    pub result_zoom: u8,
    /// Canvas size in points
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Slippy-map tile edge in pixels. Together with canvas_width this fixes degrees per zoom level.
    pub tile_size_px: f64,
    /// Graticule lines per axis
    pub graticule_divisions: u32,
}

pub const MAP_CONFIG: MapConfig = MapConfig {
    initial_center: (24.8949, 91.8687), // Sylhet
    initial_zoom: 13,
    result_zoom: 14,
    canvas_width: 750.0,
    canvas_height: 500.0,
    tile_size_px: 256.0,
    graticule_divisions: 6,
};
