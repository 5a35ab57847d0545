//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- MAP CANVAS ---
    pub map_background_color: Color32,
    pub graticule_color: Color32,
    pub graticule_width: f32,
    /// Ring drawn on the selection map at the current selection
    pub selection_ring_color: Color32,
    pub selection_ring_radius: f32,

    // --- MARKER ---
    pub marker_color: Color32,
    pub marker_outline_color: Color32,
    pub marker_radius: f32,

    // --- HEAT LAYER ---
    /// Gradient stops, matched 1:1 with heat_gradient_domain
    pub heat_gradient_colors: &'static [&'static str],
    pub heat_gradient_domain: &'static [f32],
    /// Point radius and blur in screen pixels (leaflet.heat semantics)
    pub heat_radius_px: f64,
    pub heat_blur_px: f64,
    /// Raster resolution of the heat grid, cells per axis
    pub heat_grid_cells: usize,
    /// Cells under this normalized heat are not drawn
    pub heat_floor: f64,
    pub heat_min_opacity: f32,
    pub heat_max_opacity: f32,

    // --- BAR CHART ---
    pub bar_color: Color32,
    pub bar_highlight_color: Color32,
    pub bar_width: f64,
    pub chart_height: f32,

    // --- SEMANTIC COLORS ---
    pub color_success: Color32,
    pub color_info: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    map_background_color: Color32::from_rgb(242, 242, 240), // "positron" light grey
    graticule_color: Color32::from_rgb(200, 200, 200),
    graticule_width: 1.0,
    selection_ring_color: Color32::from_rgb(255, 0, 0),
    selection_ring_radius: 9.0,

    marker_color: Color32::from_rgb(214, 62, 42), // Folium "red" icon
    marker_outline_color: Color32::WHITE,
    marker_radius: 7.0,

    // leaflet.heat default palette
    heat_gradient_colors: &["blue", "cyan", "lime", "yellow", "red"],
    heat_gradient_domain: &[0.4, 0.6, 0.7, 0.8, 1.0],
    heat_radius_px: 18.0,
    heat_blur_px: 25.0,
    heat_grid_cells: 64,
    heat_floor: 0.05,
    heat_min_opacity: 0.05,
    heat_max_opacity: 0.8,

    bar_color: Color32::from_rgb(41, 128, 185),
    bar_highlight_color: Color32::from_rgb(255, 165, 0),
    bar_width: 0.6,
    chart_height: 260.0,

    color_success: Color32::from_rgb(46, 160, 67),
    color_info: Color32::from_rgb(52, 152, 219),
    color_text_neutral: Color32::WHITE,
    color_text_subdued: Color32::GRAY,
};
