use std::sync::LazyLock;

// egui's bundled emoji font covers these
pub const ICON_SEARCH: &str = "🔍";
pub const ICON_MAP: &str = "🗺";
pub const ICON_CHART: &str = "📊";
pub const ICON_FIRE: &str = "🔥";
pub const ICON_PIN: &str = "📍";
pub const ICON_INFO: &str = "ℹ";

pub struct UiText {
    pub window_title: String,
    pub app_title: String,
    pub intro_lead: String,
    pub intro_emphasis: String,
    pub intro_tail: String,
    pub intro_hint: String,

    // --- SECTION HEADINGS ---
    pub heading_select: String,
    pub heading_probabilities: String,
    pub heading_heatmap: String,

    // --- BANNERS ---
    pub label_selected_location: String,
    pub info_click_prompt: String,
    pub map_hint: String,

    // --- PLOT LABELS ---
    pub plot_lat_axis: String,
    pub plot_lon_axis: String,
    pub chart_direction_axis: String,
    pub chart_probability_axis: String,
    pub chart_series_name: String,
    pub label_marker: String,
    pub label_heat_layer: String,
    pub label_selection_ring: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    window_title: "Sylhet Fugitive Movement Predictor".to_string(),
    app_title: format!("{} Sylhet Fugitive Movement Prediction Framework", ICON_SEARCH),
    intro_lead: "This prototype visualizes ".to_string(),
    intro_emphasis: "likely fugitive positions and movements".to_string(),
    intro_tail: " around Sylhet.".to_string(),
    intro_hint: "Click any point on the map to simulate prediction probabilities.".to_string(),

    heading_select: format!("{} Select a Location", ICON_MAP),
    heading_probabilities: format!("{} Predicted Movement Probabilities", ICON_CHART),
    heading_heatmap: format!("{} Probability Heatmap (Stable until new click)", ICON_FIRE),

    label_selected_location: format!("{} Selected location:", ICON_PIN),
    info_click_prompt: format!(
        "{} Click on the map above to generate probability predictions.",
        ICON_INFO
    ),
    map_hint: "Drag to pan, ctrl + scroll to zoom, double-click to reset the view.".to_string(),

    plot_lat_axis: "Latitude".to_string(),
    plot_lon_axis: "Longitude".to_string(),
    chart_direction_axis: "Direction".to_string(),
    chart_probability_axis: "Probability".to_string(),
    chart_series_name: "Probability".to_string(),
    label_marker: "Selected Point".to_string(),
    label_heat_layer: "Heat".to_string(),
    label_selection_ring: "Current selection".to_string(),
});
