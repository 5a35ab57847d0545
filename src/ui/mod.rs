mod plot_layers;
mod styles;
mod ui_chart_view;
mod ui_config;
mod ui_map_view;
mod ui_render;
mod ui_text;

pub(crate) use plot_layers::{
    GraticuleLayer, HeatLayer, MapLayer, MarkerLayer, SelectionRingLayer,
};

pub(crate) use styles::UiStyleExt;

pub(crate) use ui_chart_view::render_probability_chart;
pub(crate) use ui_config::UI_CONFIG;
pub use ui_text::UI_TEXT;
pub(crate) use ui_map_view::{HeatLayerCache, HeatPalette, MapCanvas};
