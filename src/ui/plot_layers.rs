use eframe::egui::Stroke;

use egui_plot::{Line, LineStyle, MarkerShape, PlotPoints, PlotUi, Points, Polygon};

use crate::config::{MAP_CONFIG, PLOT_CONFIG};
use crate::domain::MapView;
use crate::models::Prediction;
use crate::ui::ui_map_view::HeatLayerCache;
use crate::ui::ui_text::UI_TEXT;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub view: &'a MapView,
    pub prediction: Option<&'a Prediction>,
    pub heat: Option<&'a HeatLayerCache>,
}

/// A standardized layer in the map stack.
pub trait MapLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. GRATICULE (stands in for the basemap)
// ============================================================================
pub struct GraticuleLayer;

impl MapLayer for GraticuleLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        // Overshoot the view so panning does not reveal line ends
        let b = ctx.view.bounds();
        let (lat_pad, lon_pad) = (b.lat_span(), b.lon_span());
        let divisions = MAP_CONFIG.graticule_divisions.max(1);
        let color = PLOT_CONFIG.graticule_color;

        for i in 0..=divisions {
            let t = i as f64 / divisions as f64;
            let lat = b.min_lat + t * b.lat_span();
            let lon = b.min_lon + t * b.lon_span();

            plot_ui.line(
                Line::new("", PlotPoints::new(vec![[b.min_lon - lon_pad, lat], [b.max_lon + lon_pad, lat]]))
                    .color(color)
                    .width(PLOT_CONFIG.graticule_width)
                    .style(LineStyle::Dashed { length: 4.0 }),
            );
            plot_ui.line(
                Line::new("", PlotPoints::new(vec![[lon, b.min_lat - lat_pad], [lon, b.max_lat + lat_pad]]))
                    .color(color)
                    .width(PLOT_CONFIG.graticule_width)
                    .style(LineStyle::Dashed { length: 4.0 }),
            );
        }
    }
}

// ============================================================================
// 2. HEAT LAYER
// ============================================================================
pub struct HeatLayer;

impl MapLayer for HeatLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(heat) = ctx.heat else { return };

        for cell in &heat.cells {
            let b = cell.bounds;
            let points = PlotPoints::new(vec![
                [b.min_lon, b.min_lat],
                [b.max_lon, b.min_lat],
                [b.max_lon, b.max_lat],
                [b.min_lon, b.max_lat],
            ]);
            plot_ui.polygon(
                Polygon::new(&UI_TEXT.label_heat_layer, points)
                    .fill_color(cell.color)
                    .stroke(Stroke::NONE),
            );
        }
    }
}

// ============================================================================
// 3. MARKER (selected point, heatmap view)
// ============================================================================
pub struct MarkerLayer;

impl MapLayer for MarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(prediction) = ctx.prediction else { return };
        let at = vec![prediction.point.to_plot()];

        // Outline first so the fill sits on top
        plot_ui.points(
            Points::new("", at.clone())
                .shape(MarkerShape::Circle)
                .radius(PLOT_CONFIG.marker_radius + 2.0)
                .filled(true)
                .color(PLOT_CONFIG.marker_outline_color),
        );
        plot_ui.points(
            Points::new(&UI_TEXT.label_marker, at)
                .shape(MarkerShape::Circle)
                .radius(PLOT_CONFIG.marker_radius)
                .filled(true)
                .color(PLOT_CONFIG.marker_color),
        );
    }
}

// ============================================================================
// 4. SELECTION RING (selection map)
// ============================================================================
pub struct SelectionRingLayer;

impl MapLayer for SelectionRingLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(prediction) = ctx.prediction else { return };
        plot_ui.points(
            Points::new(&UI_TEXT.label_selection_ring, vec![prediction.point.to_plot()])
                .shape(MarkerShape::Circle)
                .radius(PLOT_CONFIG.selection_ring_radius)
                .filled(false)
                .color(PLOT_CONFIG.selection_ring_color),
        );
        plot_ui.points(
            Points::new("", vec![prediction.point.to_plot()])
                .shape(MarkerShape::Plus)
                .radius(PLOT_CONFIG.selection_ring_radius * 0.6)
                .color(PLOT_CONFIG.selection_ring_color),
        );
    }
}
