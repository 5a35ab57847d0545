use std::hash::Hash;

use colorgrad::Gradient;
use eframe::egui::{Color32, Ui};
use egui_plot::{AxisHints, HPlacement, Plot, VPlacement};

use crate::config::{MAP_CONFIG, PLOT_CONFIG, SAMPLING};
use crate::domain::{GeoBounds, MapView};
use crate::engine::LocationSelected;
use crate::models::{HeatGrid, Prediction};
use crate::ui::plot_layers::{LayerContext, MapLayer};
use crate::ui::styles::{apply_opacity, to_egui_color};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::UI_CONFIG;
use crate::utils::remap;

/// Heat-to-colour ramp. Falls back to the marker colour if the gradient can't be built.
pub struct HeatPalette {
    gradient: Option<colorgrad::LinearGradient>,
}

impl HeatPalette {
    pub fn new() -> Self {
        let gradient = colorgrad::GradientBuilder::new()
            .html_colors(PLOT_CONFIG.heat_gradient_colors)
            .domain(PLOT_CONFIG.heat_gradient_domain)
            .build::<colorgrad::LinearGradient>();
        match gradient {
            Ok(g) => Self { gradient: Some(g) },
            Err(err) => {
                log::warn!("Heat gradient unavailable ({}); using flat colour", err);
                Self { gradient: None }
            }
        }
    }

    /// Colour for normalized heat in [0, 1], opacity ramped the leaflet.heat way.
    pub fn color_at(&self, heat: f64) -> Color32 {
        let t = heat.clamp(0.0, 1.0);
        let base = match &self.gradient {
            Some(g) => to_egui_color(g.at(t as f32)),
            None => PLOT_CONFIG.marker_color,
        };
        let opacity = remap(
            t,
            0.0,
            1.0,
            PLOT_CONFIG.heat_min_opacity as f64,
            PLOT_CONFIG.heat_max_opacity as f64,
        );
        apply_opacity(base, opacity as f32)
    }
}

impl Default for HeatPalette {
    fn default() -> Self {
        Self::new()
    }
}

/// A heat cell ready to draw.
#[derive(Clone)]
pub struct ColoredCell {
    pub bounds: GeoBounds,
    pub color: Color32,
}

/// Drawable heat layer for one prediction. Rebuilt only when the generation changes.
#[derive(Clone)]
pub struct HeatLayerCache {
    pub generation: u64,
    pub cells: Vec<ColoredCell>,
}

impl HeatLayerCache {
    pub fn build(prediction: &Prediction, view: &MapView, palette: &HeatPalette) -> Self {
        let grid = HeatGrid::for_selection(
            &prediction.heat_samples,
            prediction.point,
            view,
            SAMPLING.jitter_deg,
        );
        let cells = grid
            .cells()
            .filter(|c| c.heat > PLOT_CONFIG.heat_floor)
            .map(|c| ColoredCell {
                bounds: c.bounds,
                color: palette.color_at(c.heat),
            })
            .collect();
        Self {
            generation: prediction.generation,
            cells,
        }
    }

    /// Returns the cached layer for `prediction`, rebuilding it on a new generation.
    pub fn refresh<'a>(
        cache: &'a mut Option<HeatLayerCache>,
        prediction: &Prediction,
        view: &MapView,
        palette: &HeatPalette,
    ) -> &'a HeatLayerCache {
        let stale = cache
            .as_ref()
            .is_none_or(|c| c.generation != prediction.generation);
        if stale {
            *cache = Some(Self::build(prediction, view, palette));
        }
        cache.get_or_insert_with(|| Self::build(prediction, view, palette))
    }
}

fn degrees_label(value: f64, positive: char, negative: char) -> String {
    let hemi = if value >= 0.0 { positive } else { negative };
    format!("{:.3}°{}", value.abs(), hemi)
}

fn create_lat_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_lat_axis.as_str())
        .formatter(|mark, _range| degrees_label(mark.value, 'N', 'S'))
        .placement(HPlacement::Left)
}

fn create_lon_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_lon_axis.as_str())
        .formatter(|mark, _range| degrees_label(mark.value, 'E', 'W'))
        .placement(VPlacement::Bottom)
}

/// An interactive map canvas: lon on x, lat on y.
pub struct MapCanvas {
    view: MapView,
}

impl MapCanvas {
    pub fn new(view: MapView) -> Self {
        Self { view }
    }

    /// Draws the layer stack and reports a primary click as a location event.
    ///
    /// `id_salt` identifies the plot's memory. Change it to snap the camera back to `view`.
    pub fn show(
        &self,
        ui: &mut Ui,
        id_salt: impl Hash,
        layers: &[&dyn MapLayer],
        prediction: Option<&Prediction>,
        heat: Option<&HeatLayerCache>,
    ) -> Option<LocationSelected> {
        let b = self.view.bounds();
        let view = self.view;

        UI_CONFIG
            .map_frame(PLOT_CONFIG.map_background_color)
            .show(ui, |ui| {
                Plot::new(id_salt)
                    .width(MAP_CONFIG.canvas_width)
                    .height(MAP_CONFIG.canvas_height)
                    .default_x_bounds(b.min_lon, b.max_lon)
                    .default_y_bounds(b.min_lat, b.max_lat)
                    .custom_x_axes(vec![create_lon_axis()])
                    .custom_y_axes(vec![create_lat_axis()])
                    .show_background(false)
                    .show_grid(false)
                    .label_formatter(|name, value| {
                        let coords = format!("{:.5}, {:.5}", value.y, value.x);
                        if name.is_empty() {
                            coords
                        } else {
                            format!("{}\n{}", name, coords)
                        }
                    })
                    .allow_double_click_reset(true)
                    .allow_scroll(false)
                    .show(ui, |plot_ui| {
                        let ctx = LayerContext {
                            view: &view,
                            prediction,
                            heat,
                        };
                        for layer in layers {
                            layer.render(plot_ui, &ctx);
                        }

                        if plot_ui.response().clicked() {
                            plot_ui
                                .pointer_coordinate()
                                .map(|p| LocationSelected::new(p.y, p.x))
                        } else {
                            None
                        }
                    })
                    .inner
            })
            .inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPoint;
    use crate::models::{DirectionalProbability, HeatSample};

    fn prediction(generation: u64) -> Prediction {
        let point = GeoPoint::new(24.9, 91.87);
        Prediction {
            point,
            probabilities: DirectionalProbability::uniform(),
            heat_samples: vec![HeatSample::new(24.9, 91.87, 1.0), HeatSample::new(24.905, 91.865, 0.4)],
            generation,
        }
    }

    #[test]
    fn axis_labels_carry_hemisphere() {
        assert_eq!(degrees_label(24.8949, 'N', 'S'), "24.895°N");
        assert_eq!(degrees_label(-3.5, 'E', 'W'), "3.500°W");
    }

    #[test]
    fn palette_opacity_grows_with_heat() {
        let palette = HeatPalette::new();
        assert!(palette.color_at(1.0).a() > palette.color_at(0.1).a());
    }

    #[test]
    fn heat_cache_rebuilds_only_on_new_generation() {
        let palette = HeatPalette::new();
        let first = prediction(1);
        let view = MapView::focused_on(first.point);
        let mut cache = None;

        let cells = HeatLayerCache::refresh(&mut cache, &first, &view, &palette).cells.len();
        assert!(cells > 0);

        // Same generation: cached cells survive even if the samples were swapped
        let mut tampered = first.clone();
        tampered.heat_samples.clear();
        assert_eq!(HeatLayerCache::refresh(&mut cache, &tampered, &view, &palette).cells.len(), cells);

        let mut next = prediction(2);
        next.heat_samples.clear();
        assert!(HeatLayerCache::refresh(&mut cache, &next, &view, &palette).cells.is_empty());
    }
}
