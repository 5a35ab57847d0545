use eframe::egui::Ui;
use egui_plot::{AxisHints, Bar, BarChart, GridMark, HPlacement, Plot, VPlacement};

use crate::config::PLOT_CONFIG;
use crate::domain::Direction;
use crate::models::DirectionalProbability;
use crate::ui::ui_text::UI_TEXT;

/// Bar x position for a direction. Bars sit on integers 0..4.
fn bar_position(direction: Direction) -> f64 {
    Direction::ALL
        .iter()
        .position(|d| *d == direction)
        .unwrap_or_default() as f64
}

/// Axis label for a bar position, empty between bars.
fn direction_label(x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    Direction::ALL
        .get(rounded as usize)
        .map(|d| d.to_string())
        .unwrap_or_default()
}

fn build_bars(probabilities: &DirectionalProbability) -> Vec<Bar> {
    let top = probabilities.most_likely();
    probabilities
        .iter()
        .map(|(direction, p)| {
            let color = if direction == top {
                PLOT_CONFIG.bar_highlight_color
            } else {
                PLOT_CONFIG.bar_color
            };
            Bar::new(bar_position(direction), p)
                .name(direction.to_string())
                .fill(color)
                .width(PLOT_CONFIG.bar_width)
        })
        .collect()
}

/// Vertical bar chart, one bar per direction.
pub fn render_probability_chart(ui: &mut Ui, probabilities: &DirectionalProbability) {
    let bars = build_bars(probabilities);

    let x_axis = AxisHints::new_x()
        .label(UI_TEXT.chart_direction_axis.as_str())
        .formatter(|mark, _range| direction_label(mark.value))
        .placement(VPlacement::Bottom);
    let y_axis = AxisHints::new_y()
        .label(UI_TEXT.chart_probability_axis.as_str())
        .formatter(|mark, _range| format!("{:.0}%", mark.value * 100.0))
        .placement(HPlacement::Left);

    Plot::new("direction_probabilities")
        .height(PLOT_CONFIG.chart_height)
        .custom_x_axes(vec![x_axis])
        .custom_y_axes(vec![y_axis])
        .x_grid_spacer(|_input| {
            (0..Direction::COUNT)
                .map(|i| GridMark {
                    value: i as f64,
                    step_size: 1.0,
                })
                .collect()
        })
        .include_x(-0.5)
        .include_x(Direction::COUNT as f64 - 0.5)
        .include_y(0.0)
        .include_y(1.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{}: {:.1}%", name, value.y * 100.0)
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(UI_TEXT.chart_series_name.as_str(), bars));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_bar_per_direction_in_order() {
        let p = DirectionalProbability::from_weights([0.1, 0.2, 0.3, 0.4]);
        let bars = build_bars(&p);
        assert_eq!(bars.len(), 4);
        for (i, bar) in bars.iter().enumerate() {
            assert_eq!(bar.argument, i as f64);
        }
        assert!((bars[3].value - 0.4).abs() < 1e-12);
    }

    #[test]
    fn labels_only_on_bar_centers() {
        assert_eq!(direction_label(0.0), "North");
        assert_eq!(direction_label(3.0), "West");
        assert_eq!(direction_label(1.5), "");
        assert_eq!(direction_label(4.0), "");
        assert_eq!(direction_label(-1.0), "");
    }
}
