use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub success_fill: Color32,
    pub info_fill: Color32,
}

#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Content column width ("centered" page layout)
    pub column_width: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(200, 200, 200),
        heading: Color32::WHITE,
        central_panel: Color32::from_rgb(14, 17, 23),
        success_fill: Color32::from_rgb(23, 54, 33),
        info_fill: Color32::from_rgb(23, 45, 67),
    },
    column_width: 760.0,
};

impl UiConfig {
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 12),
            ..Default::default()
        }
    }

    /// Rounded box behind success/info messages
    pub fn banner_frame(&self, fill: Color32) -> Frame {
        Frame {
            fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(10),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }

    /// Background behind a map canvas
    pub fn map_frame(&self, fill: Color32) -> Frame {
        Frame {
            fill,
            stroke: Stroke::new(1.0, Color32::from_gray(60)),
            inner_margin: Margin::same(0),
            ..Default::default()
        }
    }
}
