use {
    crate::{
        config::PLOT_CONFIG,
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{Color32, RichText, Ui},
};

/// colorgrad -> egui, alpha forced opaque
pub(crate) fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgb(rgba8[0], rgba8[1], rgba8[2])
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

pub(crate) trait UiStyleExt {
    fn section_heading(&mut self, text: impl Into<String>);
    fn label_subdued(&mut self, text: impl Into<String>);
    fn success_banner(&mut self, text: impl Into<String>);
    fn info_banner(&mut self, text: impl Into<String>);
    fn intro_paragraph(&mut self);
}

impl UiStyleExt for Ui {
    fn section_heading(&mut self, text: impl Into<String>) {
        self.add_space(12.0);
        self.label(
            RichText::new(text.into())
                .size(18.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        self.add_space(6.0);
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn success_banner(&mut self, text: impl Into<String>) {
        UI_CONFIG
            .banner_frame(UI_CONFIG.colors.success_fill)
            .show(self, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(text.into()).color(PLOT_CONFIG.color_success));
            });
    }

    fn info_banner(&mut self, text: impl Into<String>) {
        UI_CONFIG
            .banner_frame(UI_CONFIG.colors.info_fill)
            .show(self, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(text.into()).color(PLOT_CONFIG.color_info));
            });
    }

    /// Lead paragraph with the bold middle phrase, then the usage hint.
    fn intro_paragraph(&mut self) {
        self.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label(RichText::new(&UI_TEXT.intro_lead).color(UI_CONFIG.colors.label));
            ui.label(
                RichText::new(&UI_TEXT.intro_emphasis)
                    .strong()
                    .color(PLOT_CONFIG.color_text_neutral),
            );
            ui.label(RichText::new(&UI_TEXT.intro_tail).color(UI_CONFIG.colors.label));
        });
        self.label(RichText::new(&UI_TEXT.intro_hint).color(UI_CONFIG.colors.label));
    }
}
