use eframe::egui::{CentralPanel, Context, RichText, ScrollArea};

use crate::{
    App,
    domain::MapView,
    engine::LocationSelected,
    ui::{
        GraticuleLayer, HeatLayer, HeatLayerCache, MapCanvas, MapLayer, MarkerLayer,
        SelectionRingLayer, UI_CONFIG, UI_TEXT, UiStyleExt, render_probability_chart,
    },
};

impl App {
    /// Renders the page and returns the location the user clicked this frame, if any.
    pub(crate) fn render_central_panel(&mut self, ctx: &Context) -> Option<LocationSelected> {
        let mut clicked = None;

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(UI_CONFIG.column_width);

                        ui.label(
                            RichText::new(&UI_TEXT.app_title)
                                .size(26.0)
                                .strong()
                                .color(UI_CONFIG.colors.heading),
                        );
                        ui.add_space(6.0);
                        ui.intro_paragraph();

                        ui.section_heading(&UI_TEXT.heading_select);
                        let selection_layers: [&dyn MapLayer; 2] =
                            [&GraticuleLayer, &SelectionRingLayer];
                        let prediction = self.controller.state().prediction();
                        clicked = MapCanvas::new(MapView::initial()).show(
                            ui,
                            "selection_map",
                            &selection_layers,
                            prediction,
                            None,
                        );
                        ui.label_subdued(&UI_TEXT.map_hint);
                        ui.add_space(8.0);

                        let Some(prediction) = prediction else {
                            ui.info_banner(&UI_TEXT.info_click_prompt);
                            return;
                        };

                        ui.success_banner(format!(
                            "{} {}",
                            UI_TEXT.label_selected_location, prediction.point
                        ));

                        ui.section_heading(&UI_TEXT.heading_probabilities);
                        render_probability_chart(ui, &prediction.probabilities);

                        ui.section_heading(&UI_TEXT.heading_heatmap);
                        let view = MapView::focused_on(prediction.point);
                        let heat = HeatLayerCache::refresh(
                            &mut self.heat_cache,
                            prediction,
                            &view,
                            &self.heat_palette,
                        );
                        let heatmap_layers: [&dyn MapLayer; 3] =
                            [&GraticuleLayer, &HeatLayer, &MarkerLayer];
                        // New generation -> new plot id -> camera snaps to the new point
                        let heatmap_click = MapCanvas::new(view).show(
                            ui,
                            ("heatmap", prediction.generation),
                            &heatmap_layers,
                            Some(prediction),
                            Some(heat),
                        );
                        clicked = clicked.or(heatmap_click);
                    });
                });
            });

        clicked
    }
}
