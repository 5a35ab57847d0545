use {
    anyhow::Result,
    eframe::{
        Frame,
        egui::{Context, Visuals},
    },
};

use crate::{
    Cli,
    config::DF,
    engine::{InteractionController, LocationSelected, TransitionOutcome},
    ui::{HeatLayerCache, HeatPalette, UI_CONFIG},
};

/// Session-lived application state. Nothing here is persisted.
pub struct App {
    pub(crate) controller: InteractionController,
    pub(crate) heat_cache: Option<HeatLayerCache>,
    pub(crate) heat_palette: HeatPalette,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Result<Self> {
        setup_custom_visuals(&cc.egui_ctx);

        if let Some(seed) = args.seed {
            log::info!("Seeding prediction RNG with {}", seed);
        }
        let controller = InteractionController::from_config(args.seed)?;

        Ok(Self {
            controller,
            heat_cache: None,
            heat_palette: HeatPalette::new(),
        })
    }

    /// Feeds a map click to the controller. Drops the heat cache when the prediction changed.
    pub(crate) fn handle_location_selected(&mut self, event: LocationSelected) {
        match self.controller.handle(event) {
            TransitionOutcome::Regenerated => {
                self.heat_cache = None;
            }
            TransitionOutcome::Unchanged => {
                #[cfg(debug_assertions)]
                if DF.log_selection {
                    log::info!("Heat layer kept for generation {}", self.controller.state().generation());
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if let Some(event) = self.render_central_panel(ctx) {
            self.handle_location_selected(event);
            // Show the new prediction without waiting for the next input event
            ctx.request_repaint();
        }
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
