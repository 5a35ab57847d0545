#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::Sampler;
pub use app::App;
pub use domain::{Direction, GeoPoint};
pub use engine::{ControllerState, InteractionController, LocationSelected, TransitionOutcome};
pub use models::{DirectionalProbability, HeatSample, Prediction};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed the prediction RNG for a reproducible session (default: OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Main application entry point - creates the GUI app.
/// Fails only if the sampling configuration is invalid.
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args).inspect_err(|err| log::error!("Failed to start: {:#}", err))
}
