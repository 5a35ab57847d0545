mod directional_probability;
mod heat_grid;
mod heat_sample;
mod prediction;

pub use directional_probability::DirectionalProbability;
pub use heat_grid::{HeatCell, HeatGrid};
pub use heat_sample::HeatSample;
pub use prediction::Prediction;
