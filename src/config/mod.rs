//! Configuration module for the movement predictor.

mod debug;
mod map;
mod sampling;

// Can't be private because we don't re-export everything in it
pub mod plot;

// Re-export commonly used items
pub use debug::{DF, LOG_PERFORMANCE};
pub use map::MAP_CONFIG;
pub use plot::PLOT_CONFIG;
pub use sampling::SAMPLING;
