use std::fmt;

use crate::{
    domain::GeoPoint,
    models::{DirectionalProbability, HeatSample},
};

/// Everything derived from one selection. Built and replaced as a unit, so the
/// chart and heatmap can never show data for a different point than `point`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub point: GeoPoint,
    pub probabilities: DirectionalProbability,
    pub heat_samples: Vec<HeatSample>,
    /// Increments on every regeneration. Renderers key their caches on it.
    pub generation: u64,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} @ ({}) most likely {} [{} heat samples]",
            self.generation,
            self.point,
            self.probabilities.most_likely(),
            self.heat_samples.len()
        )
    }
}
