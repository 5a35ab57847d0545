//! Parameters of the synthetic prediction

pub struct SamplingConfig {
    /// Symmetric Dirichlet concentration for the direction split. 1.0 = uniform on the simplex.
    pub dirichlet_alpha: f64,
    /// Heat samples generated per selection
    pub heat_sample_count: usize,
    /// Max lat/lon offset (degrees) of a heat sample from the selected point
    pub jitter_deg: f64,
    pub intensity_min: f64,
    pub intensity_max: f64,
}

pub const SAMPLING: SamplingConfig = SamplingConfig {
    dirichlet_alpha: 1.0,
    heat_sample_count: 80,
    jitter_deg: 0.01,
    intensity_min: 0.3,
    intensity_max: 1.0,
};
