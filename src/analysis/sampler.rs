use {
    anyhow::{Context, Result},
    rand::{Rng, distributions::Distribution},
    statrs::distribution::Gamma,
};

use crate::{
    config::{DF, SAMPLING},
    domain::{Direction, GeoPoint},
    models::{DirectionalProbability, HeatSample},
};

/// Draws the synthetic prediction for a point.
///
/// The direction split is a symmetric Dirichlet draw, built the standard way:
/// one Gamma(alpha, 1) variate per direction, normalized by their sum.
/// With alpha = 1 this is a uniform point on the 3-simplex.
#[derive(Debug, Clone)]
pub struct Sampler {
    concentration: Gamma,
    heat_sample_count: usize,
    jitter_deg: f64,
    intensity_min: f64,
    intensity_max: f64,
}

impl Sampler {
    pub fn new(
        dirichlet_alpha: f64,
        heat_sample_count: usize,
        jitter_deg: f64,
        intensity_range: (f64, f64),
    ) -> Result<Self> {
        let concentration = Gamma::new(dirichlet_alpha, 1.0)
            .with_context(|| format!("invalid Dirichlet concentration {}", dirichlet_alpha))?;
        anyhow::ensure!(
            jitter_deg >= 0.0 && jitter_deg.is_finite(),
            "jitter must be a finite non-negative number of degrees, got {}",
            jitter_deg
        );
        let (intensity_min, intensity_max) = intensity_range;
        anyhow::ensure!(
            intensity_min <= intensity_max,
            "empty intensity range {}..={}",
            intensity_min,
            intensity_max
        );
        Ok(Self {
            concentration,
            heat_sample_count,
            jitter_deg,
            intensity_min,
            intensity_max,
        })
    }

    /// Sampler with the shipped parameters (alpha 1, 80 samples, ±0.01 deg, intensity 0.3..=1.0).
    pub fn from_config() -> Result<Self> {
        Self::new(
            SAMPLING.dirichlet_alpha,
            SAMPLING.heat_sample_count,
            SAMPLING.jitter_deg,
            (SAMPLING.intensity_min, SAMPLING.intensity_max),
        )
    }

    pub fn heat_sample_count(&self) -> usize {
        self.heat_sample_count
    }

    pub fn jitter_deg(&self) -> f64 {
        self.jitter_deg
    }

    pub fn sample_directions<R: Rng + ?Sized>(&self, rng: &mut R) -> DirectionalProbability {
        let mut weights = [0.0; Direction::COUNT];
        for w in weights.iter_mut() {
            *w = self.concentration.sample(rng);
        }
        DirectionalProbability::from_weights(weights)
    }

    pub fn sample_heat<R: Rng + ?Sized>(&self, center: GeoPoint, rng: &mut R) -> Vec<HeatSample> {
        let j = self.jitter_deg;
        (0..self.heat_sample_count)
            .map(|_| {
                let lat = center.lat + rng.gen_range(-j..=j);
                let lon = center.lon + rng.gen_range(-j..=j);
                let intensity = rng.gen_range(self.intensity_min..=self.intensity_max);
                HeatSample::new(lat, lon, intensity)
            })
            .collect()
    }

    /// Both artifacts for one selection, directions first.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        center: GeoPoint,
        rng: &mut R,
    ) -> (DirectionalProbability, Vec<HeatSample>) {
        let probabilities = self.sample_directions(rng);
        let heat = self.sample_heat(center, rng);

        #[cfg(debug_assertions)]
        if DF.log_sampling {
            let mean_intensity =
                heat.iter().map(|s| s.intensity).sum::<f64>() / heat.len().max(1) as f64;
            log::info!(
                "Sampled @ ({}): N {:.3} S {:.3} E {:.3} W {:.3} | {} heat samples, mean intensity {:.3}",
                center,
                probabilities.get(Direction::North),
                probabilities.get(Direction::South),
                probabilities.get(Direction::East),
                probabilities.get(Direction::West),
                heat.len(),
                mean_intensity
            );
        }

        (probabilities, heat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn sampler() -> Sampler {
        Sampler::from_config().expect("shipped sampling config is valid")
    }

    #[test]
    fn direction_split_is_on_the_simplex() {
        let s = sampler();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = s.sample_directions(&mut rng);
            assert!(p.iter().all(|(_, v)| v >= 0.0 && v <= 1.0));
            assert!((p.total() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn heat_samples_stay_in_the_jitter_box() {
        let s = sampler();
        let mut rng = StdRng::seed_from_u64(11);
        let center = GeoPoint::new(-33.86, 151.21);
        let heat = s.sample_heat(center, &mut rng);
        assert_eq!(heat.len(), 80);
        for h in &heat {
            assert!(h.point.within(&center, 0.01 + 1e-12));
            assert!((0.3..=1.0).contains(&h.intensity));
        }
    }

    #[test]
    fn uniform_dirichlet_has_quarter_means() {
        let s = sampler();
        let mut rng = StdRng::seed_from_u64(2024);
        let n = 20_000;
        let mut sums = [0.0; Direction::COUNT];
        for _ in 0..n {
            for (d, v) in s.sample_directions(&mut rng).iter() {
                sums[d.index()] += v;
            }
        }
        for total in sums {
            assert!((total / n as f64 - 0.25).abs() < 0.01);
        }
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(Sampler::new(0.0, 80, 0.01, (0.3, 1.0)).is_err());
        assert!(Sampler::new(1.0, 80, -0.01, (0.3, 1.0)).is_err());
        assert!(Sampler::new(1.0, 80, 0.01, (1.0, 0.3)).is_err());
    }

    #[test]
    fn zero_jitter_pins_samples_to_center() {
        let s = Sampler::new(1.0, 5, 0.0, (0.5, 0.5)).expect("valid");
        let mut rng = StdRng::seed_from_u64(1);
        let center = GeoPoint::new(1.0, 2.0);
        assert!(s.sample_heat(center, &mut rng).iter().all(|h| h.point == center && h.intensity == 0.5));
    }
}
