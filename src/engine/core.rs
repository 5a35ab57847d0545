use {
    anyhow::Result,
    rand::{Rng, SeedableRng, rngs::StdRng},
};

use crate::{
    analysis::Sampler,
    config::DF,
    engine::{ControllerState, LocationSelected, TransitionOutcome},
    models::Prediction,
};

/// Result of feeding one event to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ControllerState,
    pub outcome: TransitionOutcome,
}

/// The whole decision logic: `(state, event) -> state`.
///
/// A click on the stored point returns the state untouched. Any other click
/// (or the first one) replaces the selection and draws a fresh prediction for
/// it from `rng`. Coordinates are compared exactly and never validated.
pub fn apply<R: Rng + ?Sized>(
    state: ControllerState,
    event: &LocationSelected,
    sampler: &Sampler,
    rng: &mut R,
) -> Transition {
    let point = event.point();
    if state.selected_point() == Some(point) {
        return Transition {
            state,
            outcome: TransitionOutcome::Unchanged,
        };
    }

    let (probabilities, heat_samples) = sampler.draw(point, rng);
    let prediction = Prediction {
        point,
        probabilities,
        heat_samples,
        generation: state.generation() + 1,
    };
    Transition {
        state: ControllerState::HasSelection(prediction),
        outcome: TransitionOutcome::Regenerated,
    }
}

/// Owns the session: current state, the sampler, and the random source.
pub struct InteractionController {
    state: ControllerState,
    sampler: Sampler,
    rng: StdRng,
}

impl InteractionController {
    /// `seed: None` seeds from OS entropy, so runs are not reproducible.
    pub fn new(sampler: Sampler, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            state: ControllerState::default(),
            sampler,
            rng,
        }
    }

    pub fn from_config(seed: Option<u64>) -> Result<Self> {
        Ok(Self::new(Sampler::from_config()?, seed))
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    pub fn handle(&mut self, event: LocationSelected) -> TransitionOutcome {
        let current = std::mem::take(&mut self.state);
        let Transition { state, outcome } = apply(current, &event, &self.sampler, &mut self.rng);
        self.state = state;

        #[cfg(debug_assertions)]
        if DF.log_selection {
            match (outcome, self.state.prediction()) {
                (TransitionOutcome::Regenerated, Some(prediction)) => {
                    log::info!("SELECTION SET: {}", prediction)
                }
                _ => log::info!("Same point clicked again ({}, {}); keeping prediction", event.lat, event.lon),
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, GeoPoint};

    fn controller(seed: u64) -> InteractionController {
        InteractionController::from_config(Some(seed)).expect("shipped config is valid")
    }

    #[test]
    fn nothing_to_show_before_first_click() {
        let c = controller(1);
        assert_eq!(*c.state(), ControllerState::NoSelection);
        assert!(c.state().prediction().is_none());
        assert!(c.state().selected_point().is_none());
    }

    #[test]
    fn first_click_scenario() {
        let mut c = controller(42);
        let outcome = c.handle(LocationSelected::new(24.9000, 91.8700));
        assert_eq!(outcome, TransitionOutcome::Regenerated);

        let prediction = c.state().prediction().expect("selection made");
        assert_eq!(prediction.point, GeoPoint::new(24.9000, 91.8700));
        assert_eq!(prediction.generation, 1);

        let keys: Vec<Direction> = prediction.probabilities.iter().map(|(d, _)| d).collect();
        assert_eq!(keys, vec![Direction::North, Direction::South, Direction::East, Direction::West]);
        assert!((prediction.probabilities.total() - 1.0).abs() < 1e-9);
        assert!(prediction.probabilities.iter().all(|(_, p)| p >= 0.0));

        assert_eq!(prediction.heat_samples.len(), 80);
        for s in &prediction.heat_samples {
            assert!(s.lat() >= 24.8900 - 1e-9 && s.lat() <= 24.9100 + 1e-9);
            assert!(s.lon() >= 91.8600 - 1e-9 && s.lon() <= 91.8800 + 1e-9);
            assert!((0.3..=1.0).contains(&s.intensity));
        }
    }

    #[test]
    fn repeated_click_is_idempotent() {
        let mut c = controller(3);
        c.handle(LocationSelected::new(10.0, 20.0));
        let before = c.state().clone();

        for _ in 0..5 {
            assert_eq!(c.handle(LocationSelected::new(10.0, 20.0)), TransitionOutcome::Unchanged);
        }
        assert_eq!(*c.state(), before);
    }

    #[test]
    fn new_point_replaces_everything() {
        let mut c = controller(5);
        c.handle(LocationSelected::new(10.0, 20.0));
        let first = c.state().prediction().cloned().expect("first");

        let outcome = c.handle(LocationSelected::new(-5.0, 100.0));
        assert_eq!(outcome, TransitionOutcome::Regenerated);
        let second = c.state().prediction().cloned().expect("second");

        assert_eq!(second.point, GeoPoint::new(-5.0, 100.0));
        assert_eq!(second.generation, first.generation + 1);
        assert_ne!(second.probabilities, first.probabilities);
        // No heat sample carried over from the old point
        assert!(
            second
                .heat_samples
                .iter()
                .all(|s| s.point.within(&second.point, 0.01 + 1e-9))
        );
    }

    #[test]
    fn going_back_to_an_old_point_regenerates() {
        let mut c = controller(9);
        c.handle(LocationSelected::new(1.0, 1.0));
        let first = c.state().prediction().cloned().expect("first");
        c.handle(LocationSelected::new(2.0, 2.0));
        c.handle(LocationSelected::new(1.0, 1.0));
        let third = c.state().prediction().cloned().expect("third");
        assert_eq!(third.point, first.point);
        assert_eq!(third.generation, 3);
        assert_ne!(third.heat_samples, first.heat_samples);
    }

    #[test]
    fn any_coordinates_are_accepted() {
        let mut c = controller(8);
        assert_eq!(c.handle(LocationSelected::new(123.0, -400.0)), TransitionOutcome::Regenerated);
        assert_eq!(c.state().selected_point(), Some(GeoPoint::new(123.0, -400.0)));
    }

    #[test]
    fn apply_is_a_pure_transition() {
        let sampler = Sampler::from_config().expect("valid");
        let mut rng = StdRng::seed_from_u64(17);
        let event = LocationSelected::new(24.9, 91.87);

        let t1 = apply(ControllerState::NoSelection, &event, &sampler, &mut rng);
        assert_eq!(t1.outcome, TransitionOutcome::Regenerated);

        // Unchanged transitions consume no randomness and hand the state back as-is
        let t2 = apply(t1.state.clone(), &event, &sampler, &mut rng);
        assert_eq!(t2.outcome, TransitionOutcome::Unchanged);
        assert_eq!(t2.state, t1.state);
    }

    #[test]
    fn same_seed_same_predictions() {
        let events = [
            LocationSelected::new(24.9, 91.87),
            LocationSelected::new(24.9, 91.87),
            LocationSelected::new(24.91, 91.86),
        ];
        let mut a = controller(99);
        let mut b = controller(99);
        for e in events {
            a.handle(e);
            b.handle(e);
        }
        assert_eq!(a.state(), b.state());
    }
}
