use crate::domain::Direction;

/// Probability of movement in each compass direction.
/// Values are non-negative and sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalProbability {
    values: [f64; Direction::COUNT],
}

impl DirectionalProbability {
    /// Builds the distribution from raw non-negative weights, normalizing them onto the simplex.
    /// Coordinates are assigned to directions in `Direction::ALL` order.
    /// A degenerate (zero or non-finite) total falls back to the uniform split.
    pub fn from_weights(weights: [f64; Direction::COUNT]) -> Self {
        let total: f64 = weights.iter().map(|w| w.max(0.0)).sum();
        if !total.is_finite() || total <= f64::EPSILON {
            return Self::uniform();
        }
        Self {
            values: weights.map(|w| w.max(0.0) / total),
        }
    }

    pub fn uniform() -> Self {
        Self {
            values: [1.0 / Direction::COUNT as f64; Direction::COUNT],
        }
    }

    pub fn get(&self, direction: Direction) -> f64 {
        self.values[direction.index()]
    }

    /// (direction, probability) pairs in N, S, E, W order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, f64)> + '_ {
        Direction::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn most_likely(&self) -> Direction {
        self.iter()
            .fold((Direction::North, f64::MIN), |best, (d, p)| {
                if p > best.1 { (d, p) } else { best }
            })
            .0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_normalized() {
        let p = DirectionalProbability::from_weights([1.0, 1.0, 2.0, 4.0]);
        assert!((p.total() - 1.0).abs() < 1e-12);
        assert!((p.get(Direction::West) - 0.5).abs() < 1e-12);
        assert_eq!(p.most_likely(), Direction::West);
    }

    #[test]
    fn zero_weights_fall_back_to_uniform() {
        let p = DirectionalProbability::from_weights([0.0; 4]);
        assert_eq!(p, DirectionalProbability::uniform());
        assert!(p.iter().all(|(_, v)| (v - 0.25).abs() < 1e-12));
    }

    #[test]
    fn iteration_covers_all_four_directions_once() {
        let p = DirectionalProbability::uniform();
        let dirs: Vec<Direction> = p.iter().map(|(d, _)| d).collect();
        assert_eq!(dirs, Direction::ALL.to_vec());
    }
}
