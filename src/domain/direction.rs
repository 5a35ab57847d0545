use strum_macros::{Display, EnumIter};

/// Compass direction of predicted movement.
/// Declaration order is the order the Dirichlet coordinates are assigned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Ord, PartialOrd)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const COUNT: usize = 4;

    pub const ALL: [Direction; Self::COUNT] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn iteration_order_matches_index() {
        for (i, dir) in Direction::iter().enumerate() {
            assert_eq!(dir.index(), i);
            assert_eq!(Direction::ALL[i], dir);
        }
    }

    #[test]
    fn display_names() {
        let names: Vec<String> = Direction::iter().map(|d| d.to_string()).collect();
        assert_eq!(names, ["North", "South", "East", "West"]);
    }
}
