//! Compass headings and the 90° turns between them.

use crate::error::RoverError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four compass directions a rover can face.
///
/// The variants are declared in clockwise order; [`Heading::CYCLE`] relies on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

/// Direction of a 90° spin in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
}

/// A plateau axis, used to tell the caller which coordinate broke a bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Heading {
    /// Headings in clockwise order, starting at North.
    pub const CYCLE: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// Spins 90° in the given direction.
    ///
    /// `Right` is the successor in [`Heading::CYCLE`], `Left` the predecessor.
    pub fn rotate(self, turn: Turn) -> Heading {
        let step = match turn {
            Turn::Right => 1,
            Turn::Left => 3,
        };
        Self::CYCLE[(self.index() + step) % Self::CYCLE.len()]
    }

    /// Grid offset of one forward step. North is `+Y`.
    pub fn delta(self) -> IVec2 {
        match self {
            Heading::North => IVec2::Y,
            Heading::East => IVec2::X,
            Heading::South => IVec2::NEG_Y,
            Heading::West => IVec2::NEG_X,
        }
    }

    /// The single-letter symbol used on the wire (`N`, `E`, `S`, `W`).
    pub fn symbol(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = RoverError;

    /// Case-insensitive.
    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol.to_ascii_uppercase() {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            _ => Err(RoverError::UnknownHeading { symbol }),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_heading() -> impl Strategy<Value = Heading> {
        prop::sample::select(Heading::CYCLE.to_vec())
    }

    #[test]
    fn right_walks_clockwise() {
        assert_eq!(Heading::North.rotate(Turn::Right), Heading::East);
        assert_eq!(Heading::East.rotate(Turn::Right), Heading::South);
        assert_eq!(Heading::South.rotate(Turn::Right), Heading::West);
        assert_eq!(Heading::West.rotate(Turn::Right), Heading::North);
    }

    #[test]
    fn left_wraps_from_north_to_west() {
        assert_eq!(Heading::North.rotate(Turn::Left), Heading::West);
    }

    #[test]
    fn parses_lowercase_symbols() {
        assert_eq!(Heading::try_from('s'), Ok(Heading::South));
        assert_eq!(
            Heading::try_from('x'),
            Err(RoverError::UnknownHeading { symbol: 'x' })
        );
    }

    #[test]
    fn deltas_are_unit_steps() {
        for h in Heading::CYCLE {
            let d = h.delta();
            assert_eq!(d.x.abs() + d.y.abs(), 1, "{h}");
            // Opposite headings cancel out.
            assert_eq!(d + h.rotate(Turn::Right).rotate(Turn::Right).delta(), IVec2::ZERO);
        }
    }

    proptest! {
        #[test]
        fn four_rights_is_identity(h in any_heading()) {
            let r = h.rotate(Turn::Right).rotate(Turn::Right).rotate(Turn::Right).rotate(Turn::Right);
            prop_assert_eq!(r, h);
        }

        #[test]
        fn four_lefts_is_identity(h in any_heading()) {
            let l = h.rotate(Turn::Left).rotate(Turn::Left).rotate(Turn::Left).rotate(Turn::Left);
            prop_assert_eq!(l, h);
        }

        #[test]
        fn right_then_left_is_identity(h in any_heading()) {
            prop_assert_eq!(h.rotate(Turn::Right).rotate(Turn::Left), h);
            prop_assert_eq!(h.rotate(Turn::Left).rotate(Turn::Right), h);
        }

        #[test]
        fn symbol_round_trips(h in any_heading()) {
            prop_assert_eq!(Heading::try_from(h.symbol()), Ok(h));
        }
    }
}
