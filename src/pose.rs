//! Rover placement: where a rover is and which way it faces.

use crate::error::{Result, RoverError};
use crate::heading::{Axis, Heading, Turn};
use crate::plateau::Plateau;
use glam::{I64Vec2, IVec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A grid cell on the plateau.
pub type Position = IVec2;

/// A rover's position and heading at one instant.
///
/// Poses are values: every command produces a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Position,
    pub heading: Heading,
}

impl Pose {
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            position: IVec2::new(x, y),
            heading,
        }
    }

    /// Same position, heading spun 90°.
    pub fn turned(self, turn: Turn) -> Self {
        Self {
            heading: self.heading.rotate(turn),
            ..self
        }
    }

    /// The cell one step ahead. Not bounds-checked; i64 so it cannot overflow.
    pub fn ahead(self) -> I64Vec2 {
        self.position.as_i64vec2() + self.heading.delta().as_i64vec2()
    }
}

/// Renders as `"x y H"`, e.g. `1 3 N`.
impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}

/// Validates caller-supplied coordinates and builds a starting pose.
///
/// Negative coordinates are rejected before the plateau is consulted, so
/// `(-1, 0)` is a [`RoverError::NegativeCoordinate`] on any plateau.
pub fn make_start_pose(x: i32, y: i32, heading: Heading, plateau: &Plateau) -> Result<Pose> {
    for (axis, value) in [(Axis::X, x), (Axis::Y, y)] {
        if value < 0 {
            warn!(%axis, value, "rejected start pose with negative coordinate");
            return Err(RoverError::NegativeCoordinate { axis, value });
        }
    }

    let pose = Pose::new(x, y, heading);
    if let Some(breach) = plateau.breach(pose.position.as_i64vec2()) {
        let value = match breach.axis {
            Axis::X => x,
            Axis::Y => y,
        };
        warn!(axis = %breach.axis, value, bound = breach.max, "rejected start pose off the plateau");
        return Err(RoverError::OutOfPlaneBounds {
            axis: breach.axis,
            value,
            bound: breach.max,
        });
    }

    Ok(pose)
}

/// Places a rover from raw harness values; `heading` is a case-insensitive compass letter.
pub fn place_rover(plateau: &Plateau, x: i32, y: i32, heading: char) -> Result<Pose> {
    let heading = Heading::try_from(heading)?;
    make_start_pose(x, y, heading, plateau)
}
