//! The rectangular grid rovers must stay on.

use crate::error::{Result, RoverError};
use crate::heading::Axis;
use glam::{I64Vec2, IVec2};
use serde::{Deserialize, Serialize};
use tracing::info;

/// An axis-aligned rectangle spanning `(0, 0)` to `top_right`, inclusive.
///
/// Constructed once per run and shared read-only by every rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plateau {
    top_right: IVec2,
}

/// Which axis a position escaped along, and the bounds it escaped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisBreach {
    pub axis: Axis,
    pub min: i32,
    pub max: i32,
}

impl Plateau {
    /// Bottom-left corner of every plateau.
    pub const ORIGIN: IVec2 = IVec2::ZERO;

    /// Builds a plateau from its top-right corner.
    ///
    /// A negative component has no meaningful extent and is rejected with
    /// [`RoverError::NegativeCoordinate`].
    pub fn new(top_right: IVec2) -> Result<Self> {
        for (axis, value) in [(Axis::X, top_right.x), (Axis::Y, top_right.y)] {
            if value < 0 {
                return Err(RoverError::NegativeCoordinate { axis, value });
            }
        }
        Ok(Self { top_right })
    }

    pub fn top_right(&self) -> IVec2 {
        self.top_right
    }

    /// Number of cells along X (the top-right x plus one).
    pub fn width(&self) -> i64 {
        i64::from(self.top_right.x) + 1
    }

    /// Number of cells along Y.
    pub fn height(&self) -> i64 {
        i64::from(self.top_right.y) + 1
    }

    /// True iff `p` lies on the plateau, edges included.
    pub fn contains(&self, p: IVec2) -> bool {
        self.breach(p.as_i64vec2()).is_none()
    }

    /// The first axis (X before Y) along which `p` leaves the plateau.
    ///
    /// Takes i64 coordinates so a step one past an `i32::MAX` edge can be tested.
    pub fn breach(&self, p: I64Vec2) -> Option<AxisBreach> {
        let checks = [
            (Axis::X, p.x, Self::ORIGIN.x, self.top_right.x),
            (Axis::Y, p.y, Self::ORIGIN.y, self.top_right.y),
        ];
        checks
            .into_iter()
            .find(|&(_, value, min, max)| value < i64::from(min) || value > i64::from(max))
            .map(|(axis, _, min, max)| AxisBreach { axis, min, max })
    }
}

/// Builds the plateau for a run from its top-right coordinates.
pub fn configure_plateau(top_right_x: i32, top_right_y: i32) -> Result<Plateau> {
    let plateau = Plateau::new(IVec2::new(top_right_x, top_right_y))?;
    info!(
        width = plateau.width(),
        height = plateau.height(),
        "plateau configured"
    );
    Ok(plateau)
}
