//! Error types for the rover engine.

use crate::heading::Axis;
use glam::I64Vec2;
use serde::Serialize;
use thiserror::Error;

/// Every way a rover operation can be rejected.
///
/// Each variant carries the structured fields a harness needs to decide
/// what to re-prompt for. None of them is fatal to a run.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind")]
pub enum RoverError {
    /// Wrong token count, non-numeric token, or a program over the configured cap.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("coordinate {axis} is negative ({value})")]
    NegativeCoordinate { axis: Axis, value: i32 },

    #[error("coordinate {axis}={value} lies outside the plateau (max {bound})")]
    OutOfPlaneBounds { axis: Axis, value: i32, bound: i32 },

    #[error("unknown heading `{symbol}`, expected one of N, E, S, W")]
    UnknownHeading { symbol: char },

    /// `index` is the 0-based position of `symbol` in the raw command string.
    #[error("unknown command `{symbol}` at index {index}, expected one of L, R, M")]
    UnknownCommand { index: usize, symbol: char },

    /// A `Move` at `command_index` would have put the rover at `candidate`.
    /// Widened to i64 so a step past an `i32::MAX` edge is representable.
    #[error(
        "move {command_index} leaves the plateau at ({}, {}) on axis {axis} (allowed {min}..={max})",
        .candidate.x,
        .candidate.y
    )]
    BoundaryViolation {
        command_index: usize,
        candidate: I64Vec2,
        axis: Axis,
        min: i32,
        max: i32,
    },

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

impl RoverError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        RoverError::MalformedInput {
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for RoverError {
    fn from(e: toml::de::Error) -> Self {
        RoverError::Config {
            reason: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RoverError>;
