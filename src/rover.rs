//! Per-rover lifecycle: placed, then driven, then reported.
//!
//! Each step is a separate value. A step that fails leaves the previous value
//! untouched, so a harness can simply call it again with corrected input.

use crate::command::Command;
use crate::engine::{MoveFailure, RoverEngine};
use crate::error::Result;
use crate::plateau::Plateau;
use crate::pose::{Pose, place_rover};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

/// 1-based sequence number of a rover within a run. Displays as `Rover[n]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoverId(pub u32);

impl fmt::Display for RoverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rover[{}]", self.0)
    }
}

/// Where a rover is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoverStage {
    AwaitingPosition,
    AwaitingCommands,
    Resolved,
}

/// A rover that has not been placed yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rover {
    id: RoverId,
}

impl Rover {
    pub fn new(id: RoverId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> RoverId {
        self.id
    }

    pub fn stage(&self) -> RoverStage {
        RoverStage::AwaitingPosition
    }

    /// Validates the start values against `plateau`.
    pub fn place(&self, plateau: &Plateau, x: i32, y: i32, heading: char) -> Result<PlacedRover> {
        let start = place_rover(plateau, x, y, heading)?;
        Ok(PlacedRover { id: self.id, start })
    }
}

/// A rover with a valid start pose, waiting for its program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedRover {
    id: RoverId,
    start: Pose,
}

impl PlacedRover {
    pub fn id(&self) -> RoverId {
        self.id
    }

    pub fn start(&self) -> Pose {
        self.start
    }

    pub fn stage(&self) -> RoverStage {
        RoverStage::AwaitingCommands
    }

    /// Parses and replays `raw`. The result records success or failure.
    pub fn drive(&self, engine: &RoverEngine, plateau: &Plateau, raw: &str) -> ResolvedRover {
        let (commands, outcome) = match engine.parse(raw) {
            Ok(commands) => {
                let outcome = engine.replay(plateau, self.start, &commands);
                (commands, outcome)
            }
            Err(error) => (
                Vec::new(),
                Err(MoveFailure {
                    last_good: self.start,
                    error,
                }),
            ),
        };

        match &outcome {
            Ok(pose) => info!(rover = %self.id, final_pose = %pose, "rover resolved"),
            Err(failure) => warn!(rover = %self.id, error = %failure, "rover stopped"),
        }

        ResolvedRover {
            id: self.id,
            start: self.start,
            commands,
            outcome,
        }
    }
}

/// A rover whose program has run, successfully or not. Never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRover {
    id: RoverId,
    start: Pose,
    commands: Vec<Command>,
    outcome: std::result::Result<Pose, MoveFailure>,
}

impl ResolvedRover {
    pub fn id(&self) -> RoverId {
        self.id
    }

    pub fn start(&self) -> Pose {
        self.start
    }

    /// The parsed program; empty if parsing failed.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn outcome(&self) -> std::result::Result<&Pose, &MoveFailure> {
        self.outcome.as_ref()
    }

    pub fn stage(&self) -> RoverStage {
        RoverStage::Resolved
    }

    /// Last pose the rover actually reached, whether or not it finished.
    pub fn last_pose(&self) -> Pose {
        match &self.outcome {
            Ok(pose) => *pose,
            Err(failure) => failure.last_good,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoverError;
    use crate::heading::Heading;
    use glam::IVec2;

    fn plateau() -> Plateau {
        Plateau::new(IVec2::new(5, 5)).unwrap()
    }

    #[test]
    fn id_displays_like_a_label() {
        assert_eq!(RoverId(3).to_string(), "Rover[3]");
    }

    #[test]
    fn lifecycle_walks_through_stages() {
        let engine = RoverEngine::default();
        let rover = Rover::new(RoverId(1));
        assert_eq!(rover.stage(), RoverStage::AwaitingPosition);

        let placed = rover.place(&plateau(), 1, 2, 'N').unwrap();
        assert_eq!(placed.stage(), RoverStage::AwaitingCommands);
        assert_eq!(placed.id(), RoverId(1));

        let resolved = placed.drive(&engine, &plateau(), "LMLMLMLMM");
        assert_eq!(resolved.stage(), RoverStage::Resolved);
        assert_eq!(resolved.commands().len(), 9);
        assert_eq!(resolved.outcome(), Ok(&Pose::new(1, 3, Heading::North)));
    }

    #[test]
    fn failed_placement_can_be_retried() {
        let rover = Rover::new(RoverId(2));
        assert!(matches!(
            rover.place(&plateau(), 9, 0, 'N'),
            Err(RoverError::OutOfPlaneBounds { .. })
        ));
        assert!(rover.place(&plateau(), 4, 0, 'N').is_ok());
    }

    #[test]
    fn failed_drive_can_be_retried_from_same_start() {
        let engine = RoverEngine::default();
        let placed = Rover::new(RoverId(1))
            .place(&plateau(), 5, 5, 'N')
            .unwrap();

        let bad = placed.drive(&engine, &plateau(), "M");
        assert_eq!(bad.last_pose(), Pose::new(5, 5, Heading::North));
        assert!(bad.outcome().is_err());

        let unparsed = placed.drive(&engine, &plateau(), "MQ");
        assert!(unparsed.commands().is_empty());

        let good = placed.drive(&engine, &plateau(), "LLM");
        assert_eq!(good.outcome(), Ok(&Pose::new(5, 4, Heading::South)));
    }
}
