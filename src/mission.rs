//! A run: one plateau, any number of rovers, resolved strictly in order.

use crate::engine::{RoverConfig, RoverEngine};
use crate::error::{Result, RoverError};
use crate::input::{MissionInput, RoverInput};
use crate::plateau::{Plateau, configure_plateau};
use crate::pose::Pose;
use crate::rover::{ResolvedRover, Rover, RoverId};
use serde::Serialize;
use std::fmt;
use tracing::info;

/// How a rover's turn in the run ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    /// Every command ran; `pose` is where the rover ended up.
    Arrived { pose: Pose },
    /// Placement succeeded but the program was rejected or left the plateau.
    Stopped { last_good: Pose, error: RoverError },
    /// The start values were rejected, so the rover never moved.
    NotPlaced { error: RoverError },
}

/// One line of a [`MissionReport`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoverReport {
    pub id: RoverId,
    pub start: Option<Pose>,
    /// The parsed program, one letter per command.
    pub commands: String,
    #[serde(flatten)]
    pub outcome: ReportOutcome,
}

impl From<&ResolvedRover> for RoverReport {
    fn from(rover: &ResolvedRover) -> Self {
        let outcome = match rover.outcome() {
            Ok(pose) => ReportOutcome::Arrived { pose: *pose },
            Err(failure) => ReportOutcome::Stopped {
                last_good: failure.last_good,
                error: failure.error.clone(),
            },
        };
        Self {
            id: rover.id(),
            start: Some(rover.start()),
            commands: rover.commands().iter().map(|c| c.symbol()).collect(),
            outcome,
        }
    }
}

impl RoverReport {
    /// The rover's final pose, if it completed its program.
    pub fn final_pose(&self) -> Option<Pose> {
        match self.outcome {
            ReportOutcome::Arrived { pose } => Some(pose),
            _ => None,
        }
    }
}

impl fmt::Display for RoverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            ReportOutcome::Arrived { pose } => write!(f, "{}: {}", self.id, pose),
            ReportOutcome::Stopped { last_good, error } => {
                write!(f, "{}: stopped at {} ({})", self.id, last_good, error)
            }
            ReportOutcome::NotPlaced { error } => write!(f, "{}: not placed ({})", self.id, error),
        }
    }
}

/// Everything a run produced, in the order rovers were resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MissionReport {
    pub plateau: Plateau,
    pub rovers: Vec<RoverReport>,
}

impl MissionReport {
    /// `"x y H"` for every rover that arrived, in order.
    pub fn final_poses(&self) -> Vec<String> {
        self.rovers
            .iter()
            .filter_map(RoverReport::final_pose)
            .map(|p| p.to_string())
            .collect()
    }
}

impl fmt::Display for MissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rover in &self.rovers {
            writeln!(f, "{rover}")?;
        }
        Ok(())
    }
}

/// Owns the plateau and engine for one run and hands out rovers in sequence.
///
/// Callers resolve each rover before asking for the next; reports are kept in
/// the order they are recorded.
#[derive(Clone, Debug)]
pub struct Mission {
    plateau: Plateau,
    engine: RoverEngine,
    next_id: u32,
    reports: Vec<RoverReport>,
}

impl Mission {
    pub fn new(plateau: Plateau, config: RoverConfig) -> Self {
        Self {
            plateau,
            engine: RoverEngine::new(config),
            next_id: 1,
            reports: Vec::new(),
        }
    }

    pub fn plateau(&self) -> &Plateau {
        &self.plateau
    }

    pub fn engine(&self) -> &RoverEngine {
        &self.engine
    }

    /// Issues the next rover, numbered from 1.
    pub fn next_rover(&mut self) -> Rover {
        let rover = Rover::new(RoverId(self.next_id));
        self.next_id += 1;
        rover
    }

    /// Records a resolved rover and returns a copy of its report.
    pub fn record(&mut self, rover: &ResolvedRover) -> RoverReport {
        self.push(RoverReport::from(rover))
    }

    /// Records a rover whose start values were rejected.
    pub fn record_unplaced(&mut self, rover: &Rover, error: RoverError) -> RoverReport {
        self.push(RoverReport {
            id: rover.id(),
            start: None,
            commands: String::new(),
            outcome: ReportOutcome::NotPlaced { error },
        })
    }

    fn push(&mut self, report: RoverReport) -> RoverReport {
        self.reports.push(report.clone());
        report
    }

    /// Places and drives one rover to completion before returning.
    pub fn deploy(&mut self, input: &RoverInput) -> RoverReport {
        let rover = self.next_rover();
        match rover.place(&self.plateau, input.x, input.y, input.heading) {
            Ok(placed) => {
                let resolved = placed.drive(&self.engine, &self.plateau, &input.commands);
                self.record(&resolved)
            }
            Err(error) => self.record_unplaced(&rover, error),
        }
    }

    pub fn reports(&self) -> &[RoverReport] {
        &self.reports
    }

    pub fn report(&self) -> MissionReport {
        MissionReport {
            plateau: self.plateau,
            rovers: self.reports.clone(),
        }
    }

    /// Runs a whole batch. Only an invalid plateau aborts the run; a failing
    /// rover is reported and the next one proceeds.
    pub fn run(input: &MissionInput, config: RoverConfig) -> Result<MissionReport> {
        let (x, y) = input.plateau;
        let mut mission = Mission::new(configure_plateau(x, y)?, config);
        for rover in &input.rovers {
            mission.deploy(rover);
        }
        info!(rovers = mission.reports.len(), "mission complete");
        Ok(mission.report())
    }

    /// Parses the batch text layout and runs it.
    pub fn run_text(text: &str, config: RoverConfig) -> Result<MissionReport> {
        Self::run(&MissionInput::parse(text)?, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heading::{Axis, Heading};

    const CLASSIC: &str = "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n";

    #[test]
    fn classic_batch_produces_reference_output() {
        let report = Mission::run_text(CLASSIC, RoverConfig::default()).unwrap();
        assert_eq!(report.final_poses(), vec!["1 3 N", "5 1 E"]);
        assert_eq!(report.to_string(), "Rover[1]: 1 3 N\nRover[2]: 5 1 E\n");
    }

    #[test]
    fn failing_rover_does_not_stop_the_run() {
        let text = "5 5\n5 5 N\nM\n7 0 E\nM\n0 0 N\nMMR\n";
        let report = Mission::run_text(text, RoverConfig::default()).unwrap();
        assert_eq!(report.rovers.len(), 3);

        assert!(matches!(
            &report.rovers[0].outcome,
            ReportOutcome::Stopped {
                last_good,
                error: RoverError::BoundaryViolation { axis: Axis::Y, .. },
            } if *last_good == Pose::new(5, 5, Heading::North)
        ));
        assert!(matches!(
            report.rovers[1].outcome,
            ReportOutcome::NotPlaced {
                error: RoverError::OutOfPlaneBounds { .. }
            }
        ));
        assert_eq!(report.rovers[1].start, None);
        assert_eq!(report.rovers[2].final_pose(), Some(Pose::new(0, 2, Heading::East)));
        assert_eq!(report.final_poses(), vec!["0 2 E"]);
    }

    #[test]
    fn ids_follow_arrival_order() {
        let report = Mission::run_text(CLASSIC, RoverConfig::default()).unwrap();
        let ids: Vec<RoverId> = report.rovers.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RoverId(1), RoverId(2)]);
    }

    #[test]
    fn invalid_plateau_aborts() {
        assert!(matches!(
            Mission::run_text("-5 5\n0 0 N\nM\n", RoverConfig::default()),
            Err(RoverError::NegativeCoordinate { axis: Axis::X, value: -5 })
        ));
    }

    #[test]
    fn retrying_harness_flow() {
        let mut mission = Mission::new(configure_plateau(5, 5).unwrap(), RoverConfig::default());
        let rover = mission.next_rover();

        // First attempt at placement is off the plateau; the harness asks again.
        assert!(rover.place(mission.plateau(), 6, 6, 'N').is_err());
        let placed = rover.place(mission.plateau(), 3, 3, 'e').unwrap();

        let plateau = *mission.plateau();
        let resolved = placed.drive(mission.engine(), &plateau, "MMRMMRMRRM");
        let report = mission.record(&resolved);
        assert_eq!(report.to_string(), "Rover[1]: 5 1 E");
        assert_eq!(report.commands, "MMRMMRMRRM");
        assert_eq!(mission.reports(), std::slice::from_ref(&report));

        let unplaced = mission.next_rover();
        assert_eq!(unplaced.id(), RoverId(2));
        let error = unplaced.place(mission.plateau(), 9, 9, 'N').unwrap_err();
        let second = mission.record_unplaced(&unplaced, error);
        assert_eq!(mission.reports().last(), Some(&second));
        assert_eq!(mission.reports().len(), 2);
    }
}
