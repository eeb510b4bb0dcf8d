//! Engine that replays a command sequence against a [`Plateau`].
//!
//! The entry point is [`RoverEngine`]. Configure it with a [`RoverConfig`],
//! then call [`RoverEngine::execute`] with a starting [`Pose`] and the raw
//! command string, or [`RoverEngine::replay`] with already-parsed commands.

use crate::command::{Command, parse_skipping};
use crate::error::{Result, RoverError};
use crate::plateau::Plateau;
use crate::pose::Pose;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Configuration for command interpretation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoverConfig {
    /// Drop spaces, tabs and newlines from command strings before parsing.
    /// Default: true.
    pub ignore_whitespace: bool,
    /// Optional cap on program length, counted after whitespace removal.
    /// Default: no cap.
    pub max_commands: Option<usize>,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            ignore_whitespace: true,
            max_commands: None,
        }
    }
}

impl RoverConfig {
    /// Reads a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: RoverConfig = toml::from_str(text)?;
        if config.max_commands == Some(0) {
            return Err(RoverError::Config {
                reason: "max_commands must be at least 1".into(),
            });
        }
        Ok(config)
    }
}

/// A replay that stopped early.
///
/// `last_good` is the pose before the failing command; for a parse failure
/// it is the starting pose, since nothing was replayed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{error}; rover holds at {last_good}")]
pub struct MoveFailure {
    pub last_good: Pose,
    #[source]
    pub error: RoverError,
}

/// Replays rover programs. Holds no per-rover state, so one engine serves a whole run.
#[derive(Clone, Debug, Default)]
pub struct RoverEngine {
    config: RoverConfig,
}

impl RoverEngine {
    pub fn new(config: RoverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RoverConfig {
        &self.config
    }

    /// Parses a raw command string under this engine's whitespace and length rules.
    pub fn parse(&self, raw: &str) -> Result<Vec<Command>> {
        let ignore_whitespace = self.config.ignore_whitespace;
        let commands = parse_skipping(raw, |c| ignore_whitespace && c.is_whitespace())?;
        if let Some(max) = self.config.max_commands
            && commands.len() > max
        {
            return Err(RoverError::malformed(format!(
                "{} commands received, at most {max} accepted",
                commands.len()
            )));
        }
        Ok(commands)
    }

    /// Parses `raw` and replays it from `start`.
    pub fn execute(
        &self,
        plateau: &Plateau,
        start: Pose,
        raw: &str,
    ) -> std::result::Result<Pose, MoveFailure> {
        let commands = self.parse(raw).map_err(|error| MoveFailure {
            last_good: start,
            error,
        })?;
        self.replay(plateau, start, &commands)
    }

    /// Applies `commands` one at a time from `start`.
    ///
    /// Turns always succeed. Every `Move` is checked against `plateau` after
    /// the step is computed; the first one that leaves it halts the replay
    /// and the remaining commands are not executed.
    pub fn replay(
        &self,
        plateau: &Plateau,
        start: Pose,
        commands: &[Command],
    ) -> std::result::Result<Pose, MoveFailure> {
        let mut current = start;

        for (i, &command) in commands.iter().enumerate() {
            current = match command.turn() {
                Some(turn) => current.turned(turn),
                None => {
                    let candidate = current.ahead();
                    if let Some(breach) = plateau.breach(candidate) {
                        warn!(
                            command_index = i,
                            x = candidate.x,
                            y = candidate.y,
                            axis = %breach.axis,
                            "move would leave the plateau"
                        );
                        return Err(MoveFailure {
                            last_good: current,
                            error: RoverError::BoundaryViolation {
                                command_index: i,
                                candidate,
                                axis: breach.axis,
                                min: breach.min,
                                max: breach.max,
                            },
                        });
                    }
                    // In range of the plateau, so it fits back into i32.
                    Pose {
                        position: candidate.as_ivec2(),
                        ..current
                    }
                }
            };
            debug!(command_index = i, %command, pose = %current, "applied command");
        }

        Ok(current)
    }
}

/// Replays `raw` from `start` with the default [`RoverConfig`].
///
/// Stateless: identical arguments always give identical results.
pub fn move_rover(
    plateau: &Plateau,
    start: Pose,
    raw: &str,
) -> std::result::Result<Pose, MoveFailure> {
    RoverEngine::default().execute(plateau, start, raw)
}
