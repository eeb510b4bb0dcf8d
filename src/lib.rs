//! # mars-rover
//!
//! A movement engine for rovers exploring a rectangular plateau.
//!
//! A run configures one [`Plateau`], then resolves rovers one at a time: each is
//! placed at a starting [`Pose`] and replays a string of `L`, `R` and `M`
//! commands. Every forward step is checked against the plateau, and the first
//! step that would leave it stops that rover with a
//! [`RoverError::BoundaryViolation`] and its last good pose.
//!
//! Prompting, retry loops and terminal I/O belong to the caller. The
//! [`input`] module only tokenises the lines such a caller collects.

pub mod command;
pub mod engine;
pub mod error;
pub mod heading;
pub mod input;
pub mod mission;
pub mod plateau;
pub mod pose;
pub mod rover;

pub use command::*;
pub use engine::*;
pub use error::*;
pub use heading::*;
pub use input::*;
pub use mission::*;
pub use plateau::*;
pub use pose::*;
pub use rover::*;
