//! Rover commands and the letter alphabet they are sent in.

use crate::error::{Result, RoverError};
use crate::heading::Turn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single parsed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Spin 90° anticlockwise in place (`L`).
    Left,
    /// Spin 90° clockwise in place (`R`).
    Right,
    /// Step one cell forward, keeping the heading (`M`).
    Move,
}

impl Command {
    /// The turn this command performs, or `None` for `Move`.
    pub fn turn(self) -> Option<Turn> {
        match self {
            Command::Left => Some(Turn::Left),
            Command::Right => Some(Turn::Right),
            Command::Move => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Command::Left => 'L',
            Command::Right => 'R',
            Command::Move => 'M',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'L' => Some(Command::Left),
            'R' => Some(Command::Right),
            'M' => Some(Command::Move),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parses a raw command string, case-insensitively.
///
/// Stops at the first character outside `{L, R, M}` and reports its
/// 0-based index. An empty string is a valid, empty program.
pub fn parse_commands(raw: &str) -> Result<Vec<Command>> {
    parse_skipping(raw, |_| false)
}

/// Like [`parse_commands`], but characters matching `skip` are dropped.
///
/// Reported indices still refer to positions in `raw`.
pub(crate) fn parse_skipping(raw: &str, skip: impl Fn(char) -> bool) -> Result<Vec<Command>> {
    raw.chars()
        .enumerate()
        .filter(|&(_, c)| !skip(c))
        .map(|(index, symbol)| {
            Command::from_symbol(symbol).ok_or(RoverError::UnknownCommand { index, symbol })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_valid() {
        assert_eq!(parse_commands(""), Ok(vec![]));
    }

    #[test]
    fn mixed_case_is_accepted() {
        assert_eq!(
            parse_commands("mLr"),
            Ok(vec![Command::Move, Command::Left, Command::Right])
        );
    }

    #[test]
    fn fails_fast_on_first_unknown() {
        assert_eq!(
            parse_commands("LRQ"),
            Err(RoverError::UnknownCommand {
                index: 2,
                symbol: 'Q'
            })
        );
        // Only the first offender is reported.
        assert_eq!(
            parse_commands("xMy"),
            Err(RoverError::UnknownCommand {
                index: 0,
                symbol: 'x'
            })
        );
    }

    #[test]
    fn whitespace_is_an_error_unless_skipped() {
        assert_eq!(
            parse_commands("L M"),
            Err(RoverError::UnknownCommand {
                index: 1,
                symbol: ' '
            })
        );
        assert_eq!(
            parse_skipping("L M", char::is_whitespace),
            Ok(vec![Command::Left, Command::Move])
        );
    }

    #[test]
    fn skipped_input_keeps_raw_indices() {
        assert_eq!(
            parse_skipping("  MZ", char::is_whitespace),
            Err(RoverError::UnknownCommand {
                index: 3,
                symbol: 'Z'
            })
        );
    }
}
