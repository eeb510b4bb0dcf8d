//! Tokenisation of the plain-text input lines a harness collects.
//!
//! Nothing here touches a terminal. Each function turns one line (or a whole
//! batch) into the primitive values the placement and movement calls expect,
//! or a [`RoverError::MalformedInput`] describing what was wrong with it.

use crate::error::{Result, RoverError};
use serde::{Deserialize, Serialize};

fn tokens<const N: usize>(line: &str) -> Result<[&str; N]> {
    let found: Vec<&str> = line.split_whitespace().collect();
    <[&str; N]>::try_from(found.as_slice()).map_err(|_| {
        RoverError::malformed(format!(
            "expected {N} values, received {}: {:?}",
            found.len(),
            found
        ))
    })
}

/// `position` is 1-based, counting tokens on the line.
fn integer(token: &str, position: usize) -> Result<i32> {
    token.parse().map_err(|_| {
        RoverError::malformed(format!("value `{token}` at position {position} is not an integer"))
    })
}

/// Parses the plateau line, `"maxX maxY"`.
pub fn parse_plateau_line(line: &str) -> Result<(i32, i32)> {
    let [x, y] = tokens::<2>(line)?;
    Ok((integer(x, 1)?, integer(y, 2)?))
}

/// Parses a rover start line, `"x y H"`.
///
/// The heading token must be a single character; whether it names a real
/// heading is left to placement, which reports [`RoverError::UnknownHeading`].
pub fn parse_pose_line(line: &str) -> Result<(i32, i32, char)> {
    let [x, y, h] = tokens::<3>(line)?;
    let x = integer(x, 1)?;
    let y = integer(y, 2)?;
    let mut chars = h.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok((x, y, c)),
        _ => Err(RoverError::malformed(format!(
            "value `{h}` at position 3 is not a single heading letter"
        ))),
    }
}

/// One rover's raw start values and command string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverInput {
    pub x: i32,
    pub y: i32,
    pub heading: char,
    pub commands: String,
}

/// A whole run in the classic batch layout.
///
/// ```text
/// 5 5
/// 1 2 N
/// LMLMLMLMM
/// 3 3 E
/// MMRMMRMRRM
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionInput {
    pub plateau: (i32, i32),
    pub rovers: Vec<RoverInput>,
}

impl MissionInput {
    /// Parses the batch layout.
    ///
    /// Leading and trailing blank lines are ignored. Inside the body lines
    /// pair up strictly, so a blank command line is an empty program.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let first = lines.iter().position(|l| !l.trim().is_empty());
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        let (first, last) = match (first, last) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(RoverError::malformed("input is empty")),
        };

        let at_line = |n: usize, e: RoverError| match e {
            RoverError::MalformedInput { reason } => {
                RoverError::malformed(format!("line {}: {reason}", n + 1))
            }
            other => other,
        };

        let plateau = parse_plateau_line(lines[first]).map_err(|e| at_line(first, e))?;

        let body = &lines[first + 1..=last];
        let mut rovers = Vec::with_capacity(body.len() / 2);
        for (pair_index, pair) in body.chunks(2).enumerate() {
            let pose_line = first + 1 + pair_index * 2;
            let (x, y, heading) = parse_pose_line(pair[0]).map_err(|e| at_line(pose_line, e))?;
            let commands = match pair.get(1) {
                Some(c) => c.trim().to_string(),
                None => {
                    return Err(at_line(
                        pose_line,
                        RoverError::malformed("rover start line has no command line after it"),
                    ));
                }
            };
            rovers.push(RoverInput {
                x,
                y,
                heading,
                commands,
            });
        }

        Ok(Self { plateau, rovers })
    }
}
