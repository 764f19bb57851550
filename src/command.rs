//! The textual command protocol.
//!
//! One command per line, keywords case-insensitive:
//!
//! | Line               | Command                   |
//! |--------------------|---------------------------|
//! | `PLACE X,Y,FACING` | [`Command::Place`]        |
//! | `MOVE`             | [`Command::Move`]         |
//! | `LEFT`             | [`Command::Left`]         |
//! | `RIGHT`            | [`Command::Right`]        |
//! | `REPORT`           | [`Command::Report`]       |
//! | `EXIT` / `QUIT`    | [`Command::Quit`]         |

use crate::robot::{Heading, UnknownHeading};
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

const PLACE_PREFIX: &str = "PLACE ";

/// A parsed command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Put the robot on the grid.
    Place { x: i32, y: i32, heading: Heading },
    /// Advance one cell.
    Move,
    /// Quarter turn counter-clockwise.
    Left,
    /// Quarter turn clockwise.
    Right,
    /// Print the current pose.
    Report,
    /// End the command stream.
    Quit,
}

/// Why a line did not yield a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty line")]
    Empty,

    #[error("unknown command: {0:?}")]
    Unknown(String),

    #[error("PLACE is missing the {0} argument")]
    MissingArgument(&'static str),

    #[error("PLACE has an invalid {field} coordinate: {source}")]
    InvalidCoordinate {
        field: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    InvalidHeading(#[from] UnknownHeading),
}

impl Command {
    /// Parses one protocol line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let upper = line.to_ascii_uppercase();
        if let Some(args) = upper.strip_prefix(PLACE_PREFIX) {
            return parse_place(args);
        }

        match upper.as_str() {
            "MOVE" => Ok(Self::Move),
            "LEFT" => Ok(Self::Left),
            "RIGHT" => Ok(Self::Right),
            "REPORT" => Ok(Self::Report),
            "EXIT" | "QUIT" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parses `X,Y,FACING`. Fields beyond the third are ignored.
fn parse_place(args: &str) -> Result<Command, CommandError> {
    let mut fields = args.split(',');

    let coord = |field: Option<&str>, name: &'static str| -> Result<i32, CommandError> {
        field
            .ok_or(CommandError::MissingArgument(name))?
            .trim()
            .parse()
            .map_err(|source| CommandError::InvalidCoordinate { field: name, source })
    };
    let x = coord(fields.next(), "X")?;
    let y = coord(fields.next(), "Y")?;
    let heading = fields
        .next()
        .ok_or(CommandError::MissingArgument("FACING"))?
        .parse::<Heading>()?;

    Ok(Command::Place { x, y, heading })
}
