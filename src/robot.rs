//! Robot state and operations on the bounded grid.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The cardinal direction the robot faces.
///
/// Variants are declared in clockwise order; rotation walks this cycle by index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Heading {
    #[default]
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order, starting at North.
    pub const CYCLE: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    fn index(self) -> usize {
        self as usize
    }

    /// The heading one quarter turn clockwise.
    pub fn clockwise(self) -> Self {
        Self::CYCLE[(self.index() + 1) % Self::CYCLE.len()]
    }

    /// The heading one quarter turn counter-clockwise.
    pub fn counter_clockwise(self) -> Self {
        Self::CYCLE[(self.index() + Self::CYCLE.len() - 1) % Self::CYCLE.len()]
    }

    /// Unit step on the grid when moving forward with this heading.
    pub fn step(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    /// Canonical upper-case name, as used in reports and the command protocol.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A heading token that is not one of NORTH, EAST, SOUTH or WEST.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heading: {0:?}")]
pub struct UnknownHeading(pub String);

impl FromStr for Heading {
    type Err = UnknownHeading;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::CYCLE
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| UnknownHeading(token.to_string()))
    }
}

/// Rectangular bounds of the table. Cells run from `(0, 0)` to `(width - 1, height - 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
        }
    }
}

impl Grid {
    /// Creates bounds of `width` columns by `height` rows.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns true when `cell` lies on the grid.
    pub fn contains(&self, cell: IVec2) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Snapshot of a placed robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    pub position: IVec2,
    pub heading: Heading,
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.position.x, self.position.y, self.heading)
    }
}

/// The robot state machine.
///
/// Starts unplaced. Every operation fails closed: an invalid request leaves the
/// state untouched and reports `false` (or `None` for [`report`](Self::report)).
///
/// Serializes as a [`RobotSnapshot`]; deserializing applies the same bounds check as
/// [`place`](Self::place).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RobotSnapshot", into = "RobotSnapshot")]
pub struct Robot {
    position: IVec2,
    heading: Heading,
    placed: bool,
    grid: Grid,
}

impl Default for Robot {
    fn default() -> Self {
        Self::new(Grid::default())
    }
}

impl Robot {
    /// Creates an unplaced robot on `grid`, parked at the origin facing north.
    pub fn new(grid: Grid) -> Self {
        Self {
            position: IVec2::ZERO,
            heading: Heading::North,
            placed: false,
            grid,
        }
    }

    /// Bounds the robot moves within.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// True once a placement has succeeded.
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Puts the robot at `(x, y)` facing `heading`, replacing any previous pose.
    ///
    /// Returns false and leaves the robot untouched if the cell is off the grid.
    pub fn place(&mut self, x: i32, y: i32, heading: Heading) -> bool {
        let cell = IVec2::new(x, y);
        if !self.grid.contains(cell) {
            return false;
        }

        self.position = cell;
        self.heading = heading;
        self.placed = true;
        true
    }

    /// Like [`place`](Self::place), but takes the heading as a protocol token.
    pub fn place_named(&mut self, x: i32, y: i32, heading: &str) -> bool {
        match heading.parse::<Heading>() {
            Ok(heading) => self.place(x, y, heading),
            Err(_) => false,
        }
    }

    /// Advances one cell in the current heading. Moves that would leave the grid are ignored.
    pub fn move_forward(&mut self) -> bool {
        if !self.placed {
            return false;
        }

        let next = self.position + self.heading.step();
        if !self.grid.contains(next) {
            return false;
        }
        self.position = next;
        true
    }

    /// Quarter turn counter-clockwise.
    pub fn left(&mut self) -> bool {
        if !self.placed {
            return false;
        }
        self.heading = self.heading.counter_clockwise();
        true
    }

    /// Quarter turn clockwise.
    pub fn right(&mut self) -> bool {
        if !self.placed {
            return false;
        }
        self.heading = self.heading.clockwise();
        true
    }

    /// Current pose, or `None` before the first successful placement.
    pub fn pose(&self) -> Option<Pose> {
        self.placed.then_some(Pose {
            position: self.position,
            heading: self.heading,
        })
    }

    /// Current pose as `X,Y,HEADING`, or `None` before the first successful placement.
    pub fn report(&self) -> Option<String> {
        self.pose().map(|pose| pose.to_string())
    }
}

/// Serialized form of a [`Robot`]: its bounds and, when placed, its pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotSnapshot {
    pub grid: Grid,
    pub pose: Option<Pose>,
}

/// A [`RobotSnapshot`] that does not describe a reachable robot state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSnapshot {
    #[error("grid must be at least 1x1, got {0}")]
    EmptyGrid(Grid),

    #[error("pose {pose} lies outside the {grid} grid")]
    OffGrid { pose: Pose, grid: Grid },
}

impl From<Robot> for RobotSnapshot {
    fn from(robot: Robot) -> Self {
        Self {
            grid: robot.grid,
            pose: robot.pose(),
        }
    }
}

impl TryFrom<RobotSnapshot> for Robot {
    type Error = InvalidSnapshot;

    fn try_from(snapshot: RobotSnapshot) -> Result<Self, Self::Error> {
        let RobotSnapshot { grid, pose } = snapshot;
        if grid.width < 1 || grid.height < 1 {
            return Err(InvalidSnapshot::EmptyGrid(grid));
        }

        let mut robot = Robot::new(grid);
        if let Some(pose) = pose
            && !robot.place(pose.position.x, pose.position.y, pose.heading)
        {
            return Err(InvalidSnapshot::OffGrid { pose, grid });
        }
        Ok(robot)
    }
}
