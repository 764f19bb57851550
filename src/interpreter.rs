//! Interpreter that applies protocol lines to a [`Robot`].
//!
//! The entry point is [`CommandInterpreter::execute`]. It parses one line, dispatches
//! the resulting [`Command`] to the robot, writes any `REPORT` output or advisory
//! message, and redraws the attached [`Visualizer`] when the robot changed.

use crate::command::Command;
use crate::error::Result;
use crate::robot::Robot;
use crate::visualizer::Visualizer;
use std::io::Write;
use tracing::debug;

/// Written when a command needs a placed robot and there is none.
pub const NOT_PLACED_ADVISORY: &str = "Robot not placed yet. Please use: PLACE X,Y,FACING first";

/// Effect of a single line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// The robot's state changed.
    pub changed: bool,
    /// The line asked to end the command stream.
    pub quit: bool,
}

/// Owns the robot and feeds it commands.
pub struct CommandInterpreter {
    robot: Robot,
    visualizer: Option<Box<dyn Visualizer>>,
}

impl CommandInterpreter {
    /// Creates an interpreter driving `robot`, with no visualizer.
    pub fn new(robot: Robot) -> Self {
        Self {
            robot,
            visualizer: None,
        }
    }

    /// Attaches a visualizer (builder pattern).
    pub fn with_visualizer(mut self, visualizer: Box<dyn Visualizer>) -> Self {
        self.visualizer = Some(visualizer);
        self
    }

    /// The robot being driven.
    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// True when a visualizer is attached.
    pub fn has_visualizer(&self) -> bool {
        self.visualizer.is_some()
    }

    /// Draws the current state on the visualizer, if there is one.
    pub fn redraw(&mut self) -> Result<()> {
        if let Some(visualizer) = self.visualizer.as_mut() {
            visualizer.render(self.robot.grid(), self.robot.pose().as_ref())?;
        }
        Ok(())
    }

    /// Parses and runs one line. Lines that do not parse are ignored.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<Outcome> {
        match Command::parse(line) {
            Ok(command) => self.apply(command, out),
            Err(e) => {
                debug!(line, error = %e, "Ignoring line");
                Ok(Outcome::default())
            }
        }
    }

    /// Runs an already parsed command.
    pub fn apply(&mut self, command: Command, out: &mut impl Write) -> Result<Outcome> {
        let mut outcome = Outcome::default();

        match command {
            Command::Place { x, y, heading } => {
                outcome.changed = self.robot.place(x, y, heading);
            }
            Command::Move => outcome.changed = self.guarded(out, Robot::move_forward)?,
            Command::Left => outcome.changed = self.guarded(out, Robot::left)?,
            Command::Right => outcome.changed = self.guarded(out, Robot::right)?,
            Command::Report => match self.robot.report() {
                Some(report) => writeln!(out, "{report}")?,
                None => writeln!(out, "{NOT_PLACED_ADVISORY}")?,
            },
            Command::Quit => outcome.quit = true,
        }

        debug!(?command, changed = outcome.changed, pose = ?self.robot.pose(), "Executed");

        if outcome.changed {
            self.redraw()?;
        }
        Ok(outcome)
    }

    /// Runs a motion operation, writing the advisory if it failed for lack of placement.
    /// A move blocked by the grid edge stays silent.
    fn guarded(&mut self, out: &mut impl Write, op: fn(&mut Robot) -> bool) -> Result<bool> {
        let changed = op(&mut self.robot);
        if !changed && !self.robot.is_placed() {
            writeln!(out, "{NOT_PLACED_ADVISORY}")?;
        }
        Ok(changed)
    }
}
