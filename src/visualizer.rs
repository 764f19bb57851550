//! Optional display of the robot on its grid.
//!
//! The robot knows nothing about rendering. A [`Visualizer`] is handed the grid
//! bounds and the current pose after every change and draws them however it likes.

use crate::error::Result;
use crate::robot::{Grid, Heading, Pose};
use glam::IVec2;
use std::io::Write;

/// Observer of robot state.
pub trait Visualizer {
    /// Draws the grid with the robot at `pose`, or empty when the robot is not placed.
    fn render(&mut self, grid: Grid, pose: Option<&Pose>) -> Result<()>;
}

/// Draws the grid as text, top row (highest `y`) first.
///
/// ```text
/// . . . . .
/// . . . . .
/// . ^ . . .
/// . . . . .
/// . . . . .
/// 1,2,NORTH
/// ```
pub struct AsciiGrid<W: Write> {
    out: W,
}

impl<W: Write> AsciiGrid<W> {
    /// Creates a renderer writing frames to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn glyph(heading: Heading) -> char {
    match heading {
        Heading::North => '^',
        Heading::East => '>',
        Heading::South => 'v',
        Heading::West => '<',
    }
}

impl<W: Write> Visualizer for AsciiGrid<W> {
    fn render(&mut self, grid: Grid, pose: Option<&Pose>) -> Result<()> {
        for y in (0..grid.height).rev() {
            let row: Vec<String> = (0..grid.width)
                .map(|x| match pose {
                    Some(p) if p.position == IVec2::new(x, y) => glyph(p.heading).to_string(),
                    _ => ".".to_string(),
                })
                .collect();
            writeln!(self.out, "{}", row.join(" "))?;
        }

        match pose {
            Some(p) => writeln!(self.out, "{p}")?,
            None => writeln!(self.out, "(not placed)")?,
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
