//! Command sources: batch replay of a file and the interactive prompt loop.
//!
//! Both modes read lines from any [`BufRead`] and push them through the same
//! [`CommandInterpreter`]; they differ only in prompting, pacing and how they end.

use crate::config::SessionConfig;
use crate::error::{Result, SimError};
use crate::interpreter::CommandInterpreter;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::info;

/// Counters collected over one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Non-blank lines consumed.
    pub lines: usize,
    /// Lines that changed the robot.
    pub changed: usize,
    /// The run ended on `QUIT`/`EXIT` rather than end of input.
    pub quit: bool,
}

/// Written when an interactive session ends.
pub const EXIT_NOTICE: &str = "Exiting...";

/// Ends an interrupted prompt line (end of input or Ctrl+C) with the exit notice.
pub fn write_interrupted(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "\n{EXIT_NOTICE}")?;
    out.flush()
}

/// Drives a [`CommandInterpreter`] from a command source.
pub struct Session {
    interpreter: CommandInterpreter,
    config: SessionConfig,
}

impl Session {
    /// Creates a session that runs `interpreter` with the prompt and pacing from `config`.
    pub fn new(interpreter: CommandInterpreter, config: SessionConfig) -> Self {
        Self {
            interpreter,
            config,
        }
    }

    /// The interpreter, and through it the robot, as left by the last run.
    pub fn interpreter(&self) -> &CommandInterpreter {
        &self.interpreter
    }

    /// Opens `path` and replays it in batch mode.
    pub fn run_file(&mut self, path: &Path, out: &mut impl Write) -> Result<SessionSummary> {
        let file = File::open(path).map_err(|source| SimError::CommandFile {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Replaying commands from {:?}", path);
        self.run_batch(BufReader::new(file), out)
    }

    /// Executes every line of `input` in order until it runs out or a quit command is seen.
    ///
    /// With a visualizer attached, pauses for the configured frame delay after each change
    /// and draws the final state once more at the end.
    pub fn run_batch(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        self.interpreter.redraw()?;

        for line in input.lines() {
            let line = line?;
            let command = line.trim();
            if command.is_empty() {
                continue;
            }

            summary.lines += 1;
            let outcome = self.interpreter.execute(command, out)?;
            if outcome.changed {
                summary.changed += 1;
                self.pause();
            }
            if outcome.quit {
                summary.quit = true;
                break;
            }
        }

        self.interpreter.redraw()?;
        out.flush()?;
        info!(?summary, "Batch run finished");
        Ok(summary)
    }

    /// Prompts for and executes lines until end of input or a quit command.
    pub fn run_interactive(
        &mut self,
        mut input: impl BufRead,
        out: &mut impl Write,
    ) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        self.interpreter.redraw()?;

        let mut buf = String::new();
        loop {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            buf.clear();
            if input.read_line(&mut buf)? == 0 {
                write_interrupted(out)?;
                break;
            }
            let command = buf.trim();
            if command.is_empty() {
                continue;
            }

            summary.lines += 1;
            let outcome = self.interpreter.execute(command, out)?;
            if outcome.changed {
                summary.changed += 1;
            }
            if outcome.quit {
                summary.quit = true;
                writeln!(out, "{EXIT_NOTICE}")?;
                break;
            }
        }

        out.flush()?;
        info!(?summary, "Interactive session finished");
        Ok(summary)
    }

    fn pause(&self) {
        let delay = self.config.frame_delay();
        if self.interpreter.has_visualizer() && !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}
