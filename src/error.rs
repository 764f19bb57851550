//! Error types for the simulator plumbing.
//!
//! The robot itself never errors; these cover I/O on command sources, output
//! streams and configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// Failures outside the robot. The `Display` text never repeats the underlying
/// `source`; report chains (`{:#}` on `anyhow::Error`) append it once.
#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{}", command_file_message(.path, .source))]
    CommandFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

fn command_file_message(path: &std::path::Path, source: &std::io::Error) -> String {
    match source.kind() {
        std::io::ErrorKind::NotFound => format!("file '{}' not found", path.display()),
        _ => format!("cannot read file '{}'", path.display()),
    }
}

impl From<toml::de::Error> for SimError {
    fn from(e: toml::de::Error) -> Self {
        SimError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
