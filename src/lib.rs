//! # grid-robot
//!
//! A single robot on a bounded grid (5×5 by default), driven by a small text protocol:
//! `PLACE X,Y,FACING`, `MOVE`, `LEFT`, `RIGHT`, `REPORT` and `QUIT`.
//!
//! The [`Robot`] state machine is the whole of the logic and has no I/O. The
//! [`CommandInterpreter`] maps protocol lines onto it, a [`Session`] feeds the
//! interpreter from a file or an interactive prompt, and an optional [`Visualizer`]
//! observes every change.

pub mod command;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod robot;
pub mod session;
pub mod visualizer;

pub use command::*;
pub use config::*;
pub use error::{Result, SimError};
pub use interpreter::*;
pub use robot::*;
pub use session::*;
pub use visualizer::*;
