//! Command-line front end for the grid robot.
//!
//! Usage:
//!   grid-robot commands.txt          # replay a file
//!   grid-robot commands.txt --plot   # replay with an ASCII grid after each change
//!   grid-robot                       # interactive prompt

use anyhow::{Context, Result};
use clap::Parser;
use grid_robot::{
    AsciiGrid, CommandInterpreter, Robot, Session, SimulatorConfig, write_interrupted,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Toy robot simulator on a bounded grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one command per line; starts an interactive prompt when omitted
    commands_file: Option<PathBuf>,

    /// Draw the grid after every change
    #[arg(long)]
    plot: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pause between frames in batch mode, in milliseconds
    #[arg(long)]
    frame_delay_ms: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("grid_robot={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Ctrl+C ends the prompt the same way end of input does.
///
/// The handler exits the process itself: the main thread is blocked reading stdin
/// and would not observe a flag.
fn setup_ctrl_c_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        let _ = write_interrupted(&mut io::stdout());
        std::process::exit(0);
    })
    .context("installing Ctrl+C handler")
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            SimulatorConfig::load(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?
        }
        None => SimulatorConfig::default(),
    };
    if let Some(delay) = args.frame_delay_ms {
        config.session.frame_delay_ms = delay;
    }

    let mut interpreter = CommandInterpreter::new(Robot::new(config.grid.into()));
    if args.plot {
        interpreter = interpreter.with_visualizer(Box::new(AsciiGrid::new(io::stdout())));
    }
    let mut session = Session::new(interpreter, config.session);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Grid Robot Simulator")?;
    writeln!(out, "Commands: PLACE X,Y,FACING | MOVE | LEFT | RIGHT | REPORT | QUIT")?;
    let plot_mode = if args.plot {
        "ENABLED (--plot)"
    } else {
        "DISABLED (use --plot)"
    };
    writeln!(out, "Plot mode: {plot_mode}")?;
    writeln!(out)?;
    // The visualizer writes to stdout too; release the lock before it draws.
    drop(out);

    match &args.commands_file {
        Some(path) => {
            session.run_file(path, &mut io::stdout())?;
        }
        None => {
            setup_ctrl_c_handler()?;
            println!("Interactive mode. Type commands (Ctrl+C or QUIT to exit).");
            session.run_interactive(io::stdin().lock(), &mut io::stdout())?;
        }
    }
    Ok(())
}
