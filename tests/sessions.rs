// tests/sessions.rs
use grid_robot::{
    AsciiGrid, CommandInterpreter, EXIT_NOTICE, Grid, Heading, NOT_PLACED_ADVISORY, Pose, Robot,
    Session, SessionConfig, SessionSummary, SimError, Visualizer, write_interrupted,
};
use std::cell::RefCell;
use std::io::{Cursor, Write};
use std::rc::Rc;

/// Records every pose it is asked to draw.
#[derive(Clone, Default)]
struct Recorder {
    frames: Rc<RefCell<Vec<Option<Pose>>>>,
}

impl Visualizer for Recorder {
    fn render(&mut self, _grid: Grid, pose: Option<&Pose>) -> grid_robot::Result<()> {
        self.frames.borrow_mut().push(pose.copied());
        Ok(())
    }
}

fn quiet_config() -> SessionConfig {
    SessionConfig {
        frame_delay_ms: 0,
        ..SessionConfig::default()
    }
}

fn session() -> Session {
    Session::new(CommandInterpreter::new(Robot::default()), quiet_config())
}

#[test]
fn test_batch_replays_in_order() {
    let input = "PLACE 0,0,NORTH\nMOVE\nREPORT\n\n  \nPLACE 1,2,EAST\nMOVE\nMOVE\nLEFT\nMOVE\nREPORT\n";
    let mut out = Vec::new();
    let summary = session().run_batch(Cursor::new(input), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "0,1,NORTH\n3,3,NORTH\n");
    assert_eq!(
        summary,
        SessionSummary {
            lines: 9,
            changed: 7,
            quit: false
        }
    );
}

#[test]
fn test_batch_stops_at_quit() {
    let input = "report\nplace 2,2,west\nquit\nmove\nreport\n";
    let mut out = Vec::new();
    let mut session = session();
    let summary = session.run_batch(Cursor::new(input), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), format!("{NOT_PLACED_ADVISORY}\n"));
    assert!(summary.quit);
    assert_eq!(summary.lines, 3);
    assert_eq!(
        session.interpreter().robot().report().as_deref(),
        Some("2,2,WEST")
    );
}

#[test]
fn test_run_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "PLACE 6,6,NORTH").unwrap();
    writeln!(file, "REPORT").unwrap();
    writeln!(file, "PLACE 0,0,SOUTH").unwrap();
    writeln!(file, "MOVE").unwrap();
    writeln!(file, "REPORT").unwrap();
    file.flush().unwrap();

    let mut out = Vec::new();
    session().run_file(file.path(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{NOT_PLACED_ADVISORY}\n0,0,SOUTH\n")
    );
}

#[test]
fn test_run_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = session().run_file(&path, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, SimError::CommandFile { .. }));
    assert_eq!(
        err.to_string(),
        format!("file '{}' not found", path.display())
    );

    // The io error is the source, so a report chain names it exactly once.
    let source = std::error::Error::source(&err).unwrap().to_string();
    let chain = format!("{:#}", anyhow::Error::from(err));
    assert_eq!(chain, format!("file '{}' not found: {source}", path.display()));
}

#[test]
fn test_interactive_prompts_until_eof() {
    let input = "PLACE 1,1,NORTH\n\nREPORT\n";
    let mut out = Vec::new();
    let summary = session()
        .run_interactive(Cursor::new(input), &mut out)
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        ">> >> >> 1,1,NORTH\n>> \nExiting...\n"
    );
    assert_eq!(
        summary,
        SessionSummary {
            lines: 2,
            changed: 1,
            quit: false
        }
    );
}

#[test]
fn test_interactive_quit() {
    let config = SessionConfig {
        prompt: "robot> ".into(),
        ..quiet_config()
    };
    let mut session = Session::new(CommandInterpreter::new(Robot::default()), config);
    let mut out = Vec::new();
    let summary = session
        .run_interactive(Cursor::new("move\nexit\nreport\n"), &mut out)
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("robot> {NOT_PLACED_ADVISORY}\nrobot> Exiting...\n")
    );
    assert!(summary.quit);
}

#[test]
fn test_interrupt_ends_the_prompt_line() {
    let mut out = Vec::new();
    write!(out, ">> ").unwrap();
    write_interrupted(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), format!(">> \n{EXIT_NOTICE}\n"));
}

#[test]
fn test_visualizer_sees_each_change() {
    let recorder = Recorder::default();
    let interpreter =
        CommandInterpreter::new(Robot::default()).with_visualizer(Box::new(recorder.clone()));
    let mut session = Session::new(interpreter, quiet_config());

    let input = "MOVE\nPLACE 0,0,SOUTH\nMOVE\nLEFT\nREPORT\n";
    session.run_batch(Cursor::new(input), &mut Vec::new()).unwrap();

    let placed = |heading| {
        Some(Pose {
            position: glam::IVec2::ZERO,
            heading,
        })
    };
    // Initial empty grid, PLACE, LEFT, then the final frame.
    assert_eq!(
        *recorder.frames.borrow(),
        vec![
            None,
            placed(Heading::South),
            placed(Heading::East),
            placed(Heading::East),
        ]
    );
}

#[test]
fn test_ascii_grid_draws_robot() {
    let mut grid = AsciiGrid::new(Vec::new());
    let pose = Pose {
        position: glam::IVec2::new(1, 2),
        heading: Heading::North,
    };
    grid.render(Grid::default(), Some(&pose)).unwrap();
    grid.render(Grid::new(3, 1), None).unwrap();

    let expected = "\
. . . . .
. . . . .
. ^ . . .
. . . . .
. . . . .
1,2,NORTH

. . .
(not placed)

";
    assert_eq!(String::from_utf8(grid.into_inner()).unwrap(), expected);
}

#[test]
fn test_ascii_grid_glyphs() {
    for (heading, glyph) in [
        (Heading::North, '^'),
        (Heading::East, '>'),
        (Heading::South, 'v'),
        (Heading::West, '<'),
    ] {
        let mut grid = AsciiGrid::new(Vec::new());
        let pose = Pose {
            position: glam::IVec2::ZERO,
            heading,
        };
        grid.render(Grid::new(1, 1), Some(&pose)).unwrap();
        let text = String::from_utf8(grid.into_inner()).unwrap();
        assert!(text.starts_with(glyph), "{heading}: {text}");
    }
}
