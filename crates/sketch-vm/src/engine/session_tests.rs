use std::fs;

use sketch_bytecode::{Instruction, ToolOp};

use super::canvas::Canvas;
use super::effect::{DrawCommand, DrawLog};
use super::session::{ESCAPE, Session, SessionError};
use super::state::DrawingState;
use super::vm::FrameEnd;

const NEXT_FRAME: u8 = 0b10_000000 | ToolOp::NextFrame as u8;

fn dx(d: i8) -> u8 {
    Instruction::Dx(d).to_byte()
}

fn dy(d: i8) -> u8 {
    Instruction::Dy(d).to_byte()
}

fn two_frames() -> Vec<u8> {
    vec![dx(1), dy(1), NEXT_FRAME, dx(2), dy(2)]
}

#[test]
fn process_reports_escape() {
    let mut session = Session::new(two_frames());
    let mut log = DrawLog::new();

    assert!(!session.process(&mut log, None));
    assert_eq!(session.state(), &DrawingState::resumed_at(3));

    assert!(!session.process(&mut log, Some(b'q')));
    assert_eq!(session.state(), &DrawingState::new());

    assert!(session.process(&mut log, Some(ESCAPE)));
    assert_eq!(log.len(), 6);
}

#[test]
fn escape_still_renders_the_frame() {
    let mut session = Session::new(two_frames());
    let mut log = DrawLog::new();
    assert!(session.process(&mut log, Some(ESCAPE)));
    assert_eq!(
        log.as_slice(),
        [
            DrawCommand::Line {
                x0: 0,
                y0: 0,
                x1: 1,
                y1: 1
            },
            DrawCommand::Show
        ]
    );
}

#[test]
fn run_until_stream_wraps() {
    let mut session = Session::new(two_frames());
    let mut canvas = Canvas::new();
    let frames = session.run(&mut canvas, |end| (end == FrameEnd::Exhausted).then_some(ESCAPE));
    assert_eq!(frames, 2);
    assert_eq!(canvas.frames_shown(), 2);
}

#[test]
fn run_stops_after_fixed_frame_count() {
    let mut session = Session::new(two_frames());
    let mut log = DrawLog::new();
    let mut remaining = 5;
    let frames = session.run(&mut log, |_| {
        remaining -= 1;
        (remaining == 0).then_some(ESCAPE)
    });
    assert_eq!(frames, 5);
    assert_eq!(session.state(), &DrawingState::resumed_at(3));
}

#[test]
fn resumes_from_saved_state() {
    let mut session = Session::new(two_frames()).with_state(DrawingState::resumed_at(3));
    let mut log = DrawLog::new();
    session.process(&mut log, None);
    assert_eq!(
        log.as_slice()[0],
        DrawCommand::Line {
            x0: 0,
            y0: 0,
            x1: 2,
            y1: 2
        }
    );
}

#[test]
fn load_reads_program() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frames.sk");
    fs::write(&path, two_frames()).unwrap();

    let session = Session::load(&path).unwrap();
    assert_eq!(session.program(), two_frames());
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.sk");

    let err = Session::load(&path).unwrap_err();
    assert!(matches!(err, SessionError::Io { .. }));
    assert_eq!(err.to_string(), format!("could not read {}", path.display()));
}
