//! Trace one frame of playback for debugging.

use std::path::PathBuf;

use sketch_vm::{Canvas, PrintTracer, Session, Verbosity};

use super::state_file;

pub struct TraceArgs {
    pub path: PathBuf,
    pub state: Option<PathBuf>,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let mut session = match Session::load(&args.path) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    // The saved position is read, never advanced: tracing is side-effect free.
    if let Some(path) = &args.state {
        match state_file::load(path) {
            Ok(state) => session = session.with_state(state),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }

    let mut tracer = PrintTracer::builder()
        .verbosity(args.verbosity)
        .colored(args.color)
        .build();
    let frame = session.render_with(&mut Canvas::new(), &mut tracer);
    tracer.print();

    if args.verbosity != Verbosity::Default {
        println!("{} instructions", frame.executed);
    }
}
