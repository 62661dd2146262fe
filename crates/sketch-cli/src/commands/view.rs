//! Headless playback: render frames onto a canvas, optionally saving the
//! canvas and the playback position.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use sketch_vm::{Canvas, ESCAPE, FrameEnd, Session, SessionError};

use super::state_file::{self, StateFileError};

pub struct ViewArgs {
    pub path: PathBuf,
    /// Exact frame count; `None` plays until the program wraps.
    pub frames: Option<u32>,
    pub state: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    State(#[from] StateFileError),
    #[error("could not write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a playback run did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewSummary {
    pub frames: usize,
    pub paused: u64,
}

pub fn run(args: ViewArgs) {
    match render(&args) {
        Ok(summary) => {
            println!(
                "{} frame(s) rendered, {} pause unit(s) requested",
                summary.frames, summary.paused
            );
            if let Some(output) = &args.output {
                println!("File {} has been written.", output.display());
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn render(args: &ViewArgs) -> Result<ViewSummary, ViewError> {
    let mut session = Session::load(&args.path)?;
    if let Some(path) = &args.state {
        session = session.with_state(state_file::load(path)?);
    }

    let mut canvas = Canvas::new();
    let mut remaining = args.frames;
    let frames = session.run(&mut canvas, |end| {
        let done = match remaining.as_mut() {
            Some(n) => {
                *n -= 1;
                *n == 0
            }
            None => end == FrameEnd::Exhausted,
        };
        done.then_some(ESCAPE)
    });

    if let Some(path) = &args.state {
        state_file::save(path, session.state())?;
    }
    if let Some(path) = &args.output {
        let output_err = |source| ViewError::Output {
            path: path.clone(),
            source,
        };
        let file = File::create(path).map_err(output_err)?;
        canvas
            .raster()
            .write_pgm(&mut BufWriter::new(file))
            .map_err(output_err)?;
    }

    Ok(ViewSummary {
        frames,
        paused: canvas.paused(),
    })
}
