//! Frame-by-frame playback of a loaded program.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::display::Display;
use super::state::DrawingState;
use super::trace::{NoopTracer, Tracer};
use super::vm::{Frame, FrameEnd, VM};

/// Key code that stops playback.
pub const ESCAPE: u8 = 27;

/// Errors from loading a program.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("could not read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A program plus where playback currently is.
///
/// The program is read once; every frame after that resumes from the
/// continuation left by the previous one.
#[derive(Clone, Debug, Default)]
pub struct Session {
    program: Vec<u8>,
    state: DrawingState,
}

impl Session {
    pub fn new(program: Vec<u8>) -> Self {
        Self {
            program,
            state: DrawingState::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let program = fs::read(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(program))
    }

    /// Resume from a saved continuation instead of the beginning.
    pub fn with_state(mut self, state: DrawingState) -> Self {
        self.state = state;
        self
    }

    pub fn program(&self) -> &[u8] {
        &self.program
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn into_state(self) -> DrawingState {
        self.state
    }

    /// Render one frame and report whether `pressed_key` asks to stop.
    pub fn process<D: Display>(&mut self, display: &mut D, pressed_key: Option<u8>) -> bool {
        self.render_with(display, &mut NoopTracer);
        pressed_key == Some(ESCAPE)
    }

    /// Render one frame with a tracer and keep its continuation.
    pub fn render_with<D: Display, T: Tracer>(&mut self, display: &mut D, tracer: &mut T) -> Frame {
        let state = std::mem::take(&mut self.state);
        let frame = VM::resume(state).render_frame_with(&self.program, display, tracer);
        self.state = frame.continuation.clone();
        frame
    }

    /// Render frames until the key source reports escape.
    ///
    /// `key` is polled after every frame with how that frame ended. Returns
    /// the number of frames rendered.
    pub fn run<D, K>(&mut self, display: &mut D, mut key: K) -> usize
    where
        D: Display,
        K: FnMut(FrameEnd) -> Option<u8>,
    {
        let mut frames = 0;
        loop {
            let frame = self.render_with(display, &mut NoopTracer);
            frames += 1;
            if key(frame.end) == Some(ESCAPE) {
                return frames;
            }
        }
    }
}
