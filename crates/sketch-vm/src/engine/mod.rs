//! Runtime engine for sketch playback.
//!
//! The VM executes one instruction at a time against a `Display`. Every
//! collaborator call is first described as a `DrawCommand`, which the tracer
//! sees before the display does.

mod canvas;
mod display;
mod effect;
mod session;
mod state;
mod trace;
mod vm;

#[cfg(test)]
mod session_tests;

pub use canvas::Canvas;
pub use display::Display;
pub use effect::{DrawCommand, DrawLog};
pub use session::{ESCAPE, Session, SessionError};
pub use state::{DrawTool, DrawingState};
pub use trace::{NoopTracer, PrintTracer, PrintTracerBuilder, Tracer, Verbosity};
pub use vm::{Frame, FrameEnd, VM};
