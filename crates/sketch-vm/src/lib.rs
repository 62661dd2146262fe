//! Runtime VM for replaying sketch bytecode.
//!
//! This crate provides the interpreter that executes sketch instructions
//! against a display collaborator, suspending at frame boundaries and
//! handing back a serializable continuation.

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    Canvas, Display, DrawCommand, DrawLog, DrawTool, DrawingState, ESCAPE, Frame, FrameEnd,
    NoopTracer, PrintTracer, PrintTracerBuilder, Session, SessionError, Tracer, VM, Verbosity,
};
