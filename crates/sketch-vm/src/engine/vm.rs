//! Virtual machine for replaying sketch bytecode.

use sketch_bytecode::{Instruction, ToolOp};

use super::display::Display;
use super::effect::DrawCommand;
use super::state::{DrawTool, DrawingState};
use super::trace::{NoopTracer, Tracer};

/// How a frame stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameEnd {
    /// `NEXTFRAME` was executed; the program continues in the next frame.
    Suspended,
    /// The program ran out; the next frame starts over.
    Exhausted,
}

/// Outcome of rendering one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub end: FrameEnd,
    /// Instructions executed during the frame.
    pub executed: usize,
    /// State to resume from.
    pub continuation: DrawingState,
}

/// Interpreter over a single set of registers.
#[derive(Clone, Debug, Default)]
pub struct VM {
    state: DrawingState,
}

impl VM {
    /// Fresh registers at offset 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue from a saved state.
    pub fn resume(state: DrawingState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn into_state(self) -> DrawingState {
        self.state
    }

    /// Execute one instruction byte.
    pub fn obey<D: Display>(&mut self, byte: u8, display: &mut D) {
        self.obey_with(byte, display, &mut NoopTracer);
    }

    /// Execute one instruction byte with a tracer.
    pub fn obey_with<D: Display, T: Tracer>(&mut self, byte: u8, display: &mut D, tracer: &mut T) {
        let instr = Instruction::decode(byte);
        tracer.trace_instruction(self.state.start, instr);

        match instr {
            Instruction::Dx(d) => self.state.tx = self.state.tx.wrapping_add(d as i32),
            Instruction::Dy(d) => {
                self.state.ty = self.state.ty.wrapping_add(d as i32);
                self.draw(display, tracer);
            }
            Instruction::Tool(op) => {
                self.exec_tool(op, display, tracer);
                self.state.data = 0;
            }
            // Unassigned sub-opcodes leave the registers alone.
            Instruction::UnknownTool(_) => {}
            Instruction::Data(v) => self.state.data = (self.state.data << 6) | v as u32,
        }

        self.state.start += 1;
        tracer.trace_state(&self.state);
    }

    /// Render one frame of `program`.
    ///
    /// Convenience wrapper around `render_frame_with` using `NoopTracer`.
    pub fn render_frame<D: Display>(self, program: &[u8], display: &mut D) -> Frame {
        self.render_frame_with(program, display, &mut NoopTracer)
    }

    /// Render one frame with a tracer.
    ///
    /// Runs from `start` until `NEXTFRAME` or the end of `program`, then shows
    /// the frame. A suspended frame resumes after the `NEXTFRAME`; an exhausted
    /// one rewinds to the beginning with fresh registers.
    pub fn render_frame_with<D: Display, T: Tracer>(
        mut self,
        program: &[u8],
        display: &mut D,
        tracer: &mut T,
    ) -> Frame {
        self.state.end = false;
        let first = self.state.start;

        while let Some(&byte) = program.get(self.state.start) {
            self.obey_with(byte, display, tracer);
            if self.state.end {
                break;
            }
        }
        emit(DrawCommand::Show, display, tracer);

        let executed = self.state.start.saturating_sub(first);
        if self.state.end {
            tracer.trace_suspend(self.state.start);
            Frame {
                end: FrameEnd::Suspended,
                executed,
                continuation: DrawingState::resumed_at(self.state.start),
            }
        } else {
            tracer.trace_exhausted(self.state.start);
            Frame {
                end: FrameEnd::Exhausted,
                executed,
                continuation: DrawingState::new(),
            }
        }
    }

    /// `DY` tail: draw from the cursor to the target, then commit.
    fn draw<D: Display, T: Tracer>(&mut self, display: &mut D, tracer: &mut T) {
        let s = &self.state;
        let command = match s.tool {
            DrawTool::Line => Some(DrawCommand::Line {
                x0: s.x,
                y0: s.y,
                x1: s.tx,
                y1: s.ty,
            }),
            DrawTool::Block => Some(DrawCommand::Block {
                x: s.x,
                y: s.y,
                width: s.tx.wrapping_sub(s.x),
                height: s.ty.wrapping_sub(s.y),
            }),
            DrawTool::None => None,
        };
        if let Some(command) = command {
            emit(command, display, tracer);
        }
        self.state.x = self.state.tx;
        self.state.y = self.state.ty;
    }

    fn exec_tool<D: Display, T: Tracer>(&mut self, op: ToolOp, display: &mut D, tracer: &mut T) {
        let data = self.state.data;
        match op {
            ToolOp::None => self.state.tool = DrawTool::None,
            ToolOp::Line => self.state.tool = DrawTool::Line,
            ToolOp::Block => self.state.tool = DrawTool::Block,
            ToolOp::Colour => emit(DrawCommand::Colour(data), display, tracer),
            ToolOp::TargetX => self.state.tx = data as i32,
            ToolOp::TargetY => self.state.ty = data as i32,
            ToolOp::Show => emit(DrawCommand::Show, display, tracer),
            ToolOp::Pause => emit(DrawCommand::Pause(data), display, tracer),
            ToolOp::NextFrame => self.state.end = true,
        }
    }
}

#[inline]
fn emit<D: Display, T: Tracer>(command: DrawCommand, display: &mut D, tracer: &mut T) {
    tracer.trace_effect(&command);
    command.apply(display);
}
