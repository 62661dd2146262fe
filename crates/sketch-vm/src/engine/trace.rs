//! Tracing infrastructure for debugging VM execution.
//!
//! The tracer is a zero-cost abstraction: every `NoopTracer` method is an
//! `#[inline(always)]` empty function, so an untraced frame compiles down to
//! the bare interpreter loop. `PrintTracer` collects formatted lines instead.

use sketch_bytecode::{Colors, Instruction};

use super::effect::DrawCommand;
use super::state::DrawingState;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Draw commands and frame boundaries only.
    #[default]
    Default,
    /// Verbose (-v): every instruction as well.
    Verbose,
    /// Very verbose (-vv): registers after every instruction.
    VeryVerbose,
}

/// Tracer trait for VM execution instrumentation.
///
/// Each method is called at a specific point during execution:
/// - `trace_instruction` - before executing an instruction
/// - `trace_effect` - before a command reaches the display
/// - `trace_state` - after an instruction has updated the registers
/// - `trace_suspend` - when a frame stops at `NEXTFRAME`
/// - `trace_exhausted` - when a frame runs off the end of the program
pub trait Tracer {
    fn trace_instruction(&mut self, offset: usize, instr: Instruction);

    fn trace_effect(&mut self, command: &DrawCommand);

    fn trace_state(&mut self, state: &DrawingState);

    /// `resume_at` is where the next frame starts.
    fn trace_suspend(&mut self, resume_at: usize);

    /// `offset` is where the program ran out.
    fn trace_exhausted(&mut self, offset: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_instruction(&mut self, _offset: usize, _instr: Instruction) {}

    #[inline(always)]
    fn trace_effect(&mut self, _command: &DrawCommand) {}

    #[inline(always)]
    fn trace_state(&mut self, _state: &DrawingState) {}

    #[inline(always)]
    fn trace_suspend(&mut self, _resume_at: usize) {}

    #[inline(always)]
    fn trace_exhausted(&mut self, _offset: usize) {}
}

/// Width of the offset column.
const OFFSET_WIDTH: usize = 4;

/// Tracer that collects execution trace for debugging.
pub struct PrintTracer {
    verbosity: Verbosity,
    lines: Vec<String>,
    colors: Colors,
}

/// Builder for `PrintTracer`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrintTracerBuilder {
    verbosity: Verbosity,
    colored: bool,
}

impl PrintTracerBuilder {
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Emit ANSI colors.
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn build(self) -> PrintTracer {
        PrintTracer {
            verbosity: self.verbosity,
            lines: Vec::new(),
            colors: Colors::new(self.colored),
        }
    }
}

impl PrintTracer {
    pub fn builder() -> PrintTracerBuilder {
        PrintTracerBuilder::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines, newline-terminated.
    pub fn output(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    /// Sub-line under the instruction column.
    fn add_subline(&mut self, content: String) {
        let indent = OFFSET_WIDTH + 2;
        self.lines.push(format!("{:indent$}{content}", ""));
    }
}

impl Tracer for PrintTracer {
    fn trace_instruction(&mut self, offset: usize, instr: Instruction) {
        // Instruction lines hidden in default verbosity
        if self.verbosity == Verbosity::Default {
            return;
        }

        let c = self.colors;
        let operand = match instr {
            Instruction::Dx(d) | Instruction::Dy(d) => d.to_string(),
            Instruction::Tool(op) => op.name().to_string(),
            Instruction::UnknownTool(n) => format!("?{n}"),
            Instruction::Data(v) => v.to_string(),
        };
        self.lines.push(format!(
            "{}{offset:0w$}{}  {}{:<4}{} {operand}",
            c.dim,
            c.reset,
            c.blue,
            instr.opcode().mnemonic(),
            c.reset,
            w = OFFSET_WIDTH,
        ));
    }

    fn trace_effect(&mut self, command: &DrawCommand) {
        let line = self.colors.paint(self.colors.yellow, command);
        self.add_subline(line);
    }

    fn trace_state(&mut self, state: &DrawingState) {
        if self.verbosity != Verbosity::VeryVerbose {
            return;
        }

        let registers = format!(
            "x={} y={} tx={} ty={} tool={} data={:#x}",
            state.x,
            state.y,
            state.tx,
            state.ty,
            state.tool.name(),
            state.data
        );
        let line = self.colors.paint(self.colors.dim, registers);
        self.add_subline(line);
    }

    fn trace_suspend(&mut self, resume_at: usize) {
        let line = format!("-- next frame at {resume_at} --");
        self.lines.push(self.colors.paint(self.colors.green, line));
    }

    fn trace_exhausted(&mut self, offset: usize) {
        let line = format!("-- end of program at {offset}, rewinding --");
        self.lines.push(self.colors.paint(self.colors.green, line));
    }
}
