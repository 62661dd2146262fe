//! Draw commands: the VM's side effects as values.
//!
//! Every collaborator call is built as a `DrawCommand` first so the tracer
//! can see it; `DrawLog` keeps them instead of drawing.

use std::fmt;

use super::display::Display;

/// A single call on the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    Line { x0: i32, y0: i32, x1: i32, y1: i32 },
    Block { x: i32, y: i32, width: i32, height: i32 },
    Colour(u32),
    Show,
    Pause(u32),
}

impl DrawCommand {
    /// Forward to a display.
    pub fn apply<D: Display + ?Sized>(self, display: &mut D) {
        match self {
            Self::Line { x0, y0, x1, y1 } => display.line(x0, y0, x1, y1),
            Self::Block {
                x,
                y,
                width,
                height,
            } => display.block(x, y, width, height),
            Self::Colour(rgba) => display.colour(rgba),
            Self::Show => display.show(),
            Self::Pause(units) => display.pause(units),
        }
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Line { x0, y0, x1, y1 } => write!(f, "line {x0},{y0} -> {x1},{y1}"),
            Self::Block {
                x,
                y,
                width,
                height,
            } => write!(f, "block {x},{y} {width}x{height}"),
            Self::Colour(rgba) => write!(f, "colour #{rgba:08x}"),
            Self::Show => f.write_str("show"),
            Self::Pause(units) => write!(f, "pause {units}"),
        }
    }
}

/// Display that records what it was asked to do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawLog(Vec<DrawCommand>);

impl DrawLog {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn push(&mut self, command: DrawCommand) {
        self.0.push(command);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[DrawCommand] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<DrawCommand> {
        self.0
    }

    /// One command per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for command in &self.0 {
            out.push_str(&command.to_string());
            out.push('\n');
        }
        out
    }
}

impl Display for DrawLog {
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        self.push(DrawCommand::Line { x0, y0, x1, y1 });
    }

    fn block(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.push(DrawCommand::Block {
            x,
            y,
            width,
            height,
        });
    }

    fn colour(&mut self, rgba: u32) {
        self.push(DrawCommand::Colour(rgba));
    }

    fn show(&mut self) {
        self.push(DrawCommand::Show);
    }

    fn pause(&mut self, units: u32) {
        self.push(DrawCommand::Pause(units));
    }
}
