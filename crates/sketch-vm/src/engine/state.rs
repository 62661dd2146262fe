//! Drawing state carried between instructions and between frames.

use serde::{Deserialize, Serialize};

/// Tool applied when a `DY` instruction commits the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawTool {
    None,
    #[default]
    Line,
    Block,
}

impl DrawTool {
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Line => "LINE",
            Self::Block => "BLOCK",
        }
    }
}

/// Interpreter registers.
///
/// Doubles as the continuation handed from one frame to the next: only
/// `start` survives a suspension, everything else starts fresh.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawingState {
    /// Committed cursor.
    pub x: i32,
    pub y: i32,
    /// Target the next draw runs to.
    pub tx: i32,
    pub ty: i32,
    pub tool: DrawTool,
    /// Offset of the next instruction to execute.
    pub start: usize,
    /// Six-bit fields shifted in by DATA, low 32 bits kept.
    pub data: u32,
    /// Set by `NEXTFRAME`.
    pub end: bool,
}

impl DrawingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh registers that resume at `start`.
    pub fn resumed_at(start: usize) -> Self {
        Self {
            start,
            ..Self::default()
        }
    }
}
