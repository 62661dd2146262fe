//! ANSI color codes for terminal output.
//!
//! Semantic colors used by the disassembler and the execution tracer:
//! - Blue: mnemonics and tool names
//! - Green: decoded values (accumulator, coordinates)
//! - Yellow: draw side effects
//! - Dim: offsets, raw bytes, structure

/// ANSI color palette for CLI output.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        yellow: "\x1b[33m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        yellow: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// Wrap `text` in `color` followed by a reset.
    pub fn paint(&self, color: &str, text: impl std::fmt::Display) -> String {
        format!("{color}{text}{}", self.reset)
    }
}
