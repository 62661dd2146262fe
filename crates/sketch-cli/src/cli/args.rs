//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! The same arg definition is reused across commands with different
//! visibility settings (via `.hide(true)`).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// File to convert (optional positional; absent runs the self-test).
pub fn convert_path_arg() -> Arg {
    Arg::new("path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Image (.pgm) or sketch (.sk) to convert")
}

/// Sketch program (required positional).
pub fn sketch_path_arg() -> Arg {
    Arg::new("path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Sketch program (.sk)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for instructions, -vv for registers)")
}

/// Drawing state continuation (--state).
pub fn state_arg() -> Arg {
    Arg::new("state")
        .long("state")
        .value_name("STATE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON file holding the playback position")
}

/// Number of frames to render (--frames).
pub fn frames_arg() -> Arg {
    Arg::new("frames")
        .long("frames")
        .value_name("N")
        .value_parser(value_parser!(u32).range(1..))
        .help("Render exactly N frames (default: until the program wraps)")
}

/// Write the canvas to a file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write the final canvas as PGM")
}
