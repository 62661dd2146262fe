//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use sketch_vm::Verbosity;

use super::ColorChoice;
use crate::commands::convert::ConvertArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::trace::TraceArgs;
use crate::commands::view::ViewArgs;

pub struct ConvertParams {
    pub path: Option<PathBuf>,
}

impl ConvertParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: m.get_one::<PathBuf>("path").cloned(),
        }
    }
}

impl From<ConvertParams> for ConvertArgs {
    fn from(p: ConvertParams) -> Self {
        Self { path: p.path }
    }
}

pub struct ViewParams {
    pub path: PathBuf,
    pub frames: Option<u32>,
    pub state: Option<PathBuf>,
    pub output: Option<PathBuf>,
    // Note: verbose and color are parsed but not extracted (shared flags)
}

impl ViewParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: required_path(m),
            frames: m.get_one::<u32>("frames").copied(),
            state: m.get_one::<PathBuf>("state").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<ViewParams> for ViewArgs {
    fn from(p: ViewParams) -> Self {
        Self {
            path: p.path,
            frames: p.frames,
            state: p.state,
            output: p.output,
        }
    }
}

pub struct DumpParams {
    pub path: PathBuf,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: required_path(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            path: p.path,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub path: PathBuf,
    pub state: Option<PathBuf>,
    pub verbose: u8,
    pub color: ColorChoice,
    // Note: frames and output are parsed but not extracted (shared flags)
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: required_path(m),
            state: m.get_one::<PathBuf>("state").cloned(),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            path: p.path,
            state: p.state,
            verbosity,
            color: p.color.should_colorize(),
        }
    }
}

/// The positional program path; clap enforces its presence.
fn required_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("path").cloned().unwrap_or_default()
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
