//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Shared flags: view/trace accept each other's flags without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Argument counts: missing or extra positionals are rejected
//! 4. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use clap::error::ErrorKind;
use sketch_vm::Verbosity;

use super::*;
use crate::cli::commands::{convert_command, dump_command, trace_command, view_command};
use crate::commands::trace::TraceArgs;

#[test]
fn convert_without_file_runs_self_test() {
    let m = convert_command().try_get_matches_from(["convert"]).unwrap();
    let params = ConvertParams::from_matches(&m);
    assert_eq!(params.path, None);
}

#[test]
fn convert_with_file() {
    let m = convert_command()
        .try_get_matches_from(["convert", "bands.pgm"])
        .unwrap();
    let params = ConvertParams::from_matches(&m);
    assert_eq!(params.path, Some(PathBuf::from("bands.pgm")));
}

#[test]
fn convert_rejects_second_file() {
    let err = convert_command()
        .try_get_matches_from(["convert", "a.pgm", "b.pgm"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn view_requires_file() {
    let err = view_command().try_get_matches_from(["view"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn view_params() {
    let m = view_command()
        .try_get_matches_from([
            "view", "anim.sk", "--frames", "3", "--state", "s.json", "-o", "out.pgm",
        ])
        .unwrap();
    let params = ViewParams::from_matches(&m);
    assert_eq!(params.path, PathBuf::from("anim.sk"));
    assert_eq!(params.frames, Some(3));
    assert_eq!(params.state, Some(PathBuf::from("s.json")));
    assert_eq!(params.output, Some(PathBuf::from("out.pgm")));
}

#[test]
fn view_rejects_zero_frames() {
    let err = view_command()
        .try_get_matches_from(["view", "anim.sk", "--frames", "0"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn view_accepts_trace_flags() {
    let result = view_command().try_get_matches_from(["view", "anim.sk", "-vv", "--color", "never"]);
    assert!(
        result.is_ok(),
        "view should accept trace flags: {:?}",
        result.err()
    );
}

#[test]
fn trace_accepts_view_flags() {
    let result =
        trace_command().try_get_matches_from(["trace", "anim.sk", "--frames", "2", "-o", "x.pgm"]);
    assert!(
        result.is_ok(),
        "trace should accept view flags: {:?}",
        result.err()
    );
}

#[test]
fn trace_verbosity_levels() {
    for (flags, expected) in [
        (&[][..], Verbosity::Default),
        (&["-v"][..], Verbosity::Verbose),
        (&["-vvv"][..], Verbosity::VeryVerbose),
    ] {
        let argv = ["trace", "anim.sk"].into_iter().chain(flags.iter().copied());
        let m = trace_command().try_get_matches_from(argv).unwrap();
        let args: TraceArgs = TraceParams::from_matches(&m).into();
        assert_eq!(args.verbosity, expected, "flags {flags:?}");
    }
}

#[test]
fn color_choice() {
    let m = dump_command()
        .try_get_matches_from(["dump", "anim.sk", "--color", "always"])
        .unwrap();
    assert_eq!(DumpParams::from_matches(&m).color, ColorChoice::Always);

    let m = dump_command().try_get_matches_from(["dump", "anim.sk"]).unwrap();
    assert_eq!(DumpParams::from_matches(&m).color, ColorChoice::Auto);

    let err = dump_command()
        .try_get_matches_from(["dump", "anim.sk", "--color", "sometimes"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn dump_rejects_playback_flags() {
    let err = dump_command()
        .try_get_matches_from(["dump", "anim.sk", "--frames", "2"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn view_help_hides_trace_flags() {
    let help = view_command().render_help().to_string();
    assert!(help.contains("--frames"));
    assert!(!help.contains("-v"));
    assert!(!help.contains("--color"));
}

#[test]
fn trace_help_hides_view_flags() {
    let help = trace_command().render_help().to_string();
    assert!(help.contains("--state"));
    assert!(!help.contains("--frames"));
    assert!(!help.contains("--output"));
}

#[test]
fn subcommand_required() {
    let err = build_cli().try_get_matches_from(["sketch"]).unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
}
