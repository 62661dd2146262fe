//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! The playback commands share their flags: `view` and `trace` accept each
//! other's options, with the irrelevant ones hidden from `--help`.

use clap::Command;

use super::args::*;

/// Add hidden view args (for commands that don't render a session).
fn with_hidden_view_args(cmd: Command) -> Command {
    cmd.arg(frames_arg().hide(true))
        .arg(output_file_arg().hide(true))
}

/// Add hidden trace args (for commands that don't trace).
fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("sketch")
        .about("Convert, inspect and play back sketch bytecode")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(convert_command())
        .subcommand(view_command())
        .subcommand(dump_command())
        .subcommand(trace_command())
}

/// Convert between PGM images and sketch programs.
pub fn convert_command() -> Command {
    Command::new("convert")
        .about("Convert a .pgm image to a .sk program or back")
        .override_usage(
            "\
  sketch convert <FILE>
  sketch convert",
        )
        .after_help(
            r#"EXAMPLES:
  sketch convert bands.pgm     # writes bands.sk
  sketch convert bands.sk      # writes bands.pgm
  sketch convert               # check the field packing"#,
        )
        .arg(convert_path_arg())
}

/// Play a sketch program onto a headless canvas.
pub fn view_command() -> Command {
    let cmd = Command::new("view")
        .about("Play a sketch program onto a headless canvas")
        .override_usage(
            "\
  sketch view <FILE> [--frames <N>] [--state <STATE>] [-o <FILE>]",
        )
        .after_help(
            r#"EXAMPLES:
  sketch view bands.sk -o out.pgm          # play once, save the canvas
  sketch view anim.sk --frames 1 --state anim.json
                                           # advance one frame per call"#,
        )
        .arg(sketch_path_arg())
        .arg(frames_arg())
        .arg(state_arg())
        .arg(output_file_arg());

    with_hidden_trace_args(cmd.arg(color_arg().hide(true)))
}

/// Show a sketch program as an instruction listing.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show a sketch program as an instruction listing")
        .override_usage(
            "\
  sketch dump <FILE>",
        )
        .arg(sketch_path_arg())
        .arg(color_arg())
}

/// Trace one frame of execution.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace one frame of execution for debugging")
        .override_usage(
            "\
  sketch trace <FILE> [--state <STATE>] [-v]",
        )
        .after_help(
            r#"EXAMPLES:
  sketch trace anim.sk                     # draw commands only
  sketch trace anim.sk -v                  # every instruction
  sketch trace anim.sk -vv --state s.json  # registers, from a saved position"#,
        )
        .arg(sketch_path_arg())
        .arg(state_arg())
        .arg(verbose_arg())
        .arg(color_arg());

    with_hidden_view_args(cmd)
}
