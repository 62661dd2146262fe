mod cli;
mod commands;

use cli::{ConvertParams, DumpParams, TraceParams, ViewParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("convert", m)) => {
            let params = ConvertParams::from_matches(m);
            commands::convert::run(params.into());
        }
        Some(("view", m)) => {
            let params = ViewParams::from_matches(m);
            commands::view::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
