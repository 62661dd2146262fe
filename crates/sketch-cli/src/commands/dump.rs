use std::path::PathBuf;

use sketch_bytecode::{Colors, dump};

pub struct DumpArgs {
    pub path: PathBuf,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let program = match std::fs::read(&args.path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: {}: {}", args.path.display(), e);
            std::process::exit(1);
        }
    };

    let colors = Colors::new(args.color);
    print!("{}", dump(&program, colors));
}
