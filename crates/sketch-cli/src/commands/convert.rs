//! Convert between PGM images and sketch programs.

use std::path::PathBuf;

use sketch_bytecode::verify_known_vectors;
use sketch_convert::{ConvertError, convert_file};

pub struct ConvertArgs {
    pub path: Option<PathBuf>,
}

pub fn run(args: ConvertArgs) {
    let Some(path) = args.path else {
        self_test();
        return;
    };

    match convert_file(&path) {
        Ok(done) => {
            if let Some(header) = done.header_mismatch() {
                eprintln!(
                    "warning: {} declares {}x{} (maxval {}), read as 200x200",
                    done.conversion.source.display(),
                    header.width,
                    header.height,
                    header.maxval
                );
            }
            println!("File {} has been written.", done.conversion.target.display());
        }
        Err(ConvertError::Usage(e)) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
        Err(e @ ConvertError::Io { .. }) => {
            eprintln!("error: Could not open the file specified.");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}

fn self_test() {
    match verify_known_vectors() {
        Ok(()) => println!("All tests pass!"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
