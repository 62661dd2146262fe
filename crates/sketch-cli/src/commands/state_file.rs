//! Playback position persisted between invocations.
//!
//! A missing file means "start from the beginning"; anything else that
//! fails to load is an error rather than a silent restart.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sketch_vm::DrawingState;

#[derive(Debug, thiserror::Error)]
pub enum StateFileError {
    #[error("could not access state file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed state file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a saved state, or the initial one if `path` does not exist yet.
pub fn load(path: &Path) -> Result<DrawingState, StateFileError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(DrawingState::new()),
        Err(source) => {
            return Err(StateFileError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&text).map_err(|source| StateFileError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save(path: &Path, state: &DrawingState) -> Result<(), StateFileError> {
    let json = serde_json::to_string_pretty(state).map_err(|source| StateFileError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json + "\n").map_err(|source| StateFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}
