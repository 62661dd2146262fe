//! Conversion direction from a file name.

use std::path::{Path, PathBuf};

use crate::error::UsageError;

pub const PGM_EXTENSION: &str = "pgm";
pub const SKETCH_EXTENSION: &str = "sk";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// `.pgm` in, `.sk` out.
    PgmToSketch,
    /// `.sk` in, `.pgm` out.
    SketchToPgm,
}

impl Direction {
    /// Pick the direction from the text after the last `.` of the file name.
    ///
    /// No file system access.
    pub fn from_path(path: &Path) -> Result<Self, UsageError> {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        let Some((stem, ext)) = name.rsplit_once('.') else {
            return Err(UsageError::MissingExtension);
        };
        if stem.is_empty() || ext.is_empty() {
            return Err(UsageError::MissingExtension);
        }
        match ext {
            PGM_EXTENSION => Ok(Self::PgmToSketch),
            SKETCH_EXTENSION => Ok(Self::SketchToPgm),
            other => Err(UsageError::UnsupportedExtension(other.to_string())),
        }
    }

    pub fn target_extension(self) -> &'static str {
        match self {
            Self::PgmToSketch => SKETCH_EXTENSION,
            Self::SketchToPgm => PGM_EXTENSION,
        }
    }
}

/// A planned conversion: where to read, where to write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    pub direction: Direction,
    pub source: PathBuf,
    pub target: PathBuf,
}

impl Conversion {
    pub fn plan(path: &Path) -> Result<Self, UsageError> {
        let direction = Direction::from_path(path)?;
        Ok(Self {
            direction,
            source: path.to_path_buf(),
            target: path.with_extension(direction.target_extension()),
        })
    }
}
