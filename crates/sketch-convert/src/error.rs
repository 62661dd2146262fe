//! Errors reported by file conversion.

use std::io;
use std::path::PathBuf;

/// Bad input name. Raised before any file is touched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("The file must have an extension.")]
    MissingExtension,

    #[error("The file must be .sk or .pgm.")]
    UnsupportedExtension(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Source missing or unreadable, or target not writable.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Usage(#[from] UsageError),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
