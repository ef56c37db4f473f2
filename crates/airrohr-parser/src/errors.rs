use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{source}")]
    Json {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound { path }
        } else {
            LoadError::Io { path, source }
        }
    }

    /// True when the data file itself could not be opened or read.
    pub fn is_file_access(&self) -> bool {
        matches!(self, LoadError::NotFound { .. } | LoadError::Io { .. })
    }
}
