//! Errors raised while loading repository metadata.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no archive directory found in {}", .0.display())]
    MissingArchive(PathBuf),

    #[error("invalid language search pattern")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid test descriptor {}", .path.display())]
    TestInfo {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("folder name is not valid UTF-8: {}", .0.display())]
    InvalidName(PathBuf),
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
