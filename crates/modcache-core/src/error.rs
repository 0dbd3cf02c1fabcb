use std::path::PathBuf;
use thiserror::Error;

/// Boxed source error produced by a host-supplied config loader.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Core error type for modcache operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("Cannot resolve module '{specifier}' imported from {containing_file}")]
    Unresolved {
        specifier: String,
        containing_file: String,
    },
}

impl Error {
    /// Wrap a loader-specific parse failure.
    #[must_use]
    pub fn config_parse(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
