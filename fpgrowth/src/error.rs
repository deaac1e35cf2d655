//! Error types for the miner and its I/O adapters.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading transactions or mining them.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("invalid minimum support {0}: expected a fraction in (0, 1]")]
    InvalidSupport(f64),

    #[error("line {line}: invalid item identifier {token:?}")]
    Parse { line: usize, token: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MiningError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MiningError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MiningError>;
