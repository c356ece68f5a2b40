use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a roster file.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("cannot open roster file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected 5 '|'-separated fields, found {found}")]
    FieldCount { line: u64, found: usize },

    #[error("line {line}: failed to read record")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },
}

impl RosterError {
    /// Whether this is the "file does not exist" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RosterError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

pub type Result<T, E = RosterError> = std::result::Result<T, E>;
