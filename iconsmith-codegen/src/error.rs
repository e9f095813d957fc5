use std::{io, path::PathBuf};

use thiserror::Error;

/// Why a single entry could not be generated. Never fatal to a batch.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("failed to read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory '{}'", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("component name '{name}' is already generated from '{first}'")]
    Collision { name: String, first: String },
}

impl EntryError {
    /// One-line reason including the underlying I/O error, if any.
    pub fn reason(&self) -> String {
        match self {
            EntryError::Read { source, .. }
            | EntryError::CreateDir { source, .. }
            | EntryError::Write { source, .. } => format!("{}: {}", self, source),
            EntryError::Collision { .. } => self.to_string(),
        }
    }
}

/// The batch was rejected before any entry was processed.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("destination '{}' does not exist or is not a directory", .path.display())]
    InvalidDestination { path: PathBuf },
}

/// The index manifest could not be written.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to write index '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
