use crate::core::io::bonds::BondsError;
use crate::core::io::pdb::PdbError;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Failed to read structure file '{path}': {source}")]
    Structure { path: String, source: PdbError },

    #[error("Failed to read bonds file '{path}': {source}")]
    Bonds { path: String, source: BondsError },

    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl WorkflowError {
    pub(crate) fn structure(path: &Path, source: PdbError) -> Self {
        Self::Structure {
            path: path.to_string_lossy().to_string(),
            source,
        }
    }

    pub(crate) fn bonds(path: &Path, source: BondsError) -> Self {
        Self::Bonds {
            path: path.to_string_lossy().to_string(),
            source,
        }
    }

    pub(crate) fn csv(path: &Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_string_lossy().to_string(),
            source,
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string_lossy().to_string(),
            source,
        }
    }
}
