use std::path::PathBuf;

use arrow::error::ArrowError;
use thiserror::Error;

/// Failures of the data layer.
///
/// `Input` and `Output` are the two kinds a user ever sees: the source file
/// could not be read or parsed, or the destination could not be written.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot load dataset from {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: ArrowError,
    },

    #[error("cannot save dataset to {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: ArrowError,
    },

    #[error("failed to replicate rows: {0}")]
    Amplify(#[source] ArrowError),
}

impl DatasetError {
    pub(crate) fn input(path: &std::path::Path, source: impl Into<ArrowError>) -> Self {
        DatasetError::Input {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub(crate) fn output(path: &std::path::Path, source: impl Into<ArrowError>) -> Self {
        DatasetError::Output {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;
