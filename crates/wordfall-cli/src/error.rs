use std::{io, path::PathBuf};

use wordfall_core::ModelError;

/// Failures that end a `wordfall` run.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum AppError {
    #[display("failed to read word list {}", path.display())]
    WordList {
        path: PathBuf,
        source: io::Error,
    },
    #[display("invalid puzzle")]
    Puzzle(#[error(source)] #[from] ModelError),
    #[display("failed to write results")]
    Output(#[error(source)] #[from] io::Error),
    #[display("failed to serialize results")]
    Json(#[error(source)] #[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn word_list(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WordList {
            path: path.into(),
            source,
        }
    }
}
