use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },
    #[error("invalid CSV in {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{path} has an empty column name in its header")]
    EmptyColumnName { path: PathBuf },
    #[error("{path} declares column '{column}' more than once")]
    DuplicateColumn { path: PathBuf, column: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
