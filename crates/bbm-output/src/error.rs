use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{count} row(s) still lack a patient id; export is blocked")]
    UnmappedRows { count: usize },
    #[error("failed to write export to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;
