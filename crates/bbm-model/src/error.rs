use thiserror::Error;

use crate::range::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapperError {
    #[error(
        "range {candidate} overlaps existing {mode} rule {existing} (patient '{patient_id}')"
    )]
    Overlap {
        candidate: String,
        existing: String,
        patient_id: String,
        mode: Mode,
    },
    #[error("mapping rule has an empty {field}")]
    EmptyRuleField { field: &'static str },
    #[error("column '{column}' not found in dataset")]
    ColumnNotFound { column: String },
}

pub type Result<T> = std::result::Result<T, MapperError>;
