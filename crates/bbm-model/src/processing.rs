use crate::frame::Row;

/// Active column assignments for matching and display.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColumnSelection {
    /// Tube-number / barcode column; also keys row exclusion in every mode.
    pub tube: String,
    /// Plate-column coordinate column, when present in the dataset.
    pub column: Option<String>,
    /// Plate-row label column, used only as a display sort tie-break.
    pub row: Option<String>,
}

impl ColumnSelection {
    pub fn tube_only(tube: impl Into<String>) -> Self {
        Self {
            tube: tube.into(),
            column: None,
            row: None,
        }
    }
}

/// One source row with its derived mapping outcome.
///
/// Recomputed wholesale whenever rows, rules, mode, or column selection
/// change; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProcessedRow {
    pub source: Row,
    /// Patient identifier from the first matching rule, `None` when the row
    /// is excluded or no rule matches.
    pub patient_id: Option<String>,
    pub excluded: bool,
}

impl ProcessedRow {
    /// A non-excluded row that no rule covers.
    pub fn is_unmapped(&self) -> bool {
        !self.excluded && self.patient_id.is_none()
    }
}

/// A maximal run of contiguous values with no matching rule, among
/// non-excluded rows. Closed on both ends; a singleton has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UnmappedInterval {
    pub start: f64,
    pub end: f64,
}

impl UnmappedInterval {
    /// Number of identifier values the interval covers.
    pub fn len(&self) -> f64 {
        self.end - self.start + 1.0
    }

    pub fn is_singleton(&self) -> bool {
        self.start == self.end
    }
}

/// Export gate: true when the dataset is non-empty and no row is left
/// unmapped. An empty dataset keeps the gate closed.
pub fn export_ready(processed: &[ProcessedRow]) -> bool {
    !processed.is_empty() && !processed.iter().any(ProcessedRow::is_unmapped)
}

/// Full derived output of one recomputation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    pub processed: Vec<ProcessedRow>,
    pub unmapped: Vec<UnmappedInterval>,
    /// True when every non-excluded row carries a patient identifier.
    pub can_export: bool,
}
