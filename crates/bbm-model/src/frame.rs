use std::collections::BTreeMap;

/// A single cell of the source dataset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// The textual content, or `None` for a missing cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Missing => None,
        }
    }
}

/// One record of the source dataset, keyed by column name.
///
/// Rows carry no identity of their own; they are addressed by position
/// within their [`Frame`]. Column order lives on the frame.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// Raw value of a column, or `None` when the cell is absent or missing.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).and_then(CellValue::as_text)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only snapshot of a loaded specimen dataset.
///
/// The engine never mutates a frame; it only produces derived collections.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    /// Column names in header order, trimmed of surrounding whitespace.
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    /// File name of the source CSV, used to derive the export file name.
    pub source_name: String,
}

impl Frame {
    pub fn new(columns: Vec<String>, source_name: impl Into<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            source_name: source_name.into(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}
