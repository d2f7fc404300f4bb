//! Export-table construction and CSV serialization.

use std::io::Write;
use std::path::{Path, PathBuf};

use bbm_model::{ProcessedRow, export_ready};

use crate::error::{ExportError, Result};

/// Name of the appended patient-identifier column. An existing column of
/// the same name is overwritten, never duplicated.
pub const PATIENT_ID_COLUMN: &str = "Patient ID";

/// Flat, ordered export shape ready for CSV serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub columns: Vec<String>,
    pub records: Vec<Vec<String>>,
}

/// True when every non-excluded row carries a patient identifier (and the
/// dataset is non-empty). Gates the export action.
pub fn can_export(processed: &[ProcessedRow]) -> bool {
    export_ready(processed)
}

/// Build the export table from processed rows.
///
/// Excluded rows and rows with a blank tube value are dropped; surviving
/// rows keep every original column in original order, with the patient-id
/// column appended last (empty string when a patient id is somehow absent,
/// though [`can_export`] guarantees non-emptiness for included rows).
pub fn build_export(
    processed: &[ProcessedRow],
    frame_columns: &[String],
    tube_column: &str,
) -> Result<ExportTable> {
    let unmapped = processed.iter().filter(|r| r.is_unmapped()).count();
    if unmapped > 0 {
        return Err(ExportError::UnmappedRows { count: unmapped });
    }

    let mut columns: Vec<String> = frame_columns
        .iter()
        .filter(|c| c.as_str() != PATIENT_ID_COLUMN)
        .cloned()
        .collect();
    columns.push(PATIENT_ID_COLUMN.to_string());

    let records = processed
        .iter()
        .filter(|row| {
            !row.excluded
                && row
                    .source
                    .get(tube_column)
                    .is_some_and(|v| !v.trim().is_empty())
        })
        .map(|row| {
            let mut record: Vec<String> = columns[..columns.len() - 1]
                .iter()
                .map(|c| row.source.get(c).unwrap_or_default().to_string())
                .collect();
            record.push(row.patient_id.clone().unwrap_or_default());
            record
        })
        .collect();

    Ok(ExportTable { columns, records })
}

/// Serialize the export table as CSV text.
pub fn write_csv<W: Write>(table: &ExportTable, writer: W) -> std::result::Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&table.columns)?;
    for record in &table.records {
        csv_writer.write_record(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the export table next to the chosen output directory.
pub fn write_csv_file(table: &ExportTable, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| ExportError::Write {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;
    write_csv(table, file).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Export file name for a given source file: `processed_<original name>`.
pub fn export_file_name(source_name: &str) -> PathBuf {
    PathBuf::from(format!("processed_{source_name}"))
}
