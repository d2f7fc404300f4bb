//! CSV loading into a read-only [`Frame`].

use std::path::Path;

use bbm_model::{CellValue, Frame, Row};

use crate::error::{IngestError, Result};

/// Read a headered CSV file into a frame.
///
/// Header names are trimmed of surrounding whitespace; blank cells become
/// [`CellValue::Missing`]; records whose every cell is blank are skipped.
/// The file name (without directory) is kept on the frame for export
/// naming.
pub fn load_csv(path: &Path) -> Result<Frame> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| map_csv_error(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| map_csv_error(path, e))?
        .clone();
    let columns: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
    for (i, column) in columns.iter().enumerate() {
        if column.is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
        if columns[..i].contains(column) {
            return Err(IngestError::DuplicateColumn {
                path: path.to_path_buf(),
                column: column.clone(),
            });
        }
    }

    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut frame = Frame::new(columns.clone(), source_name);

    for record in reader.records() {
        let record = record.map_err(|e| map_csv_error(path, e))?;
        if record.iter().all(|v| v.trim().is_empty()) {
            continue;
        }
        let mut row = Row::new();
        for (column, value) in columns.iter().zip(record.iter()) {
            let cell = if value.trim().is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(value.to_string())
            };
            row.insert(column.clone(), cell);
        }
        frame.push_row(row);
    }

    tracing::debug!(
        path = %path.display(),
        columns = frame.columns.len(),
        rows = frame.rows.len(),
        "loaded specimen dataset"
    );
    Ok(frame)
}

fn map_csv_error(path: &Path, error: csv::Error) -> IngestError {
    match error.kind() {
        csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        }
        _ => IngestError::Csv {
            path: path.to_path_buf(),
            source: error,
        },
    }
}
