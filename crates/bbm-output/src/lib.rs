#![deny(unsafe_code)]

pub mod error;
pub mod export;

pub use error::{ExportError, Result};
pub use export::{
    ExportTable, PATIENT_ID_COLUMN, build_export, can_export, export_file_name, write_csv,
    write_csv_file,
};
