#![deny(unsafe_code)]

pub mod csv_ingest;
pub mod detection;
pub mod error;

pub use csv_ingest::load_csv;
pub use detection::detect_columns;
pub use error::{IngestError, Result};
