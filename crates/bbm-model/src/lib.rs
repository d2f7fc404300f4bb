#![deny(unsafe_code)]

pub mod error;
pub mod frame;
pub mod processing;
pub mod range;

pub use error::{MapperError, Result};
pub use frame::{CellValue, Frame, Row};
pub use processing::{ColumnSelection, ProcessedRow, Snapshot, UnmappedInterval, export_ready};
pub use range::{Mode, Range, RangeId};
