//! CLI library components for the biospecimen barcode mapper.

pub mod logging;
pub mod pipeline;
