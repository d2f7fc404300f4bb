//! JSON persistence of rule sets.
//!
//! Rule files hold the user-entered form of each rule, not store internals;
//! loading replays every entry through [`RangeStore::add`] so overlap
//! validation applies to file-loaded rules exactly as to interactive ones.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use bbm_model::{MapperError, Mode};

use crate::store::RangeStore;

/// One rule as written in a rule file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RuleSpec {
    pub start: String,
    pub end: String,
    #[serde(rename = "patientId")]
    pub patient_id: String,
    #[serde(default)]
    pub mode: Mode,
}

#[derive(Debug, Error)]
pub enum RuleFileError {
    #[error("rule file not found: {path}")]
    NotFound { path: PathBuf },
    #[error("failed to read rule file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rule file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("rule {index} in {path} rejected: {source}")]
    Rejected {
        path: PathBuf,
        index: usize,
        #[source]
        source: MapperError,
    },
}

/// Read a JSON rule file (an array of [`RuleSpec`]) and apply each entry
/// to the store in file order.
///
/// Returns the number of rules applied; the store is left holding every
/// accepted rule. The first invalid or overlapping entry aborts the load
/// with the offending index.
pub fn load_rules(path: &Path, store: &mut RangeStore) -> Result<usize, RuleFileError> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RuleFileError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            RuleFileError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let specs: Vec<RuleSpec> = serde_json::from_str(&text).map_err(|e| RuleFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    let count = specs.len();
    for (index, spec) in specs.into_iter().enumerate() {
        store
            .add(spec.start, spec.end, spec.patient_id, spec.mode)
            .map_err(|source| RuleFileError::Rejected {
                path: path.to_path_buf(),
                index,
                source,
            })?;
    }
    tracing::debug!(path = %path.display(), count, "rule file loaded");
    Ok(count)
}

/// Write the store's rules back out in file form.
pub fn save_rules(path: &Path, store: &RangeStore) -> Result<(), RuleFileError> {
    let specs: Vec<RuleSpec> = store
        .ranges()
        .iter()
        .map(|r| RuleSpec {
            start: r.start.clone(),
            end: r.end.clone(),
            patient_id: r.patient_id.clone(),
            mode: r.mode,
        })
        .collect();
    let json = serde_json::to_string_pretty(&specs).map_err(|e| RuleFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, json).map_err(|e| RuleFileError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
