use std::fmt;

/// Which column of a row supplies the value compared against rule boundaries.
///
/// Row exclusion is always keyed on the tube-number column, even in
/// [`Mode::ByColumn`]; the mode only selects the matching key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    ByTubeNumber,
    ByColumn,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByTubeNumber => write!(f, "tube-number"),
            Self::ByColumn => write!(f, "plate-column"),
        }
    }
}

/// Opaque identity of a stored mapping rule, assigned at creation time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct RangeId(pub u64);

impl fmt::Display for RangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A user-declared closed interval of tube-number or plate-column values
/// assigned to one patient identifier.
///
/// `start` and `end` are kept as the raw user-entered strings; whether a
/// comparison against them is numeric or lexicographic is decided per
/// comparison, not at creation. A reversed range (`start > end`) is stored
/// as-is and simply matches nothing under ordinary ordering.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Range {
    pub id: RangeId,
    pub start: String,
    pub end: String,
    pub patient_id: String,
    pub mode: Mode,
}

impl Range {
    /// Human-readable `start → end` form used in error messages and tables.
    pub fn span(&self) -> String {
        format!("{} → {}", self.start, self.end)
    }
}
