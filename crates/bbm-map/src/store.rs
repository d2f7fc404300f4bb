//! Insertion-ordered storage of mapping rules.

use bbm_model::{MapperError, Mode, Range, RangeId, Result};

use crate::overlap::overlaps;

/// The owned collection of mapping rules.
///
/// Insertion order is semantically significant: the matcher resolves ties
/// by first match, so rules must be observed in the order they were
/// accepted, and removal never reorders the survivors.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct RangeStore {
    ranges: Vec<Range>,
    next_id: u64,
}

impl RangeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a rule, returning its assigned id.
    ///
    /// Rejects blank fields and any candidate overlapping a stored rule of
    /// the same mode; the store is untouched on failure. `start > end` is
    /// deliberately not rejected (such a rule is stored and matches
    /// nothing).
    pub fn add(
        &mut self,
        start: impl Into<String>,
        end: impl Into<String>,
        patient_id: impl Into<String>,
        mode: Mode,
    ) -> Result<RangeId> {
        let candidate = Range {
            id: RangeId(self.next_id),
            start: start.into(),
            end: end.into(),
            patient_id: patient_id.into(),
            mode,
        };
        if candidate.start.trim().is_empty() {
            return Err(MapperError::EmptyRuleField { field: "start" });
        }
        if candidate.end.trim().is_empty() {
            return Err(MapperError::EmptyRuleField { field: "end" });
        }
        if candidate.patient_id.trim().is_empty() {
            return Err(MapperError::EmptyRuleField {
                field: "patient id",
            });
        }
        if let Some(existing) = self.ranges.iter().find(|r| overlaps(&candidate, r)) {
            return Err(MapperError::Overlap {
                candidate: candidate.span(),
                existing: existing.span(),
                patient_id: existing.patient_id.clone(),
                mode: existing.mode,
            });
        }
        let id = candidate.id;
        self.next_id += 1;
        self.ranges.push(candidate);
        Ok(id)
    }

    /// Remove a rule by id. Absent ids are ignored; remaining rules keep
    /// their relative order.
    pub fn remove(&mut self, id: RangeId) -> bool {
        let before = self.ranges.len();
        self.ranges.retain(|r| r.id != id);
        self.ranges.len() != before
    }

    /// Rules in insertion order.
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
