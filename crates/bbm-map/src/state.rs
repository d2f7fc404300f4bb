//! Command-driven engine state.
//!
//! The host mutates the state through explicit commands (add/remove rule,
//! set mode, set columns) and recomputes all derived output in full after
//! every change; there is no incremental update path.

use bbm_model::{
    ColumnSelection, Frame, MapperError, Mode, Range, RangeId, Result, Snapshot, export_ready,
};

use crate::matcher::{process, sort_for_display};
use crate::store::RangeStore;
use crate::unmapped::unmapped_intervals;

/// The single configuration value of the mapping engine: rules, active
/// mode, and column selection. Derived collections are never stored here;
/// they exist only as the output of [`MapperState::snapshot`].
#[derive(Debug, Clone)]
pub struct MapperState {
    store: RangeStore,
    mode: Mode,
    selection: ColumnSelection,
}

impl MapperState {
    pub fn new(selection: ColumnSelection) -> Self {
        Self {
            store: RangeStore::new(),
            mode: Mode::default(),
            selection,
        }
    }

    /// Add a mapping rule; on overlap or a blank field the state is
    /// unchanged and the error is surfaced to the caller.
    pub fn add_range(
        &mut self,
        start: impl Into<String>,
        end: impl Into<String>,
        patient_id: impl Into<String>,
        mode: Mode,
    ) -> Result<RangeId> {
        let id = self.store.add(start, end, patient_id, mode)?;
        tracing::debug!(id = %id, total = self.store.len(), "mapping rule accepted");
        Ok(id)
    }

    /// Remove a rule by id; unknown ids are a no-op.
    pub fn remove_range(&mut self, id: RangeId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            tracing::debug!(id = %id, total = self.store.len(), "mapping rule removed");
        }
        removed
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_columns(&mut self, selection: ColumnSelection) {
        self.selection = selection;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selection(&self) -> &ColumnSelection {
        &self.selection
    }

    pub fn ranges(&self) -> &[Range] {
        self.store.ranges()
    }

    pub fn store_mut(&mut self) -> &mut RangeStore {
        &mut self.store
    }

    /// Check the active column selection against a frame's header.
    pub fn validate_columns(&self, frame: &Frame) -> Result<()> {
        let mut required = vec![self.selection.tube.as_str()];
        required.extend(self.selection.column.as_deref());
        required.extend(self.selection.row.as_deref());
        for column in required {
            if !frame.has_column(column) {
                return Err(MapperError::ColumnNotFound {
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Recompute every derived collection from the current inputs.
    ///
    /// Idempotent and side-effect-free: identical inputs yield structurally
    /// equal snapshots.
    pub fn snapshot(&self, frame: &Frame) -> Snapshot {
        let mut processed = process(frame, self.store.ranges(), self.mode, &self.selection);
        sort_for_display(&mut processed, self.mode, &self.selection);
        let unmapped = unmapped_intervals(&processed, self.mode, &self.selection);
        let can_export = export_ready(&processed);
        tracing::debug!(
            rows = processed.len(),
            unmapped_intervals = unmapped.len(),
            can_export,
            "derived snapshot recomputed"
        );
        Snapshot {
            processed,
            unmapped,
            can_export,
        }
    }
}
