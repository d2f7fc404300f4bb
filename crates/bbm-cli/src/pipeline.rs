//! End-to-end wiring of ingest, mapping, and export for one CLI run.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use bbm_ingest::{detect_columns, load_csv};
use bbm_map::{MapperState, load_rules};
use bbm_model::{ColumnSelection, Frame, Mode, Range, Snapshot};
use bbm_output::{build_export, export_file_name, write_csv_file};

/// One parsed `START..END=PATIENT` rule from the command line. Inline rules
/// always target the active matching mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineRule {
    pub start: String,
    pub end: String,
    pub patient_id: String,
}

impl InlineRule {
    /// Parse the `START..END=PATIENT` form.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let (span, patient_id) = raw
            .rsplit_once('=')
            .with_context(|| format!("rule '{raw}' is missing '=PATIENT'"))?;
        let (start, end) = span
            .split_once("..")
            .with_context(|| format!("rule '{raw}' is missing 'START..END'"))?;
        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
            patient_id: patient_id.to_string(),
        })
    }
}

/// Inputs of one mapping run, resolved from CLI arguments.
#[derive(Debug, Clone)]
pub struct MapRequest {
    pub input: PathBuf,
    pub rules_file: Option<PathBuf>,
    pub inline_rules: Vec<InlineRule>,
    pub mode: Mode,
    pub tube_column: Option<String>,
    pub column_column: Option<String>,
    pub row_column: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub dry_run: bool,
}

/// Everything the summary printer and the caller need to know about a run.
#[derive(Debug)]
pub struct MapReport {
    pub frame: Frame,
    pub selection: ColumnSelection,
    pub mode: Mode,
    pub ranges: Vec<Range>,
    pub snapshot: Snapshot,
    /// Written export file, when one was produced.
    pub export_path: Option<PathBuf>,
    /// True when an export was requested but the gate was closed.
    pub export_blocked: bool,
}

/// Load the dataset, apply rules, derive the snapshot, and (unless dry-run
/// or blocked) write the export CSV.
pub fn run_map(request: &MapRequest) -> anyhow::Result<MapReport> {
    let frame = load_csv(&request.input)?;
    let selection = resolve_selection(&frame, request);
    ensure_mode_is_usable(request, &selection)?;

    let mut state = MapperState::new(selection.clone());
    state.set_mode(request.mode);
    state.validate_columns(&frame)?;

    if let Some(path) = &request.rules_file {
        load_rules(path, state.store_mut())?;
    }
    for rule in &request.inline_rules {
        state.add_range(
            rule.start.clone(),
            rule.end.clone(),
            rule.patient_id.clone(),
            request.mode,
        )?;
    }
    tracing::info!(
        rules = state.ranges().len(),
        rows = frame.rows.len(),
        mode = %request.mode,
        "mapping specimen dataset"
    );

    let snapshot = state.snapshot(&frame);
    let mut export_path = None;
    let mut export_blocked = false;
    if !request.dry_run {
        if snapshot.can_export {
            let path = resolve_export_path(&frame, &request.input, request.output_dir.as_deref());
            let table = build_export(&snapshot.processed, &frame.columns, &selection.tube)?;
            write_csv_file(&table, &path)?;
            tracing::info!(path = %path.display(), rows = table.records.len(), "export written");
            export_path = Some(path);
        } else {
            export_blocked = true;
            tracing::warn!("export blocked: unmapped rows remain");
        }
    }

    Ok(MapReport {
        selection,
        mode: state.mode(),
        ranges: state.ranges().to_vec(),
        snapshot,
        export_path,
        export_blocked,
        frame,
    })
}

/// Validate a rule file without touching any dataset.
pub fn run_rules(path: &Path) -> anyhow::Result<Vec<Range>> {
    let mut state = MapperState::new(ColumnSelection::tube_only("TubeNumber"));
    let count = load_rules(path, state.store_mut())?;
    tracing::info!(path = %path.display(), count, "rule file is valid");
    Ok(state.ranges().to_vec())
}

fn resolve_selection(frame: &Frame, request: &MapRequest) -> ColumnSelection {
    let mut selection = detect_columns(frame);
    if let Some(tube) = &request.tube_column {
        selection.tube = tube.clone();
    }
    if let Some(column) = &request.column_column {
        selection.column = Some(column.clone());
    }
    if let Some(row) = &request.row_column {
        selection.row = Some(row.clone());
    }
    selection
}

fn resolve_export_path(frame: &Frame, input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let file_name = export_file_name(&frame.source_name);
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input
            .parent()
            .map(|p| p.join(&file_name))
            .unwrap_or(file_name),
    }
}

/// Reject a `ByColumn` run with no plate-column available.
pub fn ensure_mode_is_usable(request: &MapRequest, selection: &ColumnSelection) -> anyhow::Result<()> {
    if request.mode == Mode::ByColumn && selection.column.is_none() {
        bail!("plate-column mode requires --column-col or a detectable plate-column header");
    }
    Ok(())
}
