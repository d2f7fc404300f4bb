//! Command entry points: translate CLI arguments into pipeline requests.

use bbm_cli::pipeline::{InlineRule, MapReport, MapRequest, run_map, run_rules};
use bbm_model::Range;

use crate::cli::{MapArgs, RulesArgs};

pub fn run_map_command(args: &MapArgs) -> anyhow::Result<MapReport> {
    let inline_rules = args
        .rules
        .iter()
        .map(|raw| InlineRule::parse(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let request = MapRequest {
        input: args.input.clone(),
        rules_file: args.rules_file.clone(),
        inline_rules,
        mode: args.mode.into(),
        tube_column: args.tube_column.clone(),
        column_column: args.column_column.clone(),
        row_column: args.row_column.clone(),
        output_dir: args.output_dir.clone(),
        dry_run: args.dry_run,
    };
    run_map(&request)
}

pub fn run_rules_command(args: &RulesArgs) -> anyhow::Result<Vec<Range>> {
    run_rules(&args.rules_file)
}
