//! Export command implementation

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use std::collections::BTreeSet;
use std::path::PathBuf;

use super::utils::{is_interactive, record_label};
use super::Session;
use crate::config::CliOverrides;
use crate::deliver::{ArtifactNaming, DirectorySink, ExportFormat};
use crate::domain::SolutionRecord;
use crate::export::{export, ExportOutcome};
use crate::selection::Selection;

#[derive(Args)]
pub struct ExportArgs {
    /// Output format: 'markdown' (selected records), 'csv' or 'json' (whole knowledge base)
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: String,

    /// Record ids to include in a Markdown export (repeatable or comma-separated)
    #[arg(short = 's', long, value_name = "IDS", value_delimiter = ',', num_args = 1..)]
    pub select: Vec<String>,

    /// Select every record for a Markdown export
    #[arg(long, conflicts_with = "select")]
    pub all: bool,

    /// Directory for output files
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Omit timestamps from file names for reproducible paths
    #[arg(long)]
    pub no_timestamp: bool,
}

pub fn run(args: &ExportArgs, session: Session) -> Result<()> {
    let format: ExportFormat = args.format.parse()?;
    let config = session.config.clone().merge_cli(CliOverrides {
        output_dir: args.output_dir.clone(),
        no_timestamp: args.no_timestamp,
        ..CliOverrides::default()
    });

    let store = session.open_store();
    let selection = build_selection(args, format, store.records())?;

    let naming =
        if config.no_timestamp { ArtifactNaming::Plain } else { ArtifactNaming::now() };
    let mut sink = DirectorySink::new(&config.output_dir);

    let outcome = export(format, store.records(), &selection, naming, &mut sink)
        .with_context(|| format!("Failed to export {format}"))?;

    match outcome {
        ExportOutcome::Delivered { file_name, records } => {
            let path = sink
                .delivered()
                .last()
                .cloned()
                .unwrap_or_else(|| sink.dir().join(file_name));
            println!("Exported {} record(s) to {}", records, path.display());
        }
        ExportOutcome::Skipped(reason) => {
            eprintln!("info: nothing exported ({reason})");
        }
    }
    Ok(())
}

fn build_selection(
    args: &ExportArgs,
    format: ExportFormat,
    records: &[SolutionRecord],
) -> Result<Selection> {
    let mut selection = Selection::new();

    if format != ExportFormat::Markdown {
        if args.all || !args.select.is_empty() {
            tracing::warn!("{format} export always covers the whole knowledge base; selection ignored");
        }
        return Ok(selection);
    }

    if args.all {
        selection.select_all(records.iter().map(|r| r.id.clone()));
        return Ok(selection);
    }

    if !args.select.is_empty() {
        let live: BTreeSet<String> = records.iter().map(|r| r.id.clone()).collect();
        for id in args.select.iter().map(|id| id.trim()).filter(|id| !id.is_empty()) {
            if !live.contains(id) {
                tracing::warn!("Unknown record id '{}' ignored", id);
            }
            if !selection.contains(id) {
                selection.toggle(id);
            }
        }
        selection.prune(&live);
        return Ok(selection);
    }

    if is_interactive() && !records.is_empty() {
        let labels: Vec<String> = records.iter().map(record_label).collect();
        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select records to export (space to toggle)")
            .items(&labels)
            .interact()?;
        for idx in picked {
            if let Some(record) = records.get(idx) {
                selection.toggle(&record.id);
            }
        }
    } else {
        eprintln!("info: non-interactive session; pass --select IDS or --all to choose records");
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_records;

    fn args(format: &str, select: &[&str], all: bool) -> ExportArgs {
        ExportArgs {
            format: format.to_string(),
            select: select.iter().map(|s| s.to_string()).collect(),
            all,
            output_dir: None,
            no_timestamp: true,
        }
    }

    #[test]
    fn all_selects_every_current_record() {
        let records = seed_records();
        let selection =
            build_selection(&args("markdown", &[], true), ExportFormat::Markdown, &records)
                .expect("selection");
        assert!(records.iter().all(|r| selection.contains(&r.id)));
        assert_eq!(selection.len(), records.len());
    }

    #[test]
    fn unknown_selected_ids_are_dropped() {
        let records = seed_records();
        let id = records[0].id.as_str();
        let selection = build_selection(
            &args("markdown", &[id, "sol-missing"], false),
            ExportFormat::Markdown,
            &records,
        )
        .expect("selection");
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec![id]);
    }

    #[test]
    fn repeated_ids_stay_selected() {
        let records = seed_records();
        let id = records[0].id.as_str();
        let selection =
            build_selection(&args("markdown", &[id, id], false), ExportFormat::Markdown, &records)
                .expect("selection");
        assert!(selection.contains(id));
        assert_eq!(selection.resolve(&records).len(), 1);
    }

    #[test]
    fn selection_is_ignored_for_full_exports() {
        let records = seed_records();
        let id = records[0].id.as_str();
        let selection = build_selection(&args("csv", &[id], false), ExportFormat::Csv, &records)
            .expect("selection");
        assert!(selection.is_empty());
    }
}
