//! Export pipeline: guard, encode, name, deliver.

use crate::deliver::{Artifact, ArtifactNaming, DeliverySink, ExportFormat};
use crate::domain::SolutionRecord;
use crate::error::KbResult;
use crate::render::{encode_csv, encode_json, encode_markdown};
use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Delivered { file_name: String, records: usize },
    /// Nothing to export; no encoder ran and nothing was delivered.
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptySelection,
    EmptyCollection,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::EmptySelection => f.write_str("no records selected"),
            SkipReason::EmptyCollection => f.write_str("the knowledge base is empty"),
        }
    }
}

/// Export `records` in `format`. Markdown covers the selected records only;
/// CSV and JSON always cover the full collection.
pub fn export(
    format: ExportFormat,
    records: &[SolutionRecord],
    selection: &Selection,
    naming: ArtifactNaming,
    sink: &mut dyn DeliverySink,
) -> KbResult<ExportOutcome> {
    let (content, count) = match format {
        ExportFormat::Markdown => {
            let selected = selection.resolve(records);
            if selected.is_empty() {
                tracing::debug!("markdown export skipped: empty selection");
                return Ok(ExportOutcome::Skipped(SkipReason::EmptySelection));
            }
            (encode_markdown(&selected), selected.len())
        }
        ExportFormat::Csv | ExportFormat::Json => {
            if records.is_empty() {
                tracing::debug!(%format, "export skipped: empty collection");
                return Ok(ExportOutcome::Skipped(SkipReason::EmptyCollection));
            }
            let content = if format == ExportFormat::Csv {
                encode_csv(records)?
            } else {
                encode_json(records)?
            };
            (content, records.len())
        }
    };

    let artifact = Artifact::new(format, content, naming);
    sink.deliver(&artifact)?;
    Ok(ExportOutcome::Delivered { file_name: artifact.file_name, records: count })
}
