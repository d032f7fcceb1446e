//! Handing encoded exports to the host as named files.
//!
//! Naming is time-dependent and kept apart from encoding, which stays pure.

use chrono::{DateTime, Utc};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{KbError, KbResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Markdown,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown;charset=utf-8",
            ExportFormat::Csv => "text/csv;charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    /// Markdown exports a selection; CSV and JSON dump the whole knowledge base.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "solutions_export",
            ExportFormat::Csv | ExportFormat::Json => "knowledge_base",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Markdown => "markdown",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = KbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(KbError::UnknownExportFormat(s.to_string())),
        }
    }
}

/// How artifact names are disambiguated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactNaming {
    /// `{prefix}_{unix millis}.{ext}`
    Timestamped(DateTime<Utc>),
    /// `{prefix}.{ext}`, for reproducible output paths.
    Plain,
}

impl ArtifactNaming {
    pub fn now() -> Self {
        ArtifactNaming::Timestamped(Utc::now())
    }

    pub fn file_name(&self, format: ExportFormat) -> String {
        match self {
            ArtifactNaming::Timestamped(at) => {
                format!("{}_{}.{}", format.file_prefix(), at.timestamp_millis(), format.extension())
            }
            ArtifactNaming::Plain => format!("{}.{}", format.file_prefix(), format.extension()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub content: String,
    pub file_name: String,
    pub mime_type: String,
}

impl Artifact {
    pub fn new(format: ExportFormat, content: String, naming: ArtifactNaming) -> Self {
        Self {
            content,
            file_name: naming.file_name(format),
            mime_type: format.mime_type().to_string(),
        }
    }
}

/// Destination for finished exports. Implementations must not buffer or retry.
pub trait DeliverySink {
    fn deliver(&mut self, artifact: &Artifact) -> KbResult<()>;
}

/// Writes artifacts as files into an output directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    delivered: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), delivered: Vec::new() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in delivery order.
    pub fn delivered(&self) -> &[PathBuf] {
        &self.delivered
    }
}

impl DeliverySink for DirectorySink {
    fn deliver(&mut self, artifact: &Artifact) -> KbResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&artifact.file_name);
        fs::write(&path, &artifact.content)?;
        tracing::info!(
            path = %path.display(),
            mime = %artifact.mime_type,
            bytes = artifact.content.len(),
            "delivered export"
        );
        self.delivered.push(path);
        Ok(())
    }
}

/// Keeps delivered artifacts in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub artifacts: Vec<Artifact>,
}

impl DeliverySink for MemorySink {
    fn deliver(&mut self, artifact: &Artifact) -> KbResult<()> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn timestamped_names_embed_millis() {
        let at = Utc.timestamp_millis_opt(1_717_243_200_123).single().expect("instant");
        let naming = ArtifactNaming::Timestamped(at);
        assert_eq!(naming.file_name(ExportFormat::Markdown), "solutions_export_1717243200123.md");
        assert_eq!(naming.file_name(ExportFormat::Csv), "knowledge_base_1717243200123.csv");
        assert_eq!(naming.file_name(ExportFormat::Json), "knowledge_base_1717243200123.json");
    }

    #[test]
    fn plain_names_have_no_disambiguator() {
        assert_eq!(ArtifactNaming::Plain.file_name(ExportFormat::Json), "knowledge_base.json");
    }

    #[test]
    fn formats_parse_and_carry_mime_types() {
        assert_eq!("MD".parse::<ExportFormat>().expect("md"), ExportFormat::Markdown);
        assert_eq!(ExportFormat::Csv.mime_type(), "text/csv;charset=utf-8");
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
        assert!(matches!("pdf".parse::<ExportFormat>(), Err(KbError::UnknownExportFormat(_))));
    }

    #[test]
    fn directory_sink_writes_file() {
        let tmp = TempDir::new().expect("tmp");
        let mut sink = DirectorySink::new(tmp.path().join("out"));
        let artifact = Artifact::new(ExportFormat::Csv, "a,b".to_string(), ArtifactNaming::Plain);
        sink.deliver(&artifact).expect("deliver");

        let path = tmp.path().join("out/knowledge_base.csv");
        assert_eq!(fs::read_to_string(&path).expect("read"), "a,b");
        assert_eq!(sink.delivered(), &[path]);
    }
}
