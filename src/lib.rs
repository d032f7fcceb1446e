//! solution-kb: a local knowledge base of AI-generated business analyses.
//!
//! Records are kept newest-first in a persisted store and can be exported as
//! Markdown (selected records), CSV or JSON (whole collection).

pub mod cli;
pub mod config;
pub mod deliver;
pub mod domain;
pub mod error;
pub mod export;
pub mod intake;
pub mod render;
pub mod selection;
pub mod store;
pub mod utils;

pub use deliver::{Artifact, ArtifactNaming, DeliverySink, DirectorySink, ExportFormat, MemorySink};
pub use domain::{BusinessArea, RecordDraft, RecordResult, ResultKind, SolutionRecord};
pub use error::{KbError, KbResult};
pub use export::{export, ExportOutcome, SkipReason};
pub use selection::Selection;
pub use store::{FileStorage, MemoryStorage, RecordFilter, StoragePort, Store, STORAGE_KEY};
