//! Persistent, newest-first collection of solution records.
//!
//! The in-memory collection is authoritative for the running session. Every
//! mutation rewrites the whole collection through the injected
//! [`StoragePort`]; read and write failures are logged and never propagated.

use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeSet;

use crate::domain::{BusinessArea, RecordDraft, ResultKind, SolutionRecord};
use crate::error::{KbError, KbResult};
use crate::render::encode_json;
use crate::utils::record_id;

pub mod seed;
pub mod storage;

pub use seed::seed_records;
pub use storage::{FileStorage, MemoryStorage, StoragePort};

/// Fixed storage key for the collection blob.
pub const STORAGE_KEY: &str = "business-ai-solver-database";

/// Optional criteria for narrowing the collection; unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub area: Option<BusinessArea>,
    pub kind: Option<ResultKind>,
    pub query: Option<String>,
}

impl RecordFilter {
    pub fn matches(&self, record: &SolutionRecord) -> bool {
        if self.area.is_some_and(|area| area != record.business_area) {
            return false;
        }
        if self.kind.is_some_and(|kind| kind != record.result.kind()) {
            return false;
        }
        match self.query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => {
                let needle = query.to_lowercase();
                [&record.company_type, &record.niche, &record.problem_description]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
            _ => true,
        }
    }
}

pub struct Store<S: StoragePort> {
    storage: S,
    records: Vec<SolutionRecord>,
}

impl<S: StoragePort> Store<S> {
    /// Load the persisted collection, falling back to the seed collection.
    pub fn load(storage: S) -> Self {
        let records = load_records(&storage);
        Self { storage, records }
    }

    pub fn records(&self) -> &[SolutionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The current full id set.
    pub fn ids(&self) -> BTreeSet<String> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&SolutionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn filter<'a>(&'a self, filter: &'a RecordFilter) -> impl Iterator<Item = &'a SolutionRecord> {
        self.records.iter().filter(move |r| filter.matches(r))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Prepend `record` and persist the full collection.
    pub fn append(&mut self, record: SolutionRecord) -> KbResult<()> {
        if self.get(&record.id).is_some() {
            return Err(KbError::DuplicateId(record.id));
        }
        tracing::info!(id = %record.id, "appending record");
        self.records.insert(0, record);
        self.persist();
        Ok(())
    }

    /// Turn a draft into a record stamped with the current instant and append it.
    pub fn submit(&mut self, draft: RecordDraft) -> KbResult<&SolutionRecord> {
        self.submit_at(draft, Utc::now())
    }

    pub fn submit_at(&mut self, draft: RecordDraft, now: DateTime<Utc>) -> KbResult<&SolutionRecord> {
        let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let id = self.fresh_id(&timestamp, &draft);
        self.append(draft.into_record(id, timestamp))?;
        Ok(&self.records[0])
    }

    /// Drop every record and persist the empty collection.
    pub fn clear(&mut self) {
        tracing::info!(count = self.records.len(), "clearing store");
        self.records.clear();
        self.persist();
    }

    /// Write the whole collection to storage. Failures are logged only.
    pub fn persist(&mut self) {
        let blob = match encode_json(&self.records) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::error!("Failed to serialize solution database: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.write(STORAGE_KEY, &blob) {
            tracing::error!("Failed to save solution database: {}", e);
        }
    }

    fn fresh_id(&self, timestamp: &str, draft: &RecordDraft) -> String {
        let mut attempt = 0u32;
        loop {
            let id =
                record_id(timestamp, &draft.company_type, &draft.problem_description, attempt);
            if self.get(&id).is_none() {
                return id;
            }
            attempt += 1;
        }
    }
}

fn load_records<S: StoragePort>(storage: &S) -> Vec<SolutionRecord> {
    match storage.read(STORAGE_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<Vec<SolutionRecord>>(&raw) {
            Ok(records) if !records.is_empty() => {
                tracing::debug!(count = records.len(), "loaded solution database");
                return records;
            }
            Ok(_) => tracing::info!("Stored solution database is empty; using seed data"),
            Err(e) => tracing::warn!("Failed to load solution database: {}", e),
        },
        Ok(None) => tracing::debug!("No stored solution database; using seed data"),
        Err(e) => tracing::warn!("Failed to read solution database: {}", e),
    }
    seed_records()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GroundedAnswer, RecordResult, Source};
    use chrono::TimeZone;

    fn grounded_draft(company: &str) -> RecordDraft {
        RecordDraft {
            company_type: company.to_string(),
            niche: "Local".to_string(),
            problem_description: "Few customers on weekdays".to_string(),
            business_area: BusinessArea::Sales,
            result: RecordResult::Grounded(GroundedAnswer {
                answer: "Run a weekday loyalty card.".to_string(),
                sources: vec![Source { title: Some("Foo".to_string()), uri: "http://x".to_string() }],
            }),
        }
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).single().expect("valid instant")
    }

    #[test]
    fn empty_storage_loads_seed() {
        let store = Store::load(MemoryStorage::new());
        assert_eq!(store.records(), seed_records().as_slice());
    }

    #[test]
    fn corrupted_slot_loads_seed() {
        let store = Store::load(MemoryStorage::with_slot(STORAGE_KEY, "{not json"));
        assert!(!store.is_empty());
        assert_eq!(store.records(), seed_records().as_slice());
    }

    #[test]
    fn empty_array_slot_loads_seed() {
        let store = Store::load(MemoryStorage::with_slot(STORAGE_KEY, "[]"));
        assert_eq!(store.len(), seed_records().len());
    }

    #[test]
    fn non_array_slot_loads_seed() {
        let store = Store::load(MemoryStorage::with_slot(STORAGE_KEY, r#"{"id": "x"}"#));
        assert_eq!(store.records(), seed_records().as_slice());
    }

    #[test]
    fn untagged_results_load_and_survive_next_write() {
        let blob = r#"[{
            "id": "sol-1",
            "timestamp": "2024-05-01T09:30:00.000Z",
            "companyType": "Florist",
            "niche": "Weddings",
            "problemDescription": "Bookings dropped",
            "businessArea": "marketing",
            "result": {"answer": "a", "sources": []}
        }]"#;
        let mut store = Store::load(MemoryStorage::with_slot(STORAGE_KEY, blob));
        assert_eq!(store.len(), 1);
        let loaded = store.get("sol-1").expect("stored record kept");
        assert_eq!(loaded.result.kind(), ResultKind::Grounded);

        store.submit_at(grounded_draft("Bakery"), instant()).expect("submit");
        assert!(store.get("sol-1").is_some());

        let persisted: serde_json::Value =
            serde_json::from_str(store.storage().slot(STORAGE_KEY).expect("persisted"))
                .expect("valid json");
        assert_eq!(persisted[1]["id"], "sol-1");
        assert_eq!(persisted[1]["result"]["kind"], "grounded");
    }

    #[test]
    fn append_prepends_and_keeps_prior_order() {
        let mut store = Store::load(MemoryStorage::new());
        let before = store.records().to_vec();

        let created = store.submit_at(grounded_draft("Bakery"), instant()).expect("submit").clone();

        assert_eq!(store.records()[0], created);
        assert_eq!(&store.records()[1..], before.as_slice());
        assert_eq!(created.timestamp, "2024-06-01T12:00:00.000Z");
        assert!(created.id.starts_with("sol-"));
    }

    #[test]
    fn every_mutation_rewrites_storage() {
        let mut store = Store::load(MemoryStorage::new());
        store.submit_at(grounded_draft("Bakery"), instant()).expect("submit");
        assert_eq!(store.storage().writes(), 1);

        let blob = store.storage().slot(STORAGE_KEY).expect("persisted");
        assert_eq!(blob, encode_json(store.records()).expect("encode"));
    }

    #[test]
    fn persisted_collection_reloads_identically() {
        let mut store = Store::load(MemoryStorage::new());
        store.submit_at(grounded_draft("Bakery"), instant()).expect("submit");
        let records = store.records().to_vec();

        let blob = store.storage().slot(STORAGE_KEY).expect("persisted").to_string();
        let reloaded = Store::load(MemoryStorage::with_slot(STORAGE_KEY, &blob));
        assert_eq!(reloaded.records(), records.as_slice());
    }

    #[test]
    fn write_failure_keeps_in_memory_state() {
        let mut store = Store::load(MemoryStorage::new().failing_writes());
        let before = store.len();
        store.submit_at(grounded_draft("Bakery"), instant()).expect("submit");
        assert_eq!(store.len(), before + 1);
        assert!(store.storage().slot(STORAGE_KEY).is_none());
    }

    #[test]
    fn identical_submissions_get_distinct_ids() {
        let mut store = Store::load(MemoryStorage::new());
        let a = store.submit_at(grounded_draft("Bakery"), instant()).expect("a").id.clone();
        let b = store.submit_at(grounded_draft("Bakery"), instant()).expect("b").id.clone();
        assert_ne!(a, b);
        assert_eq!(store.ids().len(), store.len());
    }

    #[test]
    fn append_rejects_duplicate_id() {
        let mut store = Store::load(MemoryStorage::new());
        let existing = store.records()[0].clone();
        let err = store.append(existing).expect_err("duplicate");
        assert!(matches!(err, KbError::DuplicateId(_)));
        assert_eq!(store.storage().writes(), 0);
    }

    #[test]
    fn clear_persists_empty_collection_and_next_load_seeds() {
        let mut store = Store::load(MemoryStorage::new());
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.storage().slot(STORAGE_KEY), Some("[]"));

        let reloaded = Store::load(store.storage().clone());
        assert_eq!(reloaded.records(), seed_records().as_slice());
    }

    #[test]
    fn filter_combines_area_kind_and_query() {
        let mut store = Store::load(MemoryStorage::new());
        store.submit_at(grounded_draft("Corner Bakery"), instant()).expect("submit");

        let by_area = RecordFilter { area: Some(BusinessArea::Marketing), ..Default::default() };
        assert!(store.filter(&by_area).all(|r| r.business_area == BusinessArea::Marketing));
        assert_eq!(store.filter(&by_area).count(), 1);

        let by_kind_and_query = RecordFilter {
            kind: Some(ResultKind::Grounded),
            query: Some("bakery".to_string()),
            ..Default::default()
        };
        let hits: Vec<_> = store.filter(&by_kind_and_query).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].company_type, "Corner Bakery");

        let blank_query = RecordFilter { query: Some("  ".to_string()), ..Default::default() };
        assert_eq!(store.filter(&blank_query).count(), store.len());
    }
}
