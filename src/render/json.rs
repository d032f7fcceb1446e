//! JSON rendering of the whole collection
//!
//! This is also the persisted format, so anything written here loads back
//! through the store unchanged.

use crate::domain::SolutionRecord;
use crate::error::KbResult;

pub fn encode_json(records: &[SolutionRecord]) -> KbResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::encode_json;
    use crate::domain::SolutionRecord;
    use crate::store::{seed_records, MemoryStorage, Store, STORAGE_KEY};

    #[test]
    fn round_trips_through_serde() {
        let records = seed_records();
        let json = encode_json(&records).expect("json");
        let parsed: Vec<SolutionRecord> = serde_json::from_str(&json).expect("parse");
        similar_asserts::assert_eq!(parsed, records);
    }

    #[test]
    fn export_reloads_through_store() {
        let records = seed_records();
        let json = encode_json(&records).expect("json");
        let store = Store::load(MemoryStorage::with_slot(STORAGE_KEY, &json));
        similar_asserts::assert_eq!(store.records(), records.as_slice());
        similar_asserts::assert_eq!(encode_json(store.records()).expect("json"), json);
    }

    #[test]
    fn uses_two_space_indentation_and_camel_case() {
        let json = encode_json(&seed_records()).expect("json");
        assert!(json.starts_with("[\n  {\n    \"id\": "));
        assert!(json.contains("\"companyType\": "));
        assert!(json.contains("\"kind\": \"grounded\""));
    }
}
