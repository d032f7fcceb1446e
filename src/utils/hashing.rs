//! Stable hashing for record IDs

use sha2::{Digest, Sha256};

pub const RECORD_ID_PREFIX: &str = "sol-";

/// Derive a record id from its creation instant and content.
///
/// `attempt` is bumped by the caller when the derived id is already taken.
pub fn record_id(timestamp: &str, company_type: &str, problem: &str, attempt: u32) -> String {
    let hash_input = format!("{timestamp}\n{company_type}\n{problem}\n{attempt}");
    let mut hasher = Sha256::new();
    hasher.update(hash_input.as_bytes());
    let result = hasher.finalize();
    format!("{RECORD_ID_PREFIX}{}", &format!("{:x}", result)[..16])
}
