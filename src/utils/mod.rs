//! Shared helpers

pub mod hashing;
pub mod text;

pub use hashing::record_id;
pub use text::truncate_to_width;
