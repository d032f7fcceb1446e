//! Output encoders (Markdown, CSV, JSON)
//!
//! Every encoder is a pure function of the records it is given: the same
//! records in the same order always produce byte-identical output.

pub mod csv;
pub mod json;
pub mod markdown;

pub use self::csv::{encode_csv, escape_cell, CSV_HEADERS};
pub use self::json::encode_json;
pub use self::markdown::{encode_markdown, record_to_markdown};
