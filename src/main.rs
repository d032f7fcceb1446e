//! solution-kb: keep AI-generated business analyses in a local knowledge base
//! and export them as Markdown, CSV or JSON.

use anyhow::Result;

fn main() -> Result<()> {
    solution_kb::cli::run()
}
