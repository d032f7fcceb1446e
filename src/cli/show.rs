//! Show command implementation

use anyhow::Result;
use clap::Args;

use super::Session;
use crate::error::KbError;
use crate::render::record_to_markdown;

#[derive(Args)]
pub struct ShowArgs {
    /// Record id (see `list`)
    #[arg(value_name = "ID")]
    pub id: String,
}

pub fn run(args: &ShowArgs, session: Session) -> Result<()> {
    let store = session.open_store();
    let record = store.get(&args.id).ok_or_else(|| KbError::RecordNotFound(args.id.clone()))?;
    print!("{}", record_to_markdown(record));
    Ok(())
}
