//! Clear command implementation

use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

use super::utils::is_interactive;
use super::Session;

#[derive(Args)]
pub struct ClearArgs {
    /// Do not ask for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}

pub fn run(args: &ClearArgs, session: Session) -> Result<()> {
    let mut store = session.open_store();
    let count = store.len();

    if !args.yes {
        if !is_interactive() {
            anyhow::bail!("Refusing to clear {count} records without --yes");
        }
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete all {count} records?"))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Nothing removed.");
            return Ok(());
        }
    }

    store.clear();
    println!("Removed {count} records. The next run starts from the built-in sample records.");
    Ok(())
}
