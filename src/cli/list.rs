//! List command implementation

use anyhow::Result;
use clap::Args;
use console::style;

use super::utils::local_date;
use super::Session;
use crate::domain::{BusinessArea, ResultKind};
use crate::store::RecordFilter;
use crate::utils::truncate_to_width;

const PROBLEM_WIDTH: usize = 72;

#[derive(Args)]
pub struct ListArgs {
    /// Only records in this business area
    #[arg(short = 'a', long, value_name = "AREA")]
    pub area: Option<String>,

    /// Only records of this result kind: grounded|analysis
    #[arg(short = 'k', long, value_name = "KIND")]
    pub kind: Option<String>,

    /// Case-insensitive text to find in company type, niche or problem
    #[arg(short = 'q', long, value_name = "TEXT")]
    pub query: Option<String>,
}

impl ListArgs {
    fn filter(&self) -> Result<RecordFilter> {
        Ok(RecordFilter {
            area: self.area.as_deref().map(str::parse::<BusinessArea>).transpose()?,
            kind: self.kind.as_deref().map(str::parse::<ResultKind>).transpose()?,
            query: self.query.clone(),
        })
    }
}

pub fn run(args: &ListArgs, session: Session) -> Result<()> {
    let filter = args.filter()?;
    let store = session.open_store();
    let matches: Vec<_> = store.filter(&filter).collect();

    println!(
        "{}",
        style(format!("Knowledge base: {} of {} records", matches.len(), store.len())).bold()
    );
    if matches.is_empty() {
        println!("No records match.");
        return Ok(());
    }

    for record in matches {
        println!(
            "{}  {}  {:<16} {} / {}",
            style(&record.id).cyan(),
            local_date(record),
            record.business_area.label(),
            record.company_type,
            record.niche
        );
        println!(
            "    {} {}",
            style(record.result.kind().type_name()).dim(),
            truncate_to_width(&record.problem_description, PROBLEM_WIDTH)
        );
    }
    Ok(())
}
