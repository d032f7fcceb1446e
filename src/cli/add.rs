//! Add command implementation

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::utils::{is_interactive, value_or_prompt};
use super::Session;
use crate::domain::{BusinessArea, ExampleProblem, EXAMPLE_PROBLEMS};
use crate::intake::{build_draft, parse_result};

#[derive(Args)]
pub struct AddArgs {
    /// Type of company (e.g. 'Restaurant')
    #[arg(long, value_name = "TEXT")]
    pub company_type: Option<String>,

    /// Market niche (e.g. 'Healthy fast food')
    #[arg(long, value_name = "TEXT")]
    pub niche: Option<String>,

    /// Business area: marketing|sales|logistics|hr|finance|it|general
    #[arg(short = 'a', long, value_name = "AREA")]
    pub area: Option<String>,

    /// Description of the business problem
    #[arg(short = 'p', long, value_name = "TEXT")]
    pub problem: Option<String>,

    /// Use a sample problem (1-4, see `examples`) for description and area
    #[arg(long, value_name = "N")]
    pub example: Option<usize>,

    /// AI result document as JSON ('-' reads stdin)
    #[arg(short = 'r', long, value_name = "FILE")]
    pub result: PathBuf,
}

pub fn run(args: &AddArgs, session: Session) -> Result<()> {
    let example = args.example.map(pick_example).transpose()?;

    let raw = read_result_document(&args.result)?;
    let result = parse_result(&raw)
        .with_context(|| format!("Invalid AI result in {}", args.result.display()))?;

    let company_type =
        value_or_prompt(args.company_type.as_deref(), "Company type", "--company-type")?;
    let niche = value_or_prompt(args.niche.as_deref(), "Niche", "--niche")?;
    let problem = value_or_prompt(
        args.problem.as_deref().or(example.map(|e| e.description)),
        "Describe the problem",
        "--problem",
    )?;
    let area = match (&args.area, example) {
        (Some(area), _) => area.parse::<BusinessArea>()?,
        (None, Some(example)) => example.area,
        (None, None) => prompt_area()?,
    };

    let mut store = session.open_store();
    let draft = build_draft(&company_type, &niche, &problem, area, result);
    let record = store.submit(draft)?;

    println!(
        "Added {} ({}, {})",
        record.id,
        record.result.kind().type_name(),
        record.business_area.label()
    );
    println!("Knowledge base now holds {} records", store.len());
    Ok(())
}

fn pick_example(number: usize) -> Result<&'static ExampleProblem> {
    number
        .checked_sub(1)
        .and_then(|idx| EXAMPLE_PROBLEMS.get(idx))
        .with_context(|| format!("No example #{number} (choose 1-{})", EXAMPLE_PROBLEMS.len()))
}

fn read_result_document(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw).context("Failed reading AI result from stdin")?;
        return Ok(raw);
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed reading AI result: {}", path.display()))
}

fn prompt_area() -> Result<BusinessArea> {
    if !is_interactive() {
        return Ok(BusinessArea::default());
    }
    let labels: Vec<&str> = BusinessArea::ALL.iter().map(BusinessArea::label).collect();
    let default_idx = BusinessArea::ALL
        .iter()
        .position(|a| *a == BusinessArea::default())
        .unwrap_or(0);
    let idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Business area")
        .default(default_idx)
        .items(&labels)
        .interact()?;
    Ok(BusinessArea::ALL[idx])
}

#[cfg(test)]
mod tests {
    use super::pick_example;
    use crate::domain::BusinessArea;

    #[test]
    fn examples_are_numbered_from_one() {
        assert_eq!(pick_example(1).expect("first").area, BusinessArea::Sales);
        assert_eq!(pick_example(4).expect("last").area, BusinessArea::Logistics);
        assert!(pick_example(0).is_err());
        assert!(pick_example(5).is_err());
    }
}
