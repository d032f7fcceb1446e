//! CSV rendering of the whole collection

use crate::domain::{RecordResult, Solution, SolutionRecord};
use crate::error::KbResult;

pub const CSV_HEADERS: [&str; 19] = [
    "id",
    "timestamp",
    "companyType",
    "niche",
    "businessArea",
    "problemDescription",
    "resultType",
    "groundedAnswer",
    "groundedSources",
    "pa_identifiedProblem",
    "pa_impact",
    "st_title",
    "st_summary",
    "st_steps",
    "st_isPremium",
    "lt_title",
    "lt_summary",
    "lt_steps",
    "lt_isPremium",
];

/// Quote a cell only when it contains a comma, a double quote or a newline.
pub fn escape_cell(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Header line plus one row per record, joined by `\n` with no trailing newline.
pub fn encode_csv(records: &[SolutionRecord]) -> KbResult<String> {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for record in records {
        let row = record_row(record)?;
        lines.push(row.iter().map(|cell| escape_cell(cell)).collect::<Vec<_>>().join(","));
    }
    Ok(lines.join("\n"))
}

fn record_row(record: &SolutionRecord) -> KbResult<[String; 19]> {
    let mut row: [String; 19] = Default::default();
    row[0] = record.id.clone();
    row[1] = record.timestamp.clone();
    row[2] = record.company_type.clone();
    row[3] = record.niche.clone();
    row[4] = record.business_area.as_str().to_string();
    row[5] = record.problem_description.clone();
    row[6] = record.result.kind().type_name().to_string();

    match &record.result {
        RecordResult::Grounded(grounded) => {
            row[7] = grounded.answer.clone();
            row[8] = serde_json::to_string(&grounded.sources)?;
        }
        RecordResult::Analysis(analysis) => {
            row[9] = analysis.problem_analysis.identified_problem.clone();
            row[10] = analysis.problem_analysis.impact.clone();
            fill_solution(&mut row[11..15], &analysis.short_term_solution)?;
            fill_solution(&mut row[15..19], &analysis.long_term_solution)?;
        }
    }
    Ok(row)
}

fn fill_solution(cells: &mut [String], solution: &Solution) -> KbResult<()> {
    cells[0] = solution.title.clone();
    cells[1] = solution.summary.clone();
    cells[2] = serde_json::to_string(&solution.steps)?;
    cells[3] = solution.premium().to_string();
    Ok(())
}
