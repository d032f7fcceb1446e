//! Markdown rendering of selected records

use chrono::{DateTime, Local};

use crate::domain::{AnalysisResult, GroundedAnswer, RecordResult, Solution, SolutionRecord};

pub const RECORD_SEPARATOR: &str = "\n\n---\n\n";
pub const UNTITLED_SOURCE: &str = "Untitled source";

pub fn encode_markdown(records: &[&SolutionRecord]) -> String {
    records.iter().map(|r| record_to_markdown(r)).collect::<Vec<_>>().join(RECORD_SEPARATOR)
}

pub fn record_to_markdown(record: &SolutionRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Solution for: {} - {}\n\n", record.company_type, record.niche));
    out.push_str(&format!("**Date:** {}\n", format_local_timestamp(&record.timestamp)));
    out.push_str(&format!("**Area:** {}\n\n", record.business_area));
    out.push_str("## Problem Described\n");
    out.push_str(&blockquote(&record.problem_description));
    out.push_str("\n---\n\n");
    out.push_str("## Analysis and Solution\n\n");

    match &record.result {
        RecordResult::Grounded(grounded) => push_grounded(&mut out, grounded),
        RecordResult::Analysis(analysis) => push_analysis(&mut out, analysis),
    }
    out
}

fn push_grounded(out: &mut String, grounded: &GroundedAnswer) {
    out.push_str(&grounded.answer);
    out.push_str("\n\n");
    if grounded.sources.is_empty() {
        return;
    }
    out.push_str("### Sources\n");
    for source in &grounded.sources {
        let title = source.title.as_deref().filter(|t| !t.is_empty()).unwrap_or(UNTITLED_SOURCE);
        out.push_str(&format!("- [{}]({})\n", title, source.uri));
    }
}

fn push_analysis(out: &mut String, analysis: &AnalysisResult) {
    out.push_str("### Problem Diagnosis\n");
    out.push_str(&format!(
        "**Identified Problem:** {}\n",
        analysis.problem_analysis.identified_problem
    ));
    out.push_str(&format!("**Business Impact:** {}\n\n", analysis.problem_analysis.impact));
    push_solution(out, "Short-Term Solution", &analysis.short_term_solution);
    out.push('\n');
    push_solution(out, "Long-Term Solution", &analysis.long_term_solution);
}

fn push_solution(out: &mut String, horizon: &str, solution: &Solution) {
    let premium = if solution.premium() { " **(Premium)**" } else { "" };
    out.push_str(&format!("### {}: {}{}\n", horizon, solution.title, premium));
    out.push_str(&format!("**Summary:** {}\n", solution.summary));
    out.push_str("**Steps:**\n");
    for (idx, step) in solution.steps.iter().enumerate() {
        out.push_str(&format!("{}. **{}**: {}\n", idx + 1, step.title, step.description));
    }
}

fn blockquote(text: &str) -> String {
    let mut quoted = String::new();
    for line in text.lines() {
        if line.is_empty() {
            quoted.push_str(">\n");
        } else {
            quoted.push_str(&format!("> {line}\n"));
        }
    }
    if quoted.is_empty() {
        quoted.push_str(">\n");
    }
    quoted
}

/// Render an ISO-8601 timestamp in local time; unparsable values pass through.
fn format_local_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
