//! Shared CLI utilities.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::IsTerminal;

use crate::domain::SolutionRecord;

/// True when both stdin and stdout are attached to a terminal.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Use `value` when given, otherwise prompt for it on a terminal.
pub fn value_or_prompt(value: Option<&str>, prompt: &str, flag: &str) -> Result<String> {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        return Ok(value.to_string());
    }
    if !is_interactive() {
        anyhow::bail!("Missing {flag} (required in non-interactive sessions)");
    }
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()
        .with_context(|| format!("Failed to read {flag}"))
}

/// Local calendar date of a record, or the raw timestamp prefix.
pub fn local_date(record: &SolutionRecord) -> String {
    match DateTime::parse_from_rfc3339(&record.timestamp) {
        Ok(dt) => dt.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        Err(_) => record.timestamp.chars().take(10).collect(),
    }
}

/// One-line label used by pickers: `company - niche (date)`.
pub fn record_label(record: &SolutionRecord) -> String {
    format!("{} - {} ({})", record.company_type, record.niche, local_date(record))
}
