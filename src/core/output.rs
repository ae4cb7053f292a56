//! Compact output rendering helpers for CLI surfaces.
//!
//! Keeps validation output bounded and readable while preserving signal.

use crate::core::error::AddonError;
use crate::core::harness::{Report, SelfTestOutcome};
use crate::core::result::ValidatorResult;
use crate::core::validator::Validator;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;

/// Widest message rendered on a single outcome line.
const MAX_MESSAGE_CHARS: usize = 110;

/// Collapse newlines/extra whitespace and bound length for terminal display.
pub fn compact_line(input: &str, max_chars: usize) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}

/// Render up to `max_items` messages with compact formatting.
pub fn preview_messages(messages: &[String], max_items: usize, max_chars: usize) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let shown = messages
        .iter()
        .take(max_items)
        .map(|m| compact_line(m, max_chars))
        .collect::<Vec<_>>()
        .join(" | ");
    if messages.len() > max_items {
        format!("{} (+{} more)", shown, messages.len() - max_items)
    } else {
        shown
    }
}

/// Diagnostic line on stderr, printed only when `ADDON_VALIDATOR_TRACE=1`.
pub fn trace(scope: &str, message: &str) {
    if std::env::var("ADDON_VALIDATOR_TRACE").ok().as_deref() == Some("1") {
        eprintln!("addon-validator: trace {}: {}", scope, message);
    }
}

fn marker(result: &ValidatorResult) -> String {
    match result {
        ValidatorResult::Success => "PASS".bright_green().bold().to_string(),
        ValidatorResult::Failure { .. } => "FAIL".bright_red().bold().to_string(),
        ValidatorResult::Error { .. } => "ERROR".bright_magenta().bold().to_string(),
    }
}

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    for outcome in &report.outcomes {
        let _ = write!(
            out,
            "{} {} {} [{}]",
            marker(&outcome.result),
            outcome.code.bold(),
            outcome.name,
            outcome.addon_id
        );
        if !outcome.result.is_success() {
            let _ = write!(
                out,
                ": {}",
                compact_line(outcome.result.message(), MAX_MESSAGE_CHARS)
            );
        }
        out.push('\n');
    }
    let s = &report.summary;
    let _ = writeln!(
        out,
        "validate: summary total={} success={} failure={} error={}",
        s.total, s.success, s.failure, s.error
    );
    out
}

pub fn render_json<T: Serialize>(value: &T) -> Result<String, AddonError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AddonError::OutputError(e.to_string()))
}

#[derive(Serialize)]
struct ValidatorListing {
    code: &'static str,
    name: &'static str,
    description: &'static str,
}

pub fn render_validator_list(validators: &[Validator], json: bool) -> Result<String, AddonError> {
    if json {
        let listing: Vec<_> = validators
            .iter()
            .map(|v| ValidatorListing {
                code: v.code,
                name: v.name,
                description: v.description,
            })
            .collect();
        return render_json(&listing);
    }
    let mut out = String::new();
    for v in validators {
        let _ = writeln!(out, "{}  {:<16} {}", v.code.bold(), v.name, v.description);
    }
    Ok(out)
}

pub fn render_self_tests(outcomes: &[SelfTestOutcome]) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        let status = if outcome.passed() {
            "ok".bright_green().to_string()
        } else {
            "FAILED".bright_red().bold().to_string()
        };
        let _ = writeln!(
            out,
            "selftest {} {} ... {} (succeeding={} failing={})",
            outcome.code, outcome.name, status, outcome.succeeding_checked, outcome.failing_checked
        );
        if !outcome.passed() {
            let _ = writeln!(
                out,
                "  {}",
                preview_messages(&outcome.mismatches, 3, MAX_MESSAGE_CHARS)
            );
        }
    }
    out
}
