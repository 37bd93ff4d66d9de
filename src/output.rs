// src/output.rs
//! Report construction and emission.

use serde::Serialize;

use crate::cli::{CountMode, OutputFormat};
use crate::config::Config;
use crate::count::TextStats;
use crate::error::Result;

/// Metrics selected for one invocation.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chars: Option<usize>,
}

impl Report {
    #[must_use]
    pub fn build(stats: TextStats, mode: Option<CountMode>) -> Self {
        match mode {
            None => Self {
                words: Some(stats.words),
                lines: Some(stats.lines),
                chars: Some(stats.chars),
            },
            Some(CountMode::Words) => Self {
                words: Some(stats.words),
                lines: None,
                chars: None,
            },
            Some(CountMode::Lines) => Self {
                words: None,
                lines: Some(stats.lines),
                chars: None,
            },
            Some(CountMode::Chars) => Self {
                words: None,
                lines: None,
                chars: Some(stats.chars),
            },
        }
    }
}

/// Print the report in the configured format.
///
/// # Errors
///
/// Returns an error when JSON serialization fails.
pub fn emit(report: &Report, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Plain => emit_plain(report),
        OutputFormat::Json => emit_json(report)?,
    }
    Ok(())
}

fn emit_plain(report: &Report) {
    // 単一メトリクスは整数のみ出力
    if let Some(value) = single_metric(report) {
        println!("{value}");
        return;
    }
    if let Some(words) = report.words {
        println!("words={words}");
    }
    if let Some(lines) = report.lines {
        println!("lines={lines}");
    }
    if let Some(chars) = report.chars {
        println!("chars={chars}");
    }
}

fn single_metric(report: &Report) -> Option<usize> {
    match (report.words, report.lines, report.chars) {
        (Some(v), None, None) | (None, Some(v), None) | (None, None, Some(v)) => Some(v),
        _ => None,
    }
}

fn emit_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
