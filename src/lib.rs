// src/lib.rs
pub mod cli;
pub mod config;
pub mod count;
pub mod error;
pub mod input;
pub mod output;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::config::Config;
use crate::count::TextStats;
use crate::error::Result;
use crate::output::Report;

/// Run one counting invocation against the configured input.
///
/// # Errors
///
/// 入力の読み込みやレポートの出力に失敗した場合に `Err` を返します。
pub fn run(config: &Config) -> Result<()> {
    let text = config.source.load()?;
    let stats = TextStats::measure(&text, config.graphemes);
    let report = Report::build(stats, config.mode);
    output::emit(&report, config)
}
