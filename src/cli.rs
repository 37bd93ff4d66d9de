// src/cli.rs
use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

/// Metric selected with `--mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CountMode {
    Words,
    Lines,
    Chars,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "wordcount", version, about = "テキスト/ファイルの単語数・行数・文字数の集計ツール")]
#[command(group = ArgGroup::new("input").required(true).args(["text", "file"]))]
pub struct Args {
    /// 計測するテキスト
    #[arg(long)]
    pub text: Option<String>,

    /// UTF-8 テキストファイルのパス
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// 単一メトリクスのみ表示
    #[arg(long, value_enum)]
    pub mode: Option<CountMode>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// 文字数を書記素クラスタ単位で数える
    #[arg(long)]
    pub graphemes: bool,
}
