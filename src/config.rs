// src/config.rs
use crate::cli::{Args, CountMode, OutputFormat};
use crate::input::InputSource;

/// Runtime configuration lowered from the CLI arguments.
#[derive(Debug)]
pub struct Config {
    pub source: InputSource,
    pub mode: Option<CountMode>,
    pub format: OutputFormat,
    pub graphemes: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        // clap の input グループが --text / --file の排他と必須を保証する
        let source = match (args.text, args.file) {
            (Some(text), _) => InputSource::Literal(text),
            (None, Some(path)) => InputSource::File(path),
            (None, None) => unreachable!("clap input group requires --text or --file"),
        };

        Self {
            source,
            mode: args.mode,
            format: args.format,
            graphemes: args.graphemes,
        }
    }
}
