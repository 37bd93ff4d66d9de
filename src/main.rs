// src/main.rs
use anyhow::Result;
use clap::Parser;

use wordcount::cli::Args;
use wordcount::config::Config;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from(args);
    wordcount::run(&config)?;
    Ok(())
}
