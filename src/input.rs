// src/input.rs
//! Input source resolution for the CLI.

use std::{fs, path::PathBuf};

use crate::error::{Result, WordcountError};

/// Where the text to analyse comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Literal text given on the command line.
    Literal(String),
    /// Path to a UTF-8 encoded text file.
    File(PathBuf),
}

impl InputSource {
    /// Load the text held by this source.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or is not valid UTF-8.
    pub fn load(&self) -> Result<String> {
        match self {
            Self::Literal(text) => Ok(text.clone()),
            Self::File(path) => {
                let bytes = fs::read(path).map_err(|source| WordcountError::FileRead {
                    path: path.clone(),
                    source,
                })?;
                String::from_utf8(bytes).map_err(|e| WordcountError::InvalidUtf8 {
                    path: path.clone(),
                    source: e.utf8_error(),
                })
            }
        }
    }
}
