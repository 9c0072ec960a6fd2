//! Error handling for the scanner

use thiserror::Error;

/// Lexical errors. Neither kind stops the scan; the scanner records them
/// and keeps going.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("Unexpected character: {ch}")]
    UnexpectedCharacter { ch: char, line: usize },

    #[error("Unterminated string.")]
    UnterminatedString { line: usize },
}

impl LexError {
    /// Get the line the error was detected on
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } => *line,
            Self::UnterminatedString { line } => *line,
        }
    }
}
