//! Diagnostic collection
//!
//! The scanner never prints. Every problem it finds goes through
//! [`Diagnostics::report`], which records a structured entry and flips the
//! error flag. The caller decides where the entries end up.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::LexError;

/// A single reported problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based source line
    pub line: usize,
    /// Extra location annotation printed right after `Error`
    pub location: Option<String>,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line,
            self.location.as_deref().unwrap_or(""),
            self.message
        )
    }
}

impl From<&LexError> for Diagnostic {
    fn from(err: &LexError) -> Self {
        Self {
            line: err.line(),
            location: None,
            message: err.to_string(),
        }
    }
}

/// Collector for diagnostics produced during a scan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    had_error: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a problem at `line`. Sets the error flag, which is never cleared.
    pub fn report(&mut self, line: usize, location: Option<&str>, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            line,
            location: location.map(str::to_string),
            message: message.into(),
        };
        log::debug!("reported: {}", diagnostic);
        self.entries.push(diagnostic);
        self.had_error = true;
    }

    /// Record a lexical error
    pub fn error(&mut self, err: LexError) {
        let Diagnostic { line, location, message } = Diagnostic::from(&err);
        self.report(line, location.as_deref(), message);
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
