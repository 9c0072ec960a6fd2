//! Structured scan report
//!
//! Machine-readable view of a scan for tools that want the token stream
//! without parsing the text format.

use serde::{Deserialize, Serialize};

use crate::frontend::scanner::ScanOutput;
use crate::frontend::token::Token;
use crate::utils::Diagnostic;

/// Complete report for one scanned file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// False if any lexical error was reported
    pub success: bool,
    pub source_file: String,
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
    pub stats: ScanStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Includes the EOF token
    pub token_count: usize,
    pub error_count: usize,
    /// Line the scan finished on
    pub line_count: usize,
}

impl ScanReport {
    pub fn new(source_file: &str, output: &ScanOutput) -> Self {
        let line_count = output.tokens.last().map_or(1, |t| t.line);
        Self {
            success: !output.had_error(),
            source_file: source_file.to_string(),
            tokens: output.tokens.clone(),
            diagnostics: output.diagnostics.iter().cloned().collect(),
            stats: ScanStats {
                token_count: output.tokens.len(),
                error_count: output.diagnostics.len(),
                line_count,
            },
        }
    }

    /// Convert to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
