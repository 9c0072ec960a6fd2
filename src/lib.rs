//! Lox scanner
//!
//! Lexical analysis for the Lox scripting language: source text in, tokens
//! and diagnostics out.

pub mod feedback;
pub mod frontend;
pub mod utils;

pub use frontend::scanner::{tokenize, ScanOutput, Scanner};
pub use frontend::token::{Literal, Token, TokenKind};
pub use utils::{Diagnostic, Diagnostics, LexError, Span};
