//! Utility module

mod diagnostics;
mod error;
mod span;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::LexError;
pub use span::Span;
