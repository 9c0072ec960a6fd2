//! Frontend module - Tokens and the Scanner

pub mod scanner;
pub mod token;
