//! Scanner for Lox
//!
//! Converts source code into a list of tokens. The scan never fails: bad
//! input is reported through [`Diagnostics`] and skipped, and the token list
//! always ends with a single EOF token.

use log::{debug, trace};

use crate::frontend::token::{Literal, Token, TokenKind};
use crate::utils::{Diagnostics, LexError, Span};

/// Everything a scan produces
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Diagnostics,
}

impl ScanOutput {
    /// True if any lexical error was reported
    pub fn had_error(&self) -> bool {
        self.diagnostics.had_error()
    }
}

/// Scan `source` into tokens
pub fn tokenize(source: &str) -> ScanOutput {
    Scanner::new(source).scan_tokens()
}

/// The scanner state. Lives for exactly one scan.
pub struct Scanner {
    /// Source code as characters
    source: Vec<char>,
    /// Start of the lexeme being scanned
    start: usize,
    /// Next character to consume
    current: usize,
    /// Current 1-based line
    line: usize,
    tokens: Vec<Token>,
    diagnostics: Diagnostics,
}

impl Scanner {
    /// Create a new scanner for the given source code
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Scan the entire source, consuming the scanner
    pub fn scan_tokens(mut self) -> ScanOutput {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line, self.current));
        debug!(
            "scanned {} tokens over {} lines ({} errors)",
            self.tokens.len(),
            self.line,
            self.diagnostics.len()
        );

        ScanOutput {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    /// Get the current character without advancing
    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    /// Get the character after the current one without advancing
    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    /// Advance to the next character
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += 1;
        Some(c)
    }

    /// Consume the current character only if it is `expected`
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn lexeme(&self, start: usize, end: usize) -> String {
        self.source[start..end].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = Token::new(
            kind,
            self.lexeme(self.start, self.current),
            literal,
            self.line,
            Span::new(self.start, self.current),
        );
        debug_assert!(!token.span.is_empty());
        trace!("{} at line {}", token, token.line);
        self.tokens.push(token);
    }

    fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen, None),
            ')' => self.add_token(TokenKind::RightParen, None),
            '{' => self.add_token(TokenKind::LeftBrace, None),
            '}' => self.add_token(TokenKind::RightBrace, None),
            ',' => self.add_token(TokenKind::Comma, None),
            '.' => self.add_token(TokenKind::Dot, None),
            '-' => self.add_token(TokenKind::Minus, None),
            '+' => self.add_token(TokenKind::Plus, None),
            ';' => self.add_token(TokenKind::Semicolon, None),
            '*' => self.add_token(TokenKind::Star, None),
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind, None);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind, None);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind, None);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind, None);
            }
            '/' => {
                if self.match_char('/') {
                    // Line comment: runs up to, not including, the newline
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash, None);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.read_string(),
            c if c.is_ascii_digit() => self.read_number(),
            c if c.is_alphabetic() || c == '_' => self.read_identifier(),
            c => self.diagnostics.error(LexError::UnexpectedCharacter { ch: c, line: self.line }),
        }
    }

    /// Read a string literal. The opening quote is already consumed.
    fn read_string(&mut self) {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.diagnostics.error(LexError::UnterminatedString { line: self.line });
            return;
        }

        self.advance(); // closing quote

        // No escape processing: the content between the quotes is kept as is
        let value = self.lexeme(self.start + 1, self.current - 1);
        self.add_token(TokenKind::String, Some(Literal::Str(value)));
    }

    /// Read a number literal, with an optional fractional part
    fn read_number(&mut self) {
        self.skip_digits();

        // A trailing `.` without a digit after it belongs to the next token
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume '.'
            self.skip_digits();
        }

        // Digits with an optional `.digits` tail are always valid f64 syntax
        // and runs past f64 range parse to infinity, so the NaN arm is dead.
        let text = self.lexeme(self.start, self.current);
        let value = text.parse::<f64>().unwrap_or(f64::NAN);
        self.add_token(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Read an identifier or keyword
    fn read_identifier(&mut self) {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = self.lexeme(self.start, self.current);
        let kind = TokenKind::keyword_from_str(&text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind, None);
    }
}
