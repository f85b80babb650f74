use tracing::{debug, trace, warn};

use super::cursor::Cursor;
use super::token::{Token, TokenKind};
use crate::errors::ScanError;
use crate::report::{Reporter, exit_code};

/// Everything produced by one scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    /// Tokens in source order, always ending with exactly one `Eof`.
    pub tokens: Vec<Token>,
    /// Set when at least one character could not be scanned.
    pub had_error: bool,
    /// Errors in the order they were reported.
    pub errors: Vec<ScanError>,
}

impl ScanResult {
    /// Text form of every token, one entry per line of output.
    pub fn lines(&self) -> Vec<String> {
        self.tokens.iter().map(Token::to_string).collect()
    }

    pub fn exit_code(&self) -> i32 {
        if self.had_error {
            exit_code::DATA_ERROR
        } else {
            exit_code::SUCCESS
        }
    }
}

/// Scans source code into a sequence of tokens.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    line: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            line: 1,
        }
    }

    /// Scan the whole source. An unexpected character is handed to
    /// `reporter` immediately and scanning carries on after it.
    pub fn scan_tokens<R: Reporter + ?Sized>(mut self, reporter: &mut R) -> ScanResult {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        debug!("scan started");

        loop {
            let start = self.cursor.pos();
            let line = self.line;
            let Some(grapheme) = self.cursor.advance() else {
                break;
            };

            match self.scan_token(grapheme) {
                Ok(Some(kind)) => {
                    let token = Token::new(kind, self.cursor.slice_from(start), line);
                    trace!(kind = %token.kind, lexeme = %token.lexeme, line, "token");
                    tokens.push(token);
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(%err, "skipping unscannable input");
                    reporter.report(&err);
                    errors.push(err);
                }
            }
        }

        tokens.push(Token::eof(self.line));
        debug!(tokens = tokens.len(), errors = errors.len(), "scan finished");

        ScanResult {
            tokens,
            had_error: !errors.is_empty(),
            errors,
        }
    }

    /// Classify one grapheme. `Ok(None)` means it was consumed without
    /// producing a token.
    fn scan_token(&mut self, grapheme: &str) -> Result<Option<TokenKind>, ScanError> {
        if let Some(kind) = punctuation(grapheme) {
            return Ok(Some(kind));
        }

        let kind = match grapheme {
            "!" => self.with_equal(TokenKind::BangEqual, TokenKind::Bang),
            "=" => self.with_equal(TokenKind::EqualEqual, TokenKind::Equal),
            "<" => self.with_equal(TokenKind::LessEqual, TokenKind::Less),
            ">" => self.with_equal(TokenKind::GreaterEqual, TokenKind::Greater),
            " " | "\r" | "\t" => return Ok(None),
            // CRLF segments as a single cluster.
            "\n" | "\r\n" => {
                self.line += 1;
                return Ok(None);
            }
            _ => return Err(ScanError::unexpected_character(grapheme, self.line)),
        };

        Ok(Some(kind))
    }

    fn with_equal(&mut self, two_char: TokenKind, one_char: TokenKind) -> TokenKind {
        if self.cursor.match_grapheme("=") {
            two_char
        } else {
            one_char
        }
    }
}

fn punctuation(grapheme: &str) -> Option<TokenKind> {
    let kind = match grapheme {
        "(" => TokenKind::LeftParen,
        ")" => TokenKind::RightParen,
        "{" => TokenKind::LeftBrace,
        "}" => TokenKind::RightBrace,
        "," => TokenKind::Comma,
        "." => TokenKind::Dot,
        "-" => TokenKind::Minus,
        "+" => TokenKind::Plus,
        ";" => TokenKind::Semicolon,
        "*" => TokenKind::Star,
        "/" => TokenKind::Slash,
        _ => return None,
    };
    Some(kind)
}
