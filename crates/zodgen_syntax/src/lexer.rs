//! Lexer for TypeScript declaration sources.
//!
//! The lexer converts source text into a stream of tokens. It never fails:
//! characters it does not understand become [`TokenKind::Other`] and broken
//! literals become [`TokenKind::Error`], so scanning always reaches the end.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for TypeScript source code.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::point(start, start_line, start_column),
            );
        };

        let kind = match c {
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '<' => self.single(TokenKind::LAngle),
            '>' => self.single(TokenKind::RAngle),
            '|' => self.single(TokenKind::Pipe),
            '&' => self.single(TokenKind::Amp),
            '?' => self.single(TokenKind::Question),
            ':' => self.single(TokenKind::Colon),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '.' => self.single(TokenKind::Dot),
            '=' => {
                self.advance();
                if self.peek_char() == Some('>') {
                    self.advance();
                    TokenKind::Arrow
                } else {
                    TokenKind::Equals
                }
            }
            '/' => match self.peek_char_n(1) {
                Some('/') => self.scan_line_comment(),
                Some('*') => self.scan_block_comment(),
                _ => self.single(TokenKind::Other('/')),
            },
            '"' | '\'' => self.scan_string(c),
            '`' => self.scan_template(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_ident_start(c) => self.scan_ident(),
            c => self.single(TokenKind::Other(c)),
        };

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes all source and returns a vector of tokens ending in `Eof`.
    ///
    /// Comments are included in the output.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Tokenizes all source, dropping plain comments but keeping doc comments.
    #[must_use]
    pub fn tokenize_significant(source: &str) -> Vec<Token> {
        Self::tokenize_all(source)
            .into_iter()
            .filter(|t| !t.kind.is_trivia())
            .collect()
    }

    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Consumes one character and yields `kind`.
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Scans a `// ...` comment up to (not including) the newline.
    fn scan_line_comment(&mut self) -> TokenKind {
        let start = self.position;
        while self.peek_char().is_some_and(|c| c != '\n') {
            self.advance();
        }
        TokenKind::Comment(self.source[start..self.position].to_string())
    }

    /// Scans a `/* ... */` comment; `/** ... */` becomes a doc comment.
    fn scan_block_comment(&mut self) -> TokenKind {
        let start = self.position;
        self.advance(); // '/'
        self.advance(); // '*'
        let is_doc = self.peek_char() == Some('*') && self.peek_char_n(1) != Some('/');

        loop {
            match self.peek_char() {
                Some('*') if self.peek_char_n(1) == Some('/') => {
                    self.advance();
                    self.advance();
                    break;
                }
                Some(_) => self.advance(),
                None => return TokenKind::Error("unterminated block comment".into()),
            }
        }

        let text = &self.source[start..self.position];
        if is_doc {
            TokenKind::DocComment(clean_doc_comment(text))
        } else {
            TokenKind::Comment(text.to_string())
        }
    }

    /// Scans a single- or double-quoted string, keeping escapes raw.
    fn scan_string(&mut self, quote: char) -> TokenKind {
        self.advance(); // opening quote
        let mut value = String::new();
        loop {
            match self.peek_char() {
                Some(c) if c == quote => {
                    self.advance();
                    return TokenKind::Str { value, quote };
                }
                Some('\\') => {
                    value.push('\\');
                    self.advance();
                    match self.peek_char() {
                        Some('\n') | None => {
                            return TokenKind::Error("unterminated string literal".into());
                        }
                        Some(c) => {
                            value.push(c);
                            self.advance();
                        }
                    }
                }
                Some('\n') | None => {
                    return TokenKind::Error("unterminated string literal".into());
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
    }

    /// Scans a template literal between backticks.
    fn scan_template(&mut self) -> TokenKind {
        self.advance(); // opening '`'
        let mut value = String::new();
        loop {
            match self.peek_char() {
                Some('`') => {
                    self.advance();
                    return TokenKind::Template(value);
                }
                Some('\\') => {
                    value.push('\\');
                    self.advance();
                    if let Some(c) = self.peek_char() {
                        value.push(c);
                        self.advance();
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => return TokenKind::Error("unterminated template literal".into()),
            }
        }
    }

    /// Scans numeric literal text (decimal, hex, separators, fractions).
    fn scan_number(&mut self) -> TokenKind {
        let start = self.position;
        while self
            .peek_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            self.advance();
        }
        TokenKind::Number(self.source[start..self.position].to_string())
    }

    fn scan_ident(&mut self) -> TokenKind {
        let start = self.position;
        while self.peek_char().is_some_and(is_ident_char) {
            self.advance();
        }
        TokenKind::Ident(self.source[start..self.position].to_string())
    }
}

/// Returns true if `c` can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Returns true if `c` can appear in an identifier after the first character.
fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Strips `/**`, `*/` and leading `*` gutters, joining lines with single spaces.
fn clean_doc_comment(text: &str) -> String {
    let body = text.strip_prefix("/**").unwrap_or(text);
    let body = body.strip_suffix("*/").unwrap_or(body);
    body.lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('*').unwrap_or(line).trim()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
