//! Token types for TypeScript declaration sources.
//!
//! Tokens are the output of the lexer and input to both the type-expression
//! parser and the declaration extractor.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns true if this token is the identifier `name`.
    #[must_use]
    pub fn is_ident(&self, name: &str) -> bool {
        matches!(&self.kind, TokenKind::Ident(n) if n == name)
    }

    /// Returns the identifier text if this token is an identifier.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(n) => Some(n),
            _ => None,
        }
    }
}

/// Token types for TypeScript declaration sources.
///
/// Only the punctuation the type grammar cares about gets its own kind;
/// everything else becomes [`TokenKind::Other`] so arbitrary code lexes cleanly.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Delimiters
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `<`
    LAngle,
    /// `>`
    RAngle,

    // Punctuation
    /// `|`
    Pipe,
    /// `&`
    Amp,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `=`
    Equals,
    /// `.`
    Dot,
    /// `=>`
    Arrow,

    // Atoms
    /// Identifier or keyword like `interface` or `User`
    Ident(String),
    /// Quoted string; `value` is the raw text between the quotes, escapes untouched
    Str {
        /// Raw contents between the quotes.
        value: String,
        /// The quote character, `'` or `"`.
        quote: char,
    },
    /// Numeric literal text like `42` or `0x1f`
    Number(String),
    /// Template literal text between backticks
    Template(String),

    // Trivia
    /// `/** ... */` with the comment markers and leading `*` stripped
    DocComment(String),
    /// `// ...` or `/* ... */`
    Comment(String),

    // Meta
    /// Any other single character
    Other(char),
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns true if this token kind should be ignored by the parsers.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns true for tokens that open a nested group.
    #[must_use]
    pub const fn is_open_delimiter(&self) -> bool {
        matches!(
            self,
            Self::LBrace | Self::LParen | Self::LBracket | Self::LAngle
        )
    }

    /// Returns true for tokens that close a nested group.
    #[must_use]
    pub const fn is_close_delimiter(&self) -> bool {
        matches!(
            self,
            Self::RBrace | Self::RParen | Self::RBracket | Self::RAngle
        )
    }

    /// Returns true for operators after which a type expression continues
    /// onto the next line.
    #[must_use]
    pub const fn continues_expression(&self) -> bool {
        matches!(
            self,
            Self::Pipe
                | Self::Amp
                | Self::Equals
                | Self::LAngle
                | Self::Comma
                | Self::Colon
                | Self::Arrow
                | Self::Question
        )
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LAngle => "'<'",
            Self::RAngle => "'>'",
            Self::Pipe => "'|'",
            Self::Amp => "'&'",
            Self::Question => "'?'",
            Self::Colon => "':'",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Equals => "'='",
            Self::Dot => "'.'",
            Self::Arrow => "'=>'",
            Self::Ident(_) => "identifier",
            Self::Str { .. } => "string",
            Self::Number(_) => "number",
            Self::Template(_) => "template literal",
            Self::DocComment(_) => "doc comment",
            Self::Comment(_) => "comment",
            Self::Other(_) => "character",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
