//! Error types for zodgen.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Conversion itself is total; these errors only surface from parsing a
//! single type expression and from the opt-in strict compilation modes.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the zodgen crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for zodgen operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records the input file name, keeping any context already attached.
    #[must_use]
    pub fn in_source(mut self, source: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_source(source));
        self
    }

    /// Creates a parse error at the given position.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: u32, column: u32, context: String) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            line,
            column,
            context,
        })
    }

    /// Creates a cyclic reference error for the given chain of declarations.
    #[must_use]
    pub fn cyclic_reference(cycle: Vec<String>) -> Self {
        Self::new(ErrorKind::CyclicReference { cycle })
    }

    /// Creates an unresolved type error.
    #[must_use]
    pub fn unresolved_type(declaration: impl Into<String>, expression: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnresolvedType {
            declaration: declaration.into(),
            expression: expression.into(),
        })
    }

    /// Returns true if this is a parse error.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self.kind, ErrorKind::ParseError { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A type expression could not be parsed.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// Declarations reference each other in a cycle and cannot be ordered.
    #[error("unsupported cyclic reference: {}", .cycle.join(" -> "))]
    CyclicReference {
        /// Declaration names along the cycle; the first name is repeated at the end.
        cycle: Vec<String>,
    },

    /// A type expression fell back to the accept-anything validator under the strict policy.
    #[error("unresolved type `{expression}` in {declaration}")]
    UnresolvedType {
        /// The declaration containing the expression.
        declaration: String,
        /// The expression that could not be resolved.
        expression: String,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Input file name, if known.
    pub source: Option<String>,
    /// Declaration being processed.
    pub declaration: Option<String>,
    /// Line number in source.
    pub line: Option<u32>,
    /// Column number in source.
    pub column: Option<u32>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input file name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the declaration name.
    #[must_use]
    pub fn with_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.declaration = Some(declaration.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        if let Some(declaration) = &self.declaration {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "in {declaration}")?;
        }
        Ok(())
    }
}
