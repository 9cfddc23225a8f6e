//! Declaration types produced by the extractor.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::span::Span;

/// Something stored in a registry table under a unique name.
pub trait Named {
    /// The declaration's name.
    fn name(&self) -> &str;
}

/// Which registry a declaration belongs to.
///
/// The derived ordering is the default emission order: enums, aliases, shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeclarationKind {
    /// `enum Name { ... }`
    Enum,
    /// `type Name = ...`
    Alias,
    /// `interface Name { ... }`
    Shape,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Enum => "enum",
            Self::Alias => "type alias",
            Self::Shape => "interface",
        })
    }
}

/// One member of a shape declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Field {
    /// Member name, unquoted.
    pub name: String,
    /// Type expression text; whitespace between tokens is collapsed, literals are verbatim.
    pub type_text: String,
    /// Whether the member was declared with `?`.
    pub optional: bool,
    /// Text of the JSDoc comment preceding the member.
    pub description: Option<String>,
    /// Location of the member name.
    pub span: Span,
}

impl Field {
    /// Creates a required field without a description.
    #[must_use]
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
            optional: false,
            description: None,
            span: Span::default(),
        }
    }

    /// Marks the field optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An `interface` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeDeclaration {
    /// Interface name.
    pub name: String,
    /// Names listed in the `extends` clause, in order.
    pub extends: Vec<String>,
    /// Members in declaration order.
    pub fields: Vec<Field>,
    /// Location of the `interface` keyword.
    pub span: Span,
}

/// A `type` alias declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeAliasDeclaration {
    /// Alias name.
    pub name: String,
    /// Right-hand side text; whitespace between tokens is collapsed, literals are verbatim.
    pub type_text: String,
    /// Location of the `type` keyword.
    pub span: Span,
}

/// An `enum` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnumDeclaration {
    /// Enum name.
    pub name: String,
    /// Member values in declaration order.
    pub values: Vec<String>,
    /// Location of the `enum` keyword.
    pub span: Span,
}

impl Named for ShapeDeclaration {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for TypeAliasDeclaration {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for EnumDeclaration {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A non-fatal problem found while reading declarations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    /// Where the problem was found.
    pub span: Span,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic and logs it as a warning.
    #[must_use]
    pub fn warn(span: Span, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::warn!(line = span.line, column = span.column, "{message}");
        Self { span, message }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.span, self.message)
    }
}
