//! Validator intermediate representation.
//!
//! A [`Validator`] is the converted form of a type expression or declaration.
//! Its `Display` implementation renders Zod builder code.
//!
//! # Example
//!
//! ```
//! use zodgen_codegen::Validator;
//! use zodgen_foundation::Primitive;
//!
//! let tags = Validator::array(Validator::Primitive(Primitive::String)).optional();
//! assert_eq!(tags.to_string(), "z.array(z.string()).optional()");
//! ```

use std::fmt::{self, Write};

use zodgen_foundation::Primitive;
use zodgen_syntax::StringLiteral;

/// Suffix appended to a declaration name to form its schema identifier.
pub const SCHEMA_SUFFIX: &str = "Schema";

/// Returns the schema identifier for a declaration name.
#[must_use]
pub fn schema_name(name: &str) -> String {
    format!("{name}{SCHEMA_SUFFIX}")
}

/// A runtime validator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validator {
    /// `z.string()`, `z.number()`, ...
    Primitive(Primitive),
    /// `z.literal('x')`, quote style preserved
    Literal(StringLiteral),
    /// `z.array(T)`
    Array(Box<Validator>),
    /// `z.record(V)`
    Record(Box<Validator>),
    /// `z.union([A, B])`
    Union(Vec<Validator>),
    /// Enumeration values in declared order
    Enum(Vec<String>),
    /// `z.object({ ... })`, possibly extending other shapes
    Object(ObjectSchema),
    /// `NameSchema`
    Reference(String),
    /// `z.any()` with a marker naming the unresolved expression
    Unresolved(String),
    /// `T.optional()`
    Optional(Box<Validator>),
    /// `T.describe("...")`
    Described {
        /// The described validator.
        inner: Box<Validator>,
        /// Description text, unescaped.
        description: String,
    },
}

/// The body of an object validator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectSchema {
    /// Names of extended shape declarations, in order.
    pub extends: Vec<String>,
    /// Own fields in declaration order.
    pub fields: Vec<ObjectField>,
}

/// One entry of an object validator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectField {
    /// Property name, unquoted.
    pub name: String,
    /// The property's validator.
    pub validator: Validator,
}

impl ObjectField {
    /// Creates a field.
    #[must_use]
    pub fn new(name: impl Into<String>, validator: Validator) -> Self {
        Self {
            name: name.into(),
            validator,
        }
    }
}

impl Validator {
    /// Creates an array validator.
    #[must_use]
    pub fn array(element: Validator) -> Self {
        Self::Array(Box::new(element))
    }

    /// Creates a record validator over `value`.
    #[must_use]
    pub fn record(value: Validator) -> Self {
        Self::Record(Box::new(value))
    }

    /// Creates a reference to a declaration's schema.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    /// Creates a fallback validator for an expression outside the grammar.
    #[must_use]
    pub fn unresolved(expression: impl Into<String>) -> Self {
        Self::Unresolved(expression.into())
    }

    /// Wraps this validator as optional. Already-optional validators are
    /// returned unchanged.
    #[must_use]
    pub fn optional(self) -> Self {
        if self.is_optional() {
            self
        } else {
            Self::Optional(Box::new(self))
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn described(self, description: impl Into<String>) -> Self {
        Self::Described {
            inner: Box::new(self),
            description: description.into(),
        }
    }

    /// Returns true if this validator accepts an absent value at the top level.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        match self {
            Self::Optional(_) => true,
            Self::Described { inner, .. } => inner.is_optional(),
            _ => false,
        }
    }

    /// Returns every declaration name this validator refers to, including
    /// extended shapes, in first-seen order without duplicates.
    #[must_use]
    pub fn references(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.walk(&mut |v| {
            let found: &[String] = match v {
                Self::Reference(name) => std::slice::from_ref(name),
                Self::Object(object) => &object.extends,
                _ => &[],
            };
            for name in found {
                if !names.contains(&name.as_str()) {
                    names.push(name.as_str());
                }
            }
        });
        names
    }

    /// Returns the expressions of every fallback validator in this tree.
    #[must_use]
    pub fn unresolved_expressions(&self) -> Vec<&str> {
        let mut found = Vec::new();
        self.walk(&mut |v| {
            if let Self::Unresolved(expression) = v {
                found.push(expression.as_str());
            }
        });
        found
    }

    /// Visits this validator and all of its children, parents first.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Validator)) {
        f(self);
        match self {
            Self::Array(inner)
            | Self::Record(inner)
            | Self::Optional(inner)
            | Self::Described { inner, .. } => inner.walk(f),
            Self::Union(branches) => {
                for branch in branches {
                    branch.walk(f);
                }
            }
            Self::Object(object) => {
                for field in &object.fields {
                    field.validator.walk(f);
                }
            }
            Self::Primitive(_)
            | Self::Literal(_)
            | Self::Enum(_)
            | Self::Reference(_)
            | Self::Unresolved(_) => {}
        }
    }

    /// Writes the Zod code for this validator, indenting nested object
    /// bodies relative to `indent` levels.
    fn render(&self, out: &mut impl Write, indent: usize) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(out, "z.{}()", p.builder()),
            Self::Literal(lit) => write!(out, "z.literal({q}{}{q})", lit.value, q = lit.quote),
            Self::Array(inner) => {
                out.write_str("z.array(")?;
                inner.render(out, indent)?;
                out.write_char(')')
            }
            Self::Record(value) => {
                out.write_str("z.record(")?;
                value.render(out, indent)?;
                out.write_char(')')
            }
            Self::Union(branches) => {
                out.write_str("z.union([")?;
                for (i, branch) in branches.iter().enumerate() {
                    if i > 0 {
                        out.write_str(", ")?;
                    }
                    branch.render(out, indent)?;
                }
                out.write_str("])")
            }
            Self::Enum(values) => match values.as_slice() {
                [] => out.write_str("z.never()"),
                [only] => write!(out, "z.literal(\"{}\")", escape_quoted(only)),
                _ => {
                    out.write_str("z.enum([")?;
                    for (i, value) in values.iter().enumerate() {
                        if i > 0 {
                            out.write_str(", ")?;
                        }
                        write!(out, "\"{}\"", escape_quoted(value))?;
                    }
                    out.write_str("])")
                }
            },
            Self::Object(object) => object.render(out, indent),
            Self::Reference(name) => out.write_str(&schema_name(name)),
            Self::Unresolved(expression) => write!(
                out,
                "z.any() /* unresolved type: {} */",
                expression.replace("*/", "*\\/")
            ),
            Self::Optional(inner) => {
                inner.render(out, indent)?;
                out.write_str(".optional()")
            }
            Self::Described { inner, description } => {
                inner.render(out, indent)?;
                write!(out, ".describe(\"{}\")", escape_description(description))
            }
        }
    }
}

impl ObjectSchema {
    fn render(&self, out: &mut impl Write, indent: usize) -> fmt::Result {
        let mut bases = self.extends.iter();
        match bases.next() {
            Some(first) => {
                out.write_str(&schema_name(first))?;
                for base in bases {
                    write!(out, ".extend({}.shape)", schema_name(base))?;
                }
                out.write_str(".extend(")?;
            }
            None => out.write_str("z.object(")?,
        }

        if self.fields.is_empty() {
            return out.write_str("{})");
        }
        out.write_str("{\n")?;
        let pad = "  ".repeat(indent + 1);
        for field in &self.fields {
            write!(out, "{pad}{}: ", property_key(&field.name))?;
            field.validator.render(out, indent + 1)?;
            out.write_str(",\n")?;
        }
        write!(out, "{}}})", "  ".repeat(indent))
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

/// Returns `name` as an object key, quoting it unless it is a plain identifier.
///
/// Names taken from quoted members keep their source escapes and are
/// re-quoted as they are.
fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        name.to_string()
    } else {
        format!("\"{}\"", escape_quoted(name))
    }
}

/// Escapes free text for a double-quoted string; newlines become spaces.
fn escape_description(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' | '\r' => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

/// Re-quotes raw string-literal contents with double quotes. Existing escape
/// pairs are copied as-is; bare `"` characters are escaped.
fn escape_quoted(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push('\\');
                out.push(chars.next().unwrap_or('\\'));
            }
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }
    out
}
