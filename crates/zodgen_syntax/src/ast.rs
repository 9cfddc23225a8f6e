//! Type-expression syntax tree.
//!
//! A `TypeExpr` is the parsed form of one TypeScript type expression such as
//! `Array<User | 'guest'>` or `Record<string, number>?`.

use zodgen_foundation::Primitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parsed type expression.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeExpr {
    /// Primitive keyword like `string` or `Date`
    Primitive(Primitive),
    /// Quoted string literal like `'admin'`
    Literal(StringLiteral),
    /// Name of another declaration like `User` or `Api.User`
    Reference(String),
    /// `T[]` or `Array<T>`
    Array(Box<TypeExpr>),
    /// `Record<K, V>`; `None` when the argument list is malformed
    Map(Option<MapArgs>),
    /// Any other generic application like `Promise<T>`
    Generic {
        /// The generic's name.
        name: String,
        /// Its type arguments.
        args: Vec<TypeExpr>,
    },
    /// `A | B | C` with at least two branches
    Union(Vec<TypeExpr>),
    /// Trailing `T?`
    Optional(Box<TypeExpr>),
}

/// A quoted string literal type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StringLiteral {
    /// Raw contents between the quotes, escapes untouched.
    pub value: String,
    /// The quote character used in the source.
    pub quote: char,
}

impl StringLiteral {
    /// Creates a literal with the given quote character.
    #[must_use]
    pub fn new(value: impl Into<String>, quote: char) -> Self {
        Self {
            value: value.into(),
            quote,
        }
    }

    /// Creates a double-quoted literal.
    #[must_use]
    pub fn double(value: impl Into<String>) -> Self {
        Self::new(value, '"')
    }
}

/// The two arguments of `Record<K, V>`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapArgs {
    /// Key type source text. Carried for display only; it is never validated.
    pub key: String,
    /// Value type.
    pub value: Box<TypeExpr>,
}

impl TypeExpr {
    /// Creates an array type.
    #[must_use]
    pub fn array(element: TypeExpr) -> Self {
        Self::Array(Box::new(element))
    }

    /// Creates a well-formed map type.
    #[must_use]
    pub fn map(key: impl Into<String>, value: TypeExpr) -> Self {
        Self::Map(Some(MapArgs {
            key: key.into(),
            value: Box::new(value),
        }))
    }

    /// Creates an optional type.
    #[must_use]
    pub fn optional(inner: TypeExpr) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Creates a reference to a named declaration.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    /// Creates a quoted literal type.
    #[must_use]
    pub fn literal(value: impl Into<String>, quote: char) -> Self {
        Self::Literal(StringLiteral::new(value, quote))
    }

    /// Returns true if this is an absent sentinel (`undefined` or `null`).
    #[must_use]
    pub const fn is_absent_sentinel(&self) -> bool {
        matches!(self, Self::Primitive(p) if p.is_absent_sentinel())
    }

    /// Returns true if this is a union.
    #[must_use]
    pub const fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }

    /// Calls `f` with every name referenced anywhere in this expression.
    pub fn for_each_reference<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            Self::Reference(name) => f(name),
            Self::Array(inner) | Self::Optional(inner) => inner.for_each_reference(f),
            Self::Map(Some(args)) => args.value.for_each_reference(f),
            Self::Generic { args: items, .. } | Self::Union(items) => {
                for item in items {
                    item.for_each_reference(f);
                }
            }
            Self::Primitive(_) | Self::Literal(_) | Self::Map(None) => {}
        }
    }

    /// Returns every referenced name, in first-seen order without duplicates.
    #[must_use]
    pub fn references(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.for_each_reference(&mut |name| {
            if !names.contains(&name) {
                names.push(name);
            }
        });
        names
    }
}
