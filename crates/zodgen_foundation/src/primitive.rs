//! The fixed table of primitive type keywords.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A primitive type keyword with a dedicated validator builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primitive {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `bigint`
    BigInt,
    /// `Date`
    Date,
    /// `any`
    Any,
    /// `unknown`
    Unknown,
    /// `never`
    Never,
    /// `null`
    Null,
    /// `undefined`
    Undefined,
    /// `void`
    Void,
}

impl Primitive {
    /// Every primitive, in table order.
    pub const ALL: [Self; 11] = [
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::BigInt,
        Self::Date,
        Self::Any,
        Self::Unknown,
        Self::Never,
        Self::Null,
        Self::Undefined,
        Self::Void,
    ];

    /// Looks up a primitive by its exact source keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }

    /// Returns the source keyword for this primitive.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::BigInt => "bigint",
            Self::Date => "Date",
            Self::Any => "any",
            Self::Unknown => "unknown",
            Self::Never => "never",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Void => "void",
        }
    }

    /// Returns the name of the `z.<name>()` builder for this primitive.
    #[must_use]
    pub const fn builder(self) -> &'static str {
        match self {
            Self::Date => "date",
            other => other.keyword(),
        }
    }

    /// Returns true if a union branch of this type marks the value as absent.
    ///
    /// Such branches are stripped from unions and turn into an optional wrapper.
    #[must_use]
    pub const fn is_absent_sentinel(self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
