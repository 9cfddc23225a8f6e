//! Canonical printing of type expressions.
//!
//! The printed form is whitespace-normalized TypeScript and parses back to
//! the same tree. It is what fallback markers and diagnostics show.
//!
//! # Example
//!
//! ```
//! use zodgen_syntax::parse_type;
//!
//! let expr = parse_type("Array < A|B >").unwrap();
//! assert_eq!(expr.to_string(), "(A | B)[]");
//! ```

use std::fmt;

use crate::ast::TypeExpr;

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Literal(lit) => write!(f, "{q}{}{q}", lit.value, q = lit.quote),
            Self::Reference(name) => f.write_str(name),
            Self::Array(inner) => {
                if matches!(**inner, Self::Union(_) | Self::Optional(_)) {
                    write!(f, "({inner})[]")
                } else {
                    write!(f, "{inner}[]")
                }
            }
            Self::Map(Some(args)) => write!(f, "Record<{}, {}>", args.key, args.value),
            Self::Map(None) => f.write_str("Record<...>"),
            Self::Generic { name, args } => {
                write!(f, "{name}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            Self::Union(branches) => {
                for (i, branch) in branches.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    if matches!(branch, Self::Union(_) | Self::Optional(_)) {
                        write!(f, "({branch})")?;
                    } else {
                        write!(f, "{branch}")?;
                    }
                }
                Ok(())
            }
            Self::Optional(inner) => write!(f, "{inner}?"),
        }
    }
}

/// Collapses every run of whitespace to a single space and trims the ends.
#[must_use]
pub fn normalize_source(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
