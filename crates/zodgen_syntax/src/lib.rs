//! Lexer, type-expression parser, and declaration extractor for zodgen.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of TypeScript declaration sources
//! - [`Parser`] - Parsing one type expression into a [`TypeExpr`]
//! - [`extract`] - Finding `interface`, `type` and `enum` declarations
//! - [`Registry`] - The extracted declarations, indexed by name
//!
//! # Example
//!
//! ```
//! use zodgen_syntax::{TypeExpr, extract, parse_type};
//!
//! let registry = extract("type Tags = string[];");
//! let alias = registry.aliases().get("Tags").unwrap();
//! let expr = parse_type(&alias.type_text).unwrap();
//! assert!(matches!(expr, TypeExpr::Array(_)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod declaration;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod span;
pub mod token;


pub use ast::{MapArgs, StringLiteral, TypeExpr};
pub use declaration::{
    DeclarationKind, Diagnostic, EnumDeclaration, Extractor, Field, Named, Registry,
    RegistryBuilder, ShapeDeclaration, Table, TypeAliasDeclaration, extract,
};
pub use lexer::Lexer;
pub use parser::{MAX_NESTING, Parser, parse_type};
pub use pretty::normalize_source;
pub use span::Span;
pub use token::{Token, TokenKind};
