//! Declarations extracted from TypeScript source.
//!
//! This module finds `interface`, `type` and `enum` declarations in a source
//! file and records them, still holding their raw type text, in a
//! [`Registry`]. Type text is parsed later, during conversion, once every
//! declared name is known.
//!
//! The flow is: Source → Lexer → `Extractor` → Registry → converter
//!
//! # Module Structure
//!
//! - `types` - Declaration type definitions
//! - `registry` - Name-indexed tables of declarations
//! - `extractor` - The token-level declaration scanner

mod extractor;
mod registry;
mod types;


pub use extractor::{Extractor, extract};
pub use registry::{Registry, RegistryBuilder, Table};
pub use types::{
    DeclarationKind, Diagnostic, EnumDeclaration, Field, Named, ShapeDeclaration,
    TypeAliasDeclaration,
};
