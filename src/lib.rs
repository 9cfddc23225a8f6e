//! zodgen - TypeScript declarations to Zod schemas
//!
//! This crate re-exports all layers of the zodgen system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: zodgen_cli        - Command-line interface, file IO
//! Layer 2: zodgen_codegen    - Validator IR, converter, ordering, assembly
//! Layer 1: zodgen_syntax     - Lexer, type-expression parser, declaration extractor
//! Layer 0: zodgen_foundation - Core types (Error, Primitive)
//! ```

pub use zodgen_cli as cli;
pub use zodgen_codegen as codegen;
pub use zodgen_foundation as foundation;
pub use zodgen_syntax as syntax;

pub use zodgen_codegen::convert_file;
