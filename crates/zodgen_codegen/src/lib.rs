//! Type-expression to Zod validator conversion and program assembly.
//!
//! This crate provides:
//! - [`Validator`] - The validator IR and its Zod rendering
//! - [`Converter`] - Recursive conversion of type expressions
//! - [`Compiler`] - Extraction, conversion, ordering and rendering of whole files
//! - [`CodegenConfig`] - Output and policy configuration
//! - [`SchemaLookup`] - Evaluation of validators against JSON values
//!
//! # Example
//!
//! ```
//! let code = zodgen_codegen::convert_file(
//!     r#"enum Color { RED, GREEN = "green_value" }"#,
//! );
//! assert!(code.contains(r#"export const ColorSchema = z.enum(["RED", "green_value"]);"#));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assembler;
pub mod check;
pub mod config;
pub mod convert;
pub mod declaration;
pub mod order;
pub mod validator;

pub use assembler::{Compiler, Program, SchemaItem, convert_file};
pub use check::SchemaLookup;
pub use config::{CodegenConfig, EmitOrder, UnresolvedPolicy};
pub use convert::Converter;
pub use declaration::{alias_schema, enum_schema, shape_schema};
pub use order::{forward_references, topological_order};
pub use validator::{ObjectField, ObjectSchema, Validator, schema_name};
