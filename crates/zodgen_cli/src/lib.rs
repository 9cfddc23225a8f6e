//! Command-line interface for zodgen.
//!
//! This crate provides:
//! - [`Cli`] - Argument definitions and their mapping onto [`zodgen_codegen::CodegenConfig`]
//! - [`run`] - Reading input, compiling, and writing output

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod run;

pub use cli::{Cli, OrderArg};
pub use run::run;
