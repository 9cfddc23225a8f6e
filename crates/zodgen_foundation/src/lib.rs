//! Core error types and the primitive type table for zodgen.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`Primitive`] - The fixed table of primitive type keywords and their validators

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod primitive;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use primitive::Primitive;
