//! Integration tests for Layer 2: Codegen
//!
//! Tests type conversion, declaration assembly, ordering, and validator
//! evaluation.

mod acceptance;
mod conversion;
mod ordering;
mod totality;
