//! Integration tests for Layer 1: Syntax
//!
//! Tests for the lexer, type-expression parser, and declaration extractor.

mod extractor;
mod lexer;
mod parser;
