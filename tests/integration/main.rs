//! Integration tests across all layers
//!
//! Tests whole declaration files through the public entry points and the
//! command-line interface.

mod cli;
mod end_to_end;
