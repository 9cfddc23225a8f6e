//! Integration tests for the command-line interface.
//!
//! These tests drive `run` with parsed arguments and inspect what it writes
//! to the output stream and the filesystem.

use std::fs;

use clap::Parser;
use zodgen_cli::{Cli, run};

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("zodgen").chain(args.iter().copied())).unwrap()
}

fn run_to_string(cli: &Cli) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run(cli, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

// =============================================================================
// Input
// =============================================================================

#[test]
fn input_string_to_stdout() {
    let out = run_to_string(&cli(&["--input-string", "type Id = string;"])).unwrap();
    assert!(out.starts_with("import { z } from 'zod';\n"));
    assert!(out.contains("export const IdSchema = z.string();"));
}

#[test]
fn input_file_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("types.ts");
    fs::write(&input, "export enum Color { RED, GREEN = \"green_value\" }\n").unwrap();

    let out = run_to_string(&cli(&["-i", input.to_str().unwrap()])).unwrap();
    assert!(out.contains(r#"export const ColorSchema = z.enum(["RED", "green_value"]);"#));
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.ts");

    let err = run_to_string(&cli(&["--input", input.to_str().unwrap()])).unwrap_err();
    assert!(err.to_string().contains("input file not found"));
}

// =============================================================================
// Output
// =============================================================================

#[test]
fn output_file_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("generated").join("nested").join("schemas.ts");

    let out = run_to_string(&cli(&[
        "--input-string",
        "interface User { id: string }",
        "-o",
        output.to_str().unwrap(),
    ]))
    .unwrap();

    assert!(out.starts_with("Generated Zod schemas written to: "));
    let code = fs::read_to_string(&output).unwrap();
    assert!(code.contains("export const UserSchema = z.object({\n  id: z.string(),\n});"));
}

#[test]
fn no_banner_flag() {
    let out = run_to_string(&cli(&["--input-string", "type A = number", "--no-banner"])).unwrap();
    assert!(!out.contains("Auto-generated"));
}

// =============================================================================
// Policies
// =============================================================================

#[test]
fn strict_flag_reports_declaration_and_source() {
    let err = run_to_string(&cli(&[
        "--input-string",
        "type Job = Promise<string>;",
        "--strict",
    ]))
    .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("unresolved type `Promise<string>` in Job"));
    assert!(message.contains("<input-string>"));
}

#[test]
fn topological_order_flag() {
    let out = run_to_string(&cli(&[
        "--input-string",
        "interface User { home: Address }\ninterface Address { city: string }",
        "--order",
        "topological",
    ]))
    .unwrap();
    let address = out.find("const AddressSchema").unwrap();
    let user = out.find("const UserSchema").unwrap();
    assert!(address < user);
}

#[test]
fn config_file_is_applied_and_flags_override() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("zodgen.json");
    fs::write(&config, r#"{ "export": false, "banner": "// generated" }"#).unwrap();

    let out = run_to_string(&cli(&[
        "--input-string",
        "type A = boolean",
        "--config",
        config.to_str().unwrap(),
    ]))
    .unwrap();
    assert!(out.contains("// generated\n"));
    assert!(out.contains("\nconst ASchema = z.boolean();"));

    let out = run_to_string(&cli(&[
        "--input-string",
        "type A = boolean",
        "--config",
        config.to_str().unwrap(),
        "--no-banner",
    ]))
    .unwrap();
    assert!(!out.contains("// generated"));
}

#[test]
fn invalid_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("zodgen.json");
    fs::write(&config, "{ not json").unwrap();

    let err = run_to_string(&cli(&[
        "--input-string",
        "type A = boolean",
        "--config",
        config.to_str().unwrap(),
    ]))
    .unwrap_err();
    assert!(err.to_string().contains("invalid config file"));
}

// =============================================================================
// Registry Dump
// =============================================================================

#[test]
fn dump_registry_prints_json() {
    let out = run_to_string(&cli(&[
        "--input-string",
        "interface User { /** Id */ id?: string }\nenum Role { A }",
        "--dump-registry",
    ]))
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["shapes"][0]["name"], "User");
    assert_eq!(json["shapes"][0]["fields"][0]["optional"], true);
    assert_eq!(json["shapes"][0]["fields"][0]["description"], "Id");
    assert_eq!(json["enums"][0]["values"][0], "A");
}
