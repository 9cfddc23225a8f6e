//! Command-line tests through the root crate
//!
//! Tests argument parsing and a full file-to-file run.

use std::fs;

use clap::Parser;
use zodgen::cli::{Cli, OrderArg, run};

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("zodgen").chain(args.iter().copied()))
}

#[test]
fn requires_exactly_one_input() {
    assert!(parse(&[]).is_err());
    assert!(parse(&["-i", "a.ts", "--input-string", "type A = string"]).is_err());
}

#[test]
fn parses_order_values() {
    let cli = parse(&["--input-string", "x", "--order", "fixed"]).unwrap();
    assert_eq!(cli.order, Some(OrderArg::Fixed));
    assert!(parse(&["--input-string", "x", "--order", "random"]).is_err());
}

#[test]
fn file_to_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("models.ts");
    let output = dir.path().join("out").join("schemas.ts");
    fs::write(
        &input,
        "export interface Point {\n  x: number;\n  y: number;\n  label?: string;\n}\n",
    )?;

    let cli = parse(&[
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])?;
    let mut status = Vec::new();
    run(&cli, &mut status)?;

    let status = String::from_utf8(status)?;
    assert_eq!(
        status.trim_end(),
        format!("Generated Zod schemas written to: {}", output.display())
    );
    assert_eq!(
        fs::read_to_string(&output)?,
        zodgen::convert_file(&fs::read_to_string(&input)?)
    );
    Ok(())
}
