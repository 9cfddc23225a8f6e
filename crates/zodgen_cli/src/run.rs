//! Command execution.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, bail};
use zodgen_codegen::Compiler;
use zodgen_syntax::extract;

use crate::cli::Cli;

/// Runs one invocation, writing generated code, registry dumps and status
/// messages to `out`.
///
/// # Errors
/// Returns an error if the input cannot be read, the output cannot be
/// written, or compilation fails under the configured order or policy.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let (source, source_name) = read_source(cli)?;

    if cli.dump_registry {
        let registry = extract(&source);
        serde_json::to_writer_pretty(&mut *out, &registry)
            .context("failed to serialize registry")?;
        writeln!(out)?;
        return Ok(());
    }

    let compiler = Compiler::new(cli.codegen_config()?);
    let program = match compiler.compile(&source) {
        Ok(program) => program,
        Err(err) => {
            let err = err.in_source(&source_name);
            let location = err.context.as_ref().map(ToString::to_string);
            let err = anyhow::Error::new(err);
            return Err(match location {
                Some(location) => err.context(location),
                None => err,
            });
        }
    };
    tracing::info!(
        source = %source_name,
        schemas = program.len(),
        warnings = program.diagnostics().len(),
        "converted declarations"
    );

    let code = program.render(compiler.config());
    match &cli.output {
        Some(path) => {
            write_output(path, &code)?;
            writeln!(out, "Generated Zod schemas written to: {}", path.display())?;
        }
        None => out.write_all(code.as_bytes())?,
    }
    Ok(())
}

/// Returns the source text and a name for it in messages.
fn read_source(cli: &Cli) -> anyhow::Result<(String, String)> {
    if let Some(text) = &cli.input_string {
        return Ok((text.clone(), "<input-string>".to_string()));
    }
    let Some(path) = &cli.input else {
        bail!("no input given; pass --input or --input-string");
    };
    if !path.exists() {
        bail!("input file not found: {}", path.display());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok((text, path.display().to_string()))
}

fn write_output(path: &Path, code: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, code).with_context(|| format!("failed to write {}", path.display()))
}
