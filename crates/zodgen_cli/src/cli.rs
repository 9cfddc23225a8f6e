//! Command-line arguments.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, ArgGroup, Parser, ValueEnum};
use zodgen_codegen::{CodegenConfig, EmitOrder, UnresolvedPolicy};

/// Compile TypeScript interfaces, type aliases and enums into Zod schemas.
#[derive(Parser, Debug)]
#[command(name = "zodgen", version, about)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "input_string"])))]
pub struct Cli {
    /// TypeScript file to read declarations from.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// TypeScript source given inline.
    #[arg(long, value_name = "TEXT")]
    pub input_string: Option<String>,

    /// Write the generated code here instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Declaration emission order.
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Fail on types that would fall back to `z.any()`.
    #[arg(long)]
    pub strict: bool,

    /// Omit the banner comment.
    #[arg(long)]
    pub no_banner: bool,

    /// JSON file with code generation settings. Flags override it.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the extracted declarations as JSON instead of generating code.
    #[arg(long)]
    pub dump_registry: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Emission order as given on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Enums, then aliases, then interfaces.
    Fixed,
    /// Dependencies before dependents.
    Topological,
}

impl From<OrderArg> for EmitOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Fixed => Self::Fixed,
            OrderArg::Topological => Self::Topological,
        }
    }
}

impl Cli {
    /// Builds the code generation settings: the `--config` file if given,
    /// otherwise defaults, with flags applied on top.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    pub fn codegen_config(&self) -> anyhow::Result<CodegenConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("invalid config file {}", path.display()))?
            }
            None => CodegenConfig::default(),
        };

        if let Some(order) = self.order {
            config = config.with_order(order.into());
        }
        if self.strict {
            config = config.with_unresolved(UnresolvedPolicy::Strict);
        }
        if self.no_banner {
            config = config.with_banner(None);
        }
        Ok(config)
    }

    /// Returns the default log filter for the requested verbosity.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
