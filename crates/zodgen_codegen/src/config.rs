//! Configuration for code generation.

use serde::{Deserialize, Serialize};

/// The import line every generated file starts with.
pub const DEFAULT_IMPORT_LINE: &str = "import { z } from 'zod';";

/// The comment emitted after the import line.
pub const DEFAULT_BANNER: &str = "// Auto-generated Zod schemas";

/// Order in which declarations are emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmitOrder {
    /// Enums, then aliases, then interfaces, each in source order.
    /// References to later declarations are reported as warnings.
    #[default]
    Fixed,
    /// Every declaration after the declarations it references, ties broken
    /// by the fixed order. Cycles are an error.
    Topological,
}

/// What to do with type expressions outside the supported grammar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedPolicy {
    /// Emit `z.any()` with a marker comment.
    #[default]
    Lenient,
    /// Fail with an unresolved-type error.
    Strict,
}

/// Configuration for code generation.
///
/// Controls the file header, export keywords, emission order and the
/// treatment of unresolved types.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// First line of the generated file.
    pub import_line: String,

    /// Comment line after the import, if any.
    pub banner: Option<String>,

    /// Whether schemas and types are emitted with `export`.
    pub export: bool,

    /// Emission order.
    pub order: EmitOrder,

    /// Policy for unresolved type expressions.
    pub unresolved: UnresolvedPolicy,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            import_line: DEFAULT_IMPORT_LINE.to_string(),
            banner: Some(DEFAULT_BANNER.to_string()),
            export: true,
            order: EmitOrder::Fixed,
            unresolved: UnresolvedPolicy::Lenient,
        }
    }
}

impl CodegenConfig {
    /// Creates a configuration that orders by dependency and rejects
    /// unresolved types.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            order: EmitOrder::Topological,
            unresolved: UnresolvedPolicy::Strict,
            ..Self::default()
        }
    }

    /// Creates a configuration without the banner comment.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            banner: None,
            ..Self::default()
        }
    }

    /// Builder method to set the import line.
    #[must_use]
    pub fn with_import_line(mut self, line: impl Into<String>) -> Self {
        self.import_line = line.into();
        self
    }

    /// Builder method to set or clear the banner comment.
    #[must_use]
    pub fn with_banner(mut self, banner: Option<String>) -> Self {
        self.banner = banner;
        self
    }

    /// Builder method to enable/disable `export` keywords.
    #[must_use]
    pub fn with_export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }

    /// Builder method to set the emission order.
    #[must_use]
    pub fn with_order(mut self, order: EmitOrder) -> Self {
        self.order = order;
        self
    }

    /// Builder method to set the unresolved-type policy.
    #[must_use]
    pub fn with_unresolved(mut self, policy: UnresolvedPolicy) -> Self {
        self.unresolved = policy;
        self
    }
}
