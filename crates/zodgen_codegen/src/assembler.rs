//! Program assembly: extraction, conversion, ordering and rendering.
//!
//! The flow is: Source → `extract` → Registry → declaration converters →
//! ordered `SchemaItem`s → rendered file.

use zodgen_foundation::{Error, ErrorContext, Result};
use zodgen_syntax::{DeclarationKind, Diagnostic, Named, Registry, Span, extract};

use crate::config::{CodegenConfig, EmitOrder, UnresolvedPolicy};
use crate::convert::Converter;
use crate::declaration::{alias_schema, enum_schema, shape_schema};
use crate::order::{forward_references, topological_order};
use crate::validator::{Validator, schema_name};

/// One emitted schema and its companion type binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaItem {
    /// Declaration name.
    pub name: String,
    /// Which kind of declaration produced this item.
    pub kind: DeclarationKind,
    /// The converted validator.
    pub validator: Validator,
    /// Location of the declaration.
    pub span: Span,
}

impl SchemaItem {
    /// Creates an item without a source location.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: DeclarationKind, validator: Validator) -> Self {
        Self {
            name: name.into(),
            kind,
            validator,
            span: Span::default(),
        }
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Returns the schema identifier, `<Name>Schema`.
    #[must_use]
    pub fn schema_name(&self) -> String {
        schema_name(&self.name)
    }

    /// Renders the schema constant and the inferred type binding.
    #[must_use]
    pub fn render(&self, config: &CodegenConfig) -> String {
        let export = if config.export { "export " } else { "" };
        let schema = self.schema_name();
        format!(
            "{export}const {schema} = {};\n\n{export}type {} = z.infer<typeof {schema}>;",
            self.validator, self.name
        )
    }
}

/// A converted file: ordered schema items plus the warnings raised while
/// producing them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    items: Vec<SchemaItem>,
    diagnostics: Vec<Diagnostic>,
}

impl Program {
    /// Returns the items in emission order.
    #[must_use]
    pub fn items(&self) -> &[SchemaItem] {
        &self.items
    }

    /// Returns every warning, extraction warnings first.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Looks up an item by declaration name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no declarations were converted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders the complete generated file.
    #[must_use]
    pub fn render(&self, config: &CodegenConfig) -> String {
        let mut lines = vec![config.import_line.clone(), String::new()];
        if let Some(banner) = &config.banner {
            lines.push(banner.clone());
            lines.push(String::new());
        }
        for item in &self.items {
            lines.push(item.render(config));
            lines.push(String::new());
        }
        lines.join("\n")
    }
}

/// Compiles declaration sources under one configuration.
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    config: CodegenConfig,
}

impl Compiler {
    /// Creates a compiler with the given configuration.
    #[must_use]
    pub fn new(config: CodegenConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Converts every declaration in fixed order, ignoring the configured
    /// order and policy. Forward references are reported as diagnostics.
    #[must_use]
    pub fn assemble(&self, registry: &Registry) -> Program {
        let (items, mut diagnostics) = lower(registry);
        diagnostics.extend(forward_references(&items));
        Program { items, diagnostics }
    }

    /// Converts a registry under the configured order and policy.
    ///
    /// # Errors
    /// Returns a cyclic-reference error under topological ordering, or an
    /// unresolved-type error under the strict policy.
    pub fn compile_registry(&self, registry: &Registry) -> Result<Program> {
        let program = match self.config.order {
            EmitOrder::Fixed => self.assemble(registry),
            EmitOrder::Topological => {
                let (items, diagnostics) = lower(registry);
                Program {
                    items: topological_order(items)?,
                    diagnostics,
                }
            }
        };

        if self.config.unresolved == UnresolvedPolicy::Strict {
            check_resolved(&program)?;
        }
        tracing::debug!(
            items = program.len(),
            diagnostics = program.diagnostics.len(),
            "compiled program"
        );
        Ok(program)
    }

    /// Extracts and converts every declaration in `source`.
    ///
    /// # Errors
    /// See [`Compiler::compile_registry`].
    pub fn compile(&self, source: &str) -> Result<Program> {
        self.compile_registry(&extract(source))
    }

    /// Converts `source` into the text of a generated file.
    ///
    /// # Errors
    /// See [`Compiler::compile_registry`].
    pub fn convert_file(&self, source: &str) -> Result<String> {
        Ok(self.compile(source)?.render(&self.config))
    }
}

/// Converts `source` into a generated file with the default configuration.
///
/// Never fails: unsupported declarations are skipped and unsupported types
/// fall back to `z.any()`.
///
/// # Example
///
/// ```
/// let code = zodgen_codegen::convert_file("type Id = string;");
/// assert!(code.contains("export const IdSchema = z.string();"));
/// assert!(code.contains("export type Id = z.infer<typeof IdSchema>;"));
/// ```
#[must_use]
pub fn convert_file(source: &str) -> String {
    let compiler = Compiler::default();
    compiler
        .assemble(&extract(source))
        .render(compiler.config())
}

/// Converts every declaration the registry resolves by name, in fixed order.
fn lower(registry: &Registry) -> (Vec<SchemaItem>, Vec<Diagnostic>) {
    let converter = Converter::new(registry);
    let mut diagnostics = registry.diagnostics().to_vec();
    let mut items = Vec::with_capacity(registry.len());

    for declaration in registry.enums() {
        if resolves_to(registry, declaration, DeclarationKind::Enum) {
            items.push(
                SchemaItem::new(&declaration.name, DeclarationKind::Enum, enum_schema(declaration))
                    .with_span(declaration.span),
            );
        }
    }
    for alias in registry.aliases() {
        if resolves_to(registry, alias, DeclarationKind::Alias) {
            items.push(
                SchemaItem::new(
                    &alias.name,
                    DeclarationKind::Alias,
                    alias_schema(&converter, alias),
                )
                .with_span(alias.span),
            );
        }
    }
    for shape in registry.shapes() {
        items.push(
            SchemaItem::new(
                &shape.name,
                DeclarationKind::Shape,
                shape_schema(&converter, shape, &mut diagnostics),
            )
            .with_span(shape.span),
        );
    }

    (items, diagnostics)
}

/// Returns true if references to this declaration's name resolve to it.
/// A name declared in two tables is emitted once, for the table that wins.
fn resolves_to(registry: &Registry, declaration: &impl Named, kind: DeclarationKind) -> bool {
    let resolved = registry.kind_of(declaration.name()) == Some(kind);
    if !resolved {
        tracing::debug!(
            name = declaration.name(),
            %kind,
            "shadowed by a declaration of the same name; not emitted"
        );
    }
    resolved
}

/// Fails on the first fallback validator in emission order.
fn check_resolved(program: &Program) -> Result<()> {
    for item in program.items() {
        if let Some(expression) = item.validator.unresolved_expressions().first() {
            return Err(Error::unresolved_type(&item.name, *expression).with_context(
                ErrorContext::new()
                    .with_declaration(&item.name)
                    .with_position(item.span.line, item.span.column),
            ));
        }
    }
    Ok(())
}
