//! Type-expression converter.
//!
//! Translates one type expression into a [`Validator`]. Conversion is total:
//! anything outside the supported grammar becomes [`Validator::Unresolved`]
//! instead of an error.
//!
//! Rules, in precedence order:
//!
//! 1. `T?` and `| undefined` / `| null` branches mark the result optional;
//!    the optional wrapper is applied exactly once.
//! 2. Primitive keywords map to their fixed builders.
//! 3. `T[]` and `Array<T>` become `z.array(T)`.
//! 4. `Record<K, V>` becomes `z.record(V)`; malformed arguments give
//!    `z.record(z.any())`.
//! 5. Unions convert branch by branch; a single remaining branch is not wrapped.
//! 6. Quoted literals become `z.literal(...)`.
//! 7. Names found in the registry become references to their schema.
//! 8. Everything else falls back to `z.any()` with a marker.

use zodgen_foundation::Primitive;
use zodgen_syntax::{Registry, TypeExpr, normalize_source, parse_type};

use crate::validator::Validator;

/// Converts type expressions against one registry of known declarations.
#[derive(Clone, Copy, Debug)]
pub struct Converter<'r> {
    registry: &'r Registry,
}

impl<'r> Converter<'r> {
    /// Creates a converter resolving names against `registry`.
    #[must_use]
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Returns the registry names are resolved against.
    #[must_use]
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Converts raw type-expression text. `optional` forces the optional
    /// wrapper even when the text carries no optionality marker.
    #[must_use]
    pub fn convert(&self, text: &str, optional: bool) -> Validator {
        match parse_type(text) {
            Ok(expr) => self.convert_expr(&expr, optional),
            Err(err) => {
                let text = normalize_source(text);
                tracing::debug!(expression = %text, error = %err, "falling back to z.any()");
                finish(Validator::unresolved(text), optional)
            }
        }
    }

    /// Converts a parsed type expression.
    #[must_use]
    pub fn convert_expr(&self, expr: &TypeExpr, optional: bool) -> Validator {
        let (core, stripped) = strip_optional(expr);
        let validator = match core {
            Core::Whole(expr) => self.lower(expr),
            Core::Branches(branches) => Validator::Union(
                branches
                    .into_iter()
                    .map(|branch| self.convert_expr(branch, false))
                    .collect(),
            ),
        };
        finish(validator, optional || stripped)
    }

    /// Converts an expression whose top-level optionality is already handled.
    fn lower(&self, expr: &TypeExpr) -> Validator {
        match expr {
            TypeExpr::Primitive(p) => Validator::Primitive(*p),
            TypeExpr::Literal(lit) => Validator::Literal(lit.clone()),
            TypeExpr::Reference(name) if self.registry.contains(name) => {
                Validator::reference(name.as_str())
            }
            TypeExpr::Array(element) => Validator::array(self.convert_expr(element, false)),
            TypeExpr::Map(Some(args)) => Validator::record(self.convert_expr(&args.value, false)),
            TypeExpr::Map(None) => Validator::record(Validator::Primitive(Primitive::Any)),
            TypeExpr::Union(branches) => Validator::Union(
                branches
                    .iter()
                    .map(|branch| self.convert_expr(branch, false))
                    .collect(),
            ),
            TypeExpr::Optional(inner) => self.convert_expr(inner, true),
            TypeExpr::Reference(_) | TypeExpr::Generic { .. } => {
                let text = expr.to_string();
                tracing::debug!(expression = %text, "unresolved type, falling back to z.any()");
                Validator::unresolved(text)
            }
        }
    }
}

/// What remains of an expression after optionality markers are removed.
enum Core<'a> {
    /// A single expression.
    Whole(&'a TypeExpr),
    /// Two or more union branches left after stripping sentinels.
    Branches(Vec<&'a TypeExpr>),
}

/// Removes a trailing `?` and absent-sentinel union branches, reporting
/// whether anything was removed. A union made only of sentinels is kept.
fn strip_optional(expr: &TypeExpr) -> (Core<'_>, bool) {
    match expr {
        TypeExpr::Optional(inner) => (strip_optional(inner).0, true),
        TypeExpr::Union(branches) => {
            let kept: Vec<&TypeExpr> = branches
                .iter()
                .filter(|branch| !branch.is_absent_sentinel())
                .collect();
            let stripped = kept.len() < branches.len();
            match kept.len() {
                0 => (Core::Whole(expr), false),
                1 => (Core::Whole(kept[0]), stripped),
                _ if stripped => (Core::Branches(kept), true),
                _ => (Core::Whole(expr), false),
            }
        }
        _ => (Core::Whole(expr), false),
    }
}

fn finish(validator: Validator, optional: bool) -> Validator {
    if optional {
        validator.optional()
    } else {
        validator
    }
}
