//! Insertion-ordered declaration registries.
//!
//! A [`Registry`] is built once by the extractor through a
//! [`RegistryBuilder`] and is read-only afterwards.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::types::{
    DeclarationKind, Diagnostic, EnumDeclaration, Named, ShapeDeclaration, TypeAliasDeclaration,
};
use crate::span::Span;

/// Declarations of one kind, unique by name, in first-declared order.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Table<T> {
    entries: Vec<T>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<String, usize>,
}

impl<T: Named> Table<T> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts `item`. A same-named entry is replaced in place and returned.
    pub fn insert(&mut self, item: T) -> Option<T> {
        if let Some(&slot) = self.index.get(item.name()) {
            return Some(std::mem::replace(&mut self.entries[slot], item));
        }
        self.index.insert(item.name().to_string(), self.entries.len());
        self.entries.push(item);
        None
    }

    /// Looks up an entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    /// Returns true if an entry with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Iterates entry names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Named::name)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Named> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The three declaration tables for one conversion, plus extraction diagnostics.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Registry {
    shapes: Table<ShapeDeclaration>,
    aliases: Table<TypeAliasDeclaration>,
    enums: Table<EnumDeclaration>,
    diagnostics: Vec<Diagnostic>,
}

impl Registry {
    /// Returns the interface declarations.
    #[must_use]
    pub fn shapes(&self) -> &Table<ShapeDeclaration> {
        &self.shapes
    }

    /// Returns the type alias declarations.
    #[must_use]
    pub fn aliases(&self) -> &Table<TypeAliasDeclaration> {
        &self.aliases
    }

    /// Returns the enum declarations.
    #[must_use]
    pub fn enums(&self) -> &Table<EnumDeclaration> {
        &self.enums
    }

    /// Returns the warnings recorded while extracting.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns which table holds `name`, checking shapes, then aliases, then enums.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<DeclarationKind> {
        if self.shapes.contains(name) {
            Some(DeclarationKind::Shape)
        } else if self.aliases.contains(name) {
            Some(DeclarationKind::Alias)
        } else if self.enums.contains(name) {
            Some(DeclarationKind::Enum)
        } else {
            None
        }
    }

    /// Returns true if any table holds `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.kind_of(name).is_some()
    }

    /// Returns the total number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len() + self.aliases.len() + self.enums.len()
    }

    /// Returns true if no declarations were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mutable accumulator for a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an interface declaration.
    pub fn add_shape(&mut self, shape: ShapeDeclaration) {
        let (name, span) = (shape.name.clone(), shape.span);
        self.check_collision(&name, DeclarationKind::Shape, span);
        if self.registry.shapes.insert(shape).is_some() {
            self.duplicate(&name, DeclarationKind::Shape, span);
        }
    }

    /// Adds a type alias declaration.
    pub fn add_alias(&mut self, alias: TypeAliasDeclaration) {
        let (name, span) = (alias.name.clone(), alias.span);
        self.check_collision(&name, DeclarationKind::Alias, span);
        if self.registry.aliases.insert(alias).is_some() {
            self.duplicate(&name, DeclarationKind::Alias, span);
        }
    }

    /// Adds an enum declaration.
    pub fn add_enum(&mut self, declaration: EnumDeclaration) {
        let (name, span) = (declaration.name.clone(), declaration.span);
        self.check_collision(&name, DeclarationKind::Enum, span);
        if self.registry.enums.insert(declaration).is_some() {
            self.duplicate(&name, DeclarationKind::Enum, span);
        }
    }

    /// Records and logs a warning.
    pub fn warn(&mut self, span: Span, message: impl Into<String>) {
        self.registry
            .diagnostics
            .push(Diagnostic::warn(span, message));
    }

    /// Finishes building.
    #[must_use]
    pub fn build(self) -> Registry {
        self.registry
    }

    fn duplicate(&mut self, name: &str, kind: DeclarationKind, span: Span) {
        self.warn(
            span,
            format!("duplicate {kind} `{name}`; the later declaration replaces the earlier one"),
        );
    }

    fn check_collision(&mut self, name: &str, kind: DeclarationKind, span: Span) {
        if let Some(existing) = self.registry.kind_of(name).filter(|k| *k != kind) {
            self.warn(
                span,
                format!("`{name}` is declared as both {existing} and {kind}"),
            );
        }
    }
}
