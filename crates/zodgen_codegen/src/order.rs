//! Emission ordering over reference edges.

use std::collections::HashMap;

use zodgen_foundation::{Error, Result};
use zodgen_syntax::Diagnostic;

use crate::assembler::SchemaItem;

/// Maps each item name to its position.
fn positions(items: &[SchemaItem]) -> HashMap<&str, usize> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (item.name.as_str(), i))
        .collect()
}

/// Returns, for each item, the positions of the items it references.
fn dependencies(items: &[SchemaItem]) -> Vec<Vec<usize>> {
    let position = positions(items);
    items
        .iter()
        .map(|item| {
            item.validator
                .references()
                .into_iter()
                .filter_map(|name| position.get(name).copied())
                .collect()
        })
        .collect()
}

/// Reports every reference to an item at the same or a later position.
///
/// In the emitted file such a reference is used before its `const` is
/// initialized.
#[must_use]
pub fn forward_references(items: &[SchemaItem]) -> Vec<Diagnostic> {
    let position = positions(items);
    let mut diagnostics = Vec::new();
    for (i, item) in items.iter().enumerate() {
        for name in item.validator.references() {
            let message = match position.get(name) {
                Some(&j) if j == i => format!("`{name}` references itself"),
                Some(&j) if j > i => format!(
                    "`{}` references `{name}` before it is defined",
                    item.name
                ),
                _ => continue,
            };
            diagnostics.push(Diagnostic::warn(item.span, message));
        }
    }
    diagnostics
}

/// Reorders items so every item follows the items it references.
///
/// Among items that are ready at the same time, the earlier one in the
/// input goes first, so an input with no forward references is unchanged.
///
/// # Errors
/// Returns a cyclic-reference error naming one cycle if the references
/// cannot be ordered.
pub fn topological_order(items: Vec<SchemaItem>) -> Result<Vec<SchemaItem>> {
    let deps = dependencies(&items);
    let mut emitted = vec![false; items.len()];
    let mut order = Vec::with_capacity(items.len());

    while order.len() < items.len() {
        let ready = (0..items.len()).find(|&i| !emitted[i] && deps[i].iter().all(|&d| emitted[d]));
        let Some(next) = ready else {
            let cycle = find_cycle(&deps, &emitted)
                .into_iter()
                .map(|i| items[i].name.clone())
                .collect();
            return Err(Error::cyclic_reference(cycle));
        };
        emitted[next] = true;
        order.push(next);
    }

    let mut slots: Vec<Option<SchemaItem>> = items.into_iter().map(Some).collect();
    Ok(order.into_iter().filter_map(|i| slots[i].take()).collect())
}

/// Follows unemitted dependencies from the first blocked item until a
/// position repeats. The returned path starts and ends at the same item.
fn find_cycle(deps: &[Vec<usize>], emitted: &[bool]) -> Vec<usize> {
    let Some(start) = (0..deps.len()).find(|&i| !emitted[i]) else {
        return Vec::new();
    };
    let mut path = vec![start];
    let mut current = start;
    loop {
        let Some(next) = deps[current].iter().copied().find(|&d| !emitted[d]) else {
            return path;
        };
        if let Some(at) = path.iter().position(|&i| i == next) {
            let mut cycle = path.split_off(at);
            cycle.push(next);
            return cycle;
        }
        path.push(next);
        current = next;
    }
}
