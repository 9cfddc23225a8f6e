//! Declaration converters: one declaration in, one validator out.

use zodgen_syntax::{Diagnostic, EnumDeclaration, ShapeDeclaration, TypeAliasDeclaration};

use crate::convert::Converter;
use crate::validator::{ObjectField, ObjectSchema, Validator};

/// Converts an interface into an object validator.
///
/// Each field's type is converted independently and its description, if
/// any, is attached after the optional wrapper. Bases named in `extends`
/// must be interfaces in the same registry; other bases are dropped and
/// reported in `diagnostics`.
pub fn shape_schema(
    converter: &Converter<'_>,
    shape: &ShapeDeclaration,
    diagnostics: &mut Vec<Diagnostic>,
) -> Validator {
    let mut extends = Vec::with_capacity(shape.extends.len());
    for base in &shape.extends {
        if converter.registry().shapes().contains(base) {
            extends.push(base.clone());
        } else {
            diagnostics.push(Diagnostic::warn(
                shape.span,
                format!(
                    "interface `{}` extends `{base}`, which is not a known interface; base ignored",
                    shape.name
                ),
            ));
        }
    }

    let fields = shape
        .fields
        .iter()
        .map(|field| {
            let validator = converter.convert(&field.type_text, field.optional);
            let validator = match &field.description {
                Some(description) => validator.described(description.as_str()),
                None => validator,
            };
            ObjectField::new(field.name.as_str(), validator)
        })
        .collect();

    Validator::Object(ObjectSchema { extends, fields })
}

/// Converts a type alias by converting its right-hand side once.
#[must_use]
pub fn alias_schema(converter: &Converter<'_>, alias: &TypeAliasDeclaration) -> Validator {
    converter.convert(&alias.type_text, false)
}

/// Converts an enum into an enumeration of its values in declared order.
#[must_use]
pub fn enum_schema(declaration: &EnumDeclaration) -> Validator {
    Validator::Enum(declaration.values.clone())
}
