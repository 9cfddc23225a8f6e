//! Integration tests for the type-expression parser
//!
//! Tests the supported grammar subset and its error reporting.

use zodgen_foundation::{ErrorKind, Primitive};
use zodgen_syntax::{TypeExpr, parse_type};

fn string() -> TypeExpr {
    TypeExpr::Primitive(Primitive::String)
}

// =============================================================================
// Grammar
// =============================================================================

#[test]
fn parse_every_primitive_keyword() {
    for primitive in Primitive::ALL {
        assert_eq!(
            parse_type(primitive.keyword()).unwrap(),
            TypeExpr::Primitive(primitive)
        );
    }
}

#[test]
fn parse_array_forms_agree() {
    assert_eq!(parse_type("string[]").unwrap(), parse_type("Array<string>").unwrap());
    assert_eq!(
        parse_type("Array<Array<string>>").unwrap(),
        TypeExpr::array(TypeExpr::array(string()))
    );
}

#[test]
fn parse_union_splits_only_at_top_level() {
    let expr = parse_type("Record<string, A | B> | Array<C | D>").unwrap();
    let TypeExpr::Union(branches) = expr else {
        panic!("expected union");
    };
    assert_eq!(branches.len(), 2);
    assert!(matches!(branches[0], TypeExpr::Map(Some(_))));
    assert!(matches!(branches[1], TypeExpr::Array(_)));
}

#[test]
fn parse_trailing_question_mark() {
    assert_eq!(
        parse_type("string?").unwrap(),
        TypeExpr::optional(string())
    );
}

#[test]
fn parse_is_whitespace_insensitive() {
    assert_eq!(
        parse_type("  Array <\n  'a' |\t'b'\n> ").unwrap(),
        parse_type("Array<'a'|'b'>").unwrap()
    );
}

#[test]
fn parse_malformed_record_is_not_an_error() {
    assert_eq!(parse_type("Record<>").unwrap(), TypeExpr::Map(None));
    assert_eq!(parse_type("Record<string>").unwrap(), TypeExpr::Map(None));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn parse_rejects_numbers_and_objects() {
    assert!(parse_type("42").is_err());
    assert!(parse_type("{ a: string }").is_err());
    assert!(parse_type("A & B").is_err());
}

#[test]
fn parse_error_carries_position() {
    let err = parse_type("Array<string").unwrap_err();
    match err.kind {
        ErrorKind::ParseError { line, column, context, .. } => {
            assert_eq!((line, column), (1, 13));
            assert_eq!(context, "Array<string");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}
