//! Integration tests for type-expression conversion
//!
//! Tests conversion through a full extract-and-assemble pass so that
//! references resolve against real registries.

use zodgen_codegen::{Compiler, Converter, Program, Validator};
use zodgen_foundation::Primitive;
use zodgen_syntax::extract;

fn assemble(source: &str) -> Program {
    Compiler::default().assemble(&extract(source))
}

fn field(program: &Program, shape: &str, name: &str) -> Validator {
    let item = program.get(shape).unwrap();
    let Validator::Object(object) = &item.validator else {
        panic!("{shape} is not an object");
    };
    object
        .fields
        .iter()
        .find(|f| f.name == name)
        .unwrap()
        .validator
        .clone()
}

fn convert(text: &str) -> String {
    let registry = extract("");
    Converter::new(&registry).convert(text, false).to_string()
}

// =============================================================================
// Primitives and Containers
// =============================================================================

#[test]
fn every_primitive_converts_unwrapped() {
    for primitive in Primitive::ALL {
        assert_eq!(
            convert(primitive.keyword()),
            format!("z.{}()", primitive.builder())
        );
    }
}

#[test]
fn array_suffix_and_generic_agree() {
    for element in ["string", "number", "'a' | 'b'", "Record<string, boolean>"] {
        assert_eq!(
            convert(&format!("Array<{element}>")),
            convert(&format!("({element})[]"))
        );
    }
}

#[test]
fn record_maps_only_the_value() {
    assert_eq!(convert("Record<string, number>"), "z.record(z.number())");
    assert_eq!(convert("Record<'a' | 'b', number>"), "z.record(z.number())");
    assert_eq!(convert("Record<string>"), "z.record(z.any())");
}

#[test]
fn record_value_resolves_references() {
    let program = assemble(
        "interface Price { amount: number }\ninterface Book { prices: Record<string, Price> }",
    );
    assert_eq!(
        field(&program, "Book", "prices").to_string(),
        "z.record(PriceSchema)"
    );
}

// =============================================================================
// Optionality
// =============================================================================

#[test]
fn undefined_branch_becomes_optional_wrapper() {
    assert_eq!(convert("string | undefined"), "z.string().optional()");
    assert_eq!(
        convert("string | number | undefined"),
        "z.union([z.string(), z.number()]).optional()"
    );
    assert_eq!(convert("string | null"), "z.string().optional()");
}

#[test]
fn question_mark_and_undefined_apply_once() {
    let program = assemble("interface A { x?: string | undefined; y?: string }");
    assert_eq!(field(&program, "A", "x"), field(&program, "A", "y"));
    assert_eq!(
        field(&program, "A", "x").to_string(),
        "z.string().optional()"
    );
}

#[test]
fn sentinel_only_union_is_kept() {
    assert_eq!(
        convert("null | undefined"),
        "z.union([z.null(), z.undefined()])"
    );
}

// =============================================================================
// References
// =============================================================================

#[test]
fn references_use_schema_names() {
    let program = assemble(
        "enum Role { Admin }\ntype Id = string;\ninterface Team { id: Id }\ninterface User { role: Role; team: Team; id: Id }",
    );
    assert_eq!(field(&program, "User", "role").to_string(), "RoleSchema");
    assert_eq!(field(&program, "User", "team").to_string(), "TeamSchema");
    assert_eq!(field(&program, "User", "id").to_string(), "IdSchema");
}

#[test]
fn unknown_names_fall_back_and_are_marked() {
    let program = assemble("interface Job { result: Promise<User>; owner: Person }");
    assert_eq!(
        field(&program, "Job", "result").to_string(),
        "z.any() /* unresolved type: Promise<User> */"
    );
    assert_eq!(
        field(&program, "Job", "owner").to_string(),
        "z.any() /* unresolved type: Person */"
    );
}

#[test]
fn enum_values_keep_declared_order() {
    let program = assemble("enum Color { RED, GREEN = \"green_value\", BLUE = 'blue' }");
    assert_eq!(
        program.get("Color").unwrap().validator,
        Validator::Enum(vec!["RED".into(), "green_value".into(), "blue".into()])
    );
}
