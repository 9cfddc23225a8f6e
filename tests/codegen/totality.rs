//! Property tests for conversion totality
//!
//! Every input converts without panicking, and a field with an unsupported
//! type still produces a well-formed file.

use proptest::prelude::*;
use zodgen_codegen::{CodegenConfig, Compiler, convert_file};

fn type_text() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just("string".to_string()),
        Just("number".to_string()),
        Just("undefined".to_string()),
        Just("null".to_string()),
        Just("'x'".to_string()),
        Just("Other".to_string()),
        Just("Map<string, number>".to_string()),
        Just("() => void".to_string()),
        Just("{ a: string }".to_string()),
    ];
    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            inner.clone().prop_map(|t| format!("{t}[]")),
            inner.clone().prop_map(|t| format!("Array<{t}>")),
            inner.clone().prop_map(|t| format!("Record<string, {t}>")),
            inner.clone().prop_map(|t| format!("({t})")),
            (inner.clone(), inner).prop_map(|(a, b)| format!("{a} | {b}")),
        ]
    })
}

proptest! {
    #[test]
    fn convert_file_never_panics(source in "\\PC{0,200}") {
        let _ = convert_file(&source);
    }

    #[test]
    fn every_field_is_emitted(ty in type_text(), optional in any::<bool>()) {
        let mark = if optional { "?" } else { "" };
        let source = format!("interface Other {{ id: string }}\ninterface Sample {{\n  value{mark}: {ty};\n}}\n");
        let code = convert_file(&source);
        let has_field = code.contains("export const SampleSchema = z.object({\n  value: ");
        prop_assert!(has_field, "missing field in:\n{}", code);
        let has_binding = code.contains("export type Sample = z.infer<typeof SampleSchema>;");
        prop_assert!(has_binding, "missing type binding in:\n{}", code);
        if optional {
            let marked = code.contains(".optional(),\n});");
            prop_assert!(marked, "field not optional in:\n{}", code);
        }
    }

    #[test]
    fn strict_policy_only_fails_on_fallbacks(ty in type_text()) {
        let source = format!("interface Other {{ id: string }}\ntype Sample = {ty};\n");
        let lenient = Compiler::default().compile(&source).unwrap();
        let fallback = lenient
            .get("Sample")
            .is_some_and(|item| !item.validator.unresolved_expressions().is_empty());
        let strict = Compiler::new(CodegenConfig::strict()).compile(&source);
        prop_assert_eq!(strict.is_err(), fallback);
    }
}
