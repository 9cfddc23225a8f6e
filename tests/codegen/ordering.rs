//! Integration tests for emission order
//!
//! Tests fixed ordering with its forward-reference warnings and the
//! topological alternative.

use zodgen_codegen::{CodegenConfig, Compiler, EmitOrder};
use zodgen_foundation::ErrorKind;
use zodgen_syntax::DeclarationKind;

const SOURCE: &str = "interface User { home: Address; id: Id }\ninterface Address { city: string }\ntype Id = string;";

fn names(compiler: &Compiler) -> Vec<String> {
    compiler
        .compile(SOURCE)
        .unwrap()
        .items()
        .iter()
        .map(|item| item.name.clone())
        .collect()
}

#[test]
fn fixed_order_groups_by_kind() {
    let compiler = Compiler::default();
    assert_eq!(names(&compiler), vec!["Id", "User", "Address"]);

    let program = compiler.compile(SOURCE).unwrap();
    let kinds: Vec<_> = program.items().iter().map(|item| item.kind).collect();
    assert_eq!(
        kinds,
        vec![DeclarationKind::Alias, DeclarationKind::Shape, DeclarationKind::Shape]
    );
}

#[test]
fn fixed_order_warns_about_forward_references() {
    let program = Compiler::default().compile(SOURCE).unwrap();
    let messages: Vec<_> = program
        .diagnostics()
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(messages, vec!["`User` references `Address` before it is defined"]);
}

#[test]
fn topological_order_defines_before_use() {
    let compiler = Compiler::new(CodegenConfig::default().with_order(EmitOrder::Topological));
    assert_eq!(names(&compiler), vec!["Id", "Address", "User"]);
    assert!(compiler.compile(SOURCE).unwrap().diagnostics().is_empty());
}

#[test]
fn topological_order_rejects_cycles() {
    let compiler = Compiler::new(CodegenConfig::default().with_order(EmitOrder::Topological));
    let err = compiler
        .compile("interface A { b: B }\ninterface B { a?: A }")
        .unwrap_err();
    match err.kind {
        ErrorKind::CyclicReference { cycle } => assert_eq!(cycle, vec!["A", "B", "A"]),
        other => panic!("expected cyclic reference, got {other:?}"),
    }
}
