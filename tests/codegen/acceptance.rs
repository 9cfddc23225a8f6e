//! Integration tests for validator evaluation
//!
//! Generated validators are evaluated against JSON values and compared to
//! what the declared TypeScript types admit.

use serde_json::{Value, json};
use zodgen_codegen::{Compiler, Program};
use zodgen_syntax::extract;

const MODELS: &str = r#"
export enum Role { Admin = "admin", Member = "member" }

export type Status = 'active' | 'disabled';

export interface Address {
  city: string;
  zip?: string;
}

export interface Account {
  id: string;
  role: Role;
  status?: Status | null;
  addresses: Address[];
  scores: Record<string, number>;
  nickname: string | undefined;
  createdAt: Date;
  balance: bigint;
}
"#;

fn program() -> Program {
    Compiler::default().assemble(&extract(MODELS))
}

fn accepts(program: &Program, name: &str, value: &Value) -> bool {
    program
        .get(name)
        .unwrap()
        .validator
        .accepts(Some(value), program)
}

fn account() -> Value {
    json!({
        "id": "a-1",
        "role": "admin",
        "addresses": [{ "city": "Oslo" }, { "city": "Lima", "zip": "15001" }],
        "scores": { "math": 3, "art": 4.5 },
        "createdAt": "2024-01-01T00:00:00Z",
        "balance": 100
    })
}

#[test]
fn accepts_conforming_value() {
    let program = program();
    assert!(accepts(&program, "Account", &account()));

    let mut full = account();
    full["status"] = json!("disabled");
    full["nickname"] = json!("al");
    full["extra"] = json!({ "ignored": true });
    assert!(accepts(&program, "Account", &full));
}

#[test]
fn rejects_wrong_enum_value() {
    let program = program();
    let mut value = account();
    value["role"] = json!("Admin");
    assert!(!accepts(&program, "Account", &value));
}

#[test]
fn rejects_missing_required_field() {
    let program = program();
    let mut value = account();
    value.as_object_mut().unwrap().remove("id");
    assert!(!accepts(&program, "Account", &value));
}

#[test]
fn rejects_bad_nested_element() {
    let program = program();
    let mut value = account();
    value["addresses"] = json!([{ "city": "Oslo" }, { "zip": "0150" }]);
    assert!(!accepts(&program, "Account", &value));
}

#[test]
fn rejects_bad_record_value() {
    let program = program();
    let mut value = account();
    value["scores"] = json!({ "math": "A" });
    assert!(!accepts(&program, "Account", &value));
}

#[test]
fn json_scalars_stand_in_for_dates_and_bigints() {
    let program = program();
    let mut value = account();
    value["balance"] = json!(1.5);
    assert!(!accepts(&program, "Account", &value));

    let mut value = account();
    value["createdAt"] = json!(0);
    assert!(!accepts(&program, "Account", &value));
}

#[test]
fn literal_union_alias() {
    let program = program();
    assert!(accepts(&program, "Status", &json!("active")));
    assert!(!accepts(&program, "Status", &json!("archived")));
}

#[test]
fn literal_whitespace_is_exact() {
    let program = Compiler::default()
        .assemble(&extract("type Greeting = 'hello  world';\ntype Tabbed = \"a\tb\";"));
    assert!(accepts(&program, "Greeting", &json!("hello  world")));
    assert!(!accepts(&program, "Greeting", &json!("hello world")));
    assert!(accepts(&program, "Tabbed", &json!("a\tb")));
}

#[test]
fn quoted_member_names_match_json_keys() {
    let program = Compiler::default()
        .assemble(&extract(r#"interface Quoted { 'it\'s': boolean; "x-id": string }"#));
    assert!(accepts(&program, "Quoted", &json!({ "it's": true, "x-id": "a" })));
    assert!(!accepts(&program, "Quoted", &json!({ "x-id": "a" })));
}
