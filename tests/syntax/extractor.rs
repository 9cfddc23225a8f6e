//! Integration tests for the declaration extractor
//!
//! Tests extraction from realistic declaration files.

use zodgen_syntax::{DeclarationKind, extract};

const MODELS: &str = r#"
import { Something } from './elsewhere';

/**
 * Account roles.
 */
export enum Role {
  Admin = "admin",
  Member = "member",
}

export type Status = 'active' | 'disabled';

export interface Account {
  /** Stable identifier */
  id: string;
  /**
   * Login name,
   * unique per tenant
   */
  login: string;
  role: Role;
  status?: Status;
  tags: string[];
  settings: Record<string, string | number>;
}

export function isAdmin(account: Account): boolean {
  return account.role === Role.Admin;
}
"#;

#[test]
fn extract_models_file() {
    let registry = extract(MODELS);
    assert_eq!(registry.len(), 3);
    assert!(registry.diagnostics().is_empty());

    assert_eq!(
        registry.enums().get("Role").unwrap().values,
        vec!["admin", "member"]
    );
    assert_eq!(
        registry.aliases().get("Status").unwrap().type_text,
        "'active' | 'disabled'"
    );

    let account = registry.shapes().get("Account").unwrap();
    let names: Vec<_> = account.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["id", "login", "role", "status", "tags", "settings"]);
    assert_eq!(
        account.fields[1].description.as_deref(),
        Some("Login name, unique per tenant")
    );
    assert!(account.fields[3].optional);
    assert_eq!(
        account.fields[5].type_text,
        "Record<string, string | number>"
    );
}

#[test]
fn extract_preserves_declaration_order_per_kind() {
    let registry = extract("type B = string;\ntype A = number;\ntype C = boolean;");
    let names: Vec<_> = registry.aliases().names().collect();
    assert_eq!(names, vec!["B", "A", "C"]);
    assert_eq!(registry.kind_of("A"), Some(DeclarationKind::Alias));
}

#[test]
fn extract_continues_after_malformed_declaration() {
    let registry = extract("interface Broken extends { x: 1 }\ninterface Fine { ok: boolean }");
    assert!(registry.shapes().contains("Fine"));
    assert!(!registry.diagnostics().is_empty());
}
