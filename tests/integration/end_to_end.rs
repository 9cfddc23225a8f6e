//! End-to-end conversion tests
//!
//! Tests complete generated files for realistic inputs.

use zodgen::codegen::{CodegenConfig, Compiler, UnresolvedPolicy};
use zodgen::convert_file;

#[test]
fn convert_complete_file() {
    let source = r#"
import { Base } from './base';

export enum Color {
  RED,
  GREEN = "green_value",
}

export type Tags = string[];

export interface Entity {
  id: string;
}

export interface Product extends Entity {
  /** Display name */
  name: string;
  price?: number;
  color: Color | undefined;
  tags: Tags;
  attributes: Record<string, string | number>;
  'sku-code': string;
  related: Array<Product>;
  source: Base;
}
"#;

    let expected = r#"import { z } from 'zod';

// Auto-generated Zod schemas

export const ColorSchema = z.enum(["RED", "green_value"]);

export type Color = z.infer<typeof ColorSchema>;

export const TagsSchema = z.array(z.string());

export type Tags = z.infer<typeof TagsSchema>;

export const EntitySchema = z.object({
  id: z.string(),
});

export type Entity = z.infer<typeof EntitySchema>;

export const ProductSchema = EntitySchema.extend({
  name: z.string().describe("Display name"),
  price: z.number().optional(),
  color: ColorSchema.optional(),
  tags: TagsSchema,
  attributes: z.record(z.union([z.string(), z.number()])),
  "sku-code": z.string(),
  related: z.array(ProductSchema),
  source: z.any() /* unresolved type: Base */,
});

export type Product = z.infer<typeof ProductSchema>;
"#;

    assert_eq!(convert_file(source), expected);
}

#[test]
fn string_literals_are_emitted_verbatim() {
    let code = convert_file("type Greeting = 'hello  world';\ninterface M { tab: \"a\tb\" }");
    assert!(code.contains("export const GreetingSchema = z.literal('hello  world');"));
    assert!(code.contains("  tab: z.literal(\"a\tb\"),\n"));
}

#[test]
fn quoted_member_names_keep_their_escapes() {
    let code = convert_file(r#"interface Quoted { 'it\'s': string; "say \"hi\"": number }"#);
    assert!(code.contains(r#"  "it\'s": z.string(),"#));
    assert!(code.contains(r#"  "say \"hi\"": z.number(),"#));
}

#[test]
fn deeply_nested_types_fall_back() {
    let n = 20_000;
    for body in [
        format!("{}string{}", "(".repeat(n), ")".repeat(n)),
        format!("{}string{}", "Array<".repeat(n), ">".repeat(n)),
        format!("string{}", "[]".repeat(n)),
    ] {
        let code = convert_file(&format!("type Deep = {body};\ninterface Holder {{ deep: {body} }}"));
        assert!(code.contains("export const DeepSchema = z.any() /* unresolved type: "));
        assert!(code.contains("  deep: z.any() /* unresolved type: "));
        assert!(code.contains("export type Holder = z.infer<typeof HolderSchema>;"));
    }
}

#[test]
fn convert_file_without_declarations() {
    let code = convert_file("const x = 1;\nfunction f() { return x; }\n");
    assert_eq!(code, "import { z } from 'zod';\n\n// Auto-generated Zod schemas\n");
}

#[test]
fn self_reference_is_reported_not_fixed() {
    let program = Compiler::default()
        .compile("interface Node { children: Node[] }")
        .unwrap();
    let messages: Vec<_> = program
        .diagnostics()
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(messages, vec!["`Node` references itself"]);
}

#[test]
fn strict_policy_names_the_declaration() {
    let compiler =
        Compiler::new(CodegenConfig::default().with_unresolved(UnresolvedPolicy::Strict));
    let err = compiler
        .convert_file("type Ok = string;\n\ninterface Bad {\n  when: Moment;\n}")
        .unwrap_err()
        .in_source("models.ts");
    assert_eq!(
        err.context.unwrap().to_string(),
        "at models.ts:3:1 in Bad"
    );
}

#[test]
fn custom_import_line() {
    let config = CodegenConfig::minimal().with_import_line("import * as z from 'zod';");
    let code = Compiler::new(config).convert_file("type Flag = boolean").unwrap();
    assert!(code.starts_with("import * as z from 'zod';\n\nexport const FlagSchema"));
}
