//! Integration tests for the lexer
//!
//! Tests tokenization of declaration sources mixed with ordinary code.

use zodgen_syntax::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_significant(source)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn lex_interface_header() {
    assert_eq!(
        kinds("export interface User {"),
        vec![
            TokenKind::Ident("export".into()),
            TokenKind::Ident("interface".into()),
            TokenKind::Ident("User".into()),
            TokenKind::LBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_keeps_doc_comments_only() {
    let tokens = kinds("// note\n/* block */\n/** Doc text */ id");
    assert_eq!(
        tokens,
        vec![
            TokenKind::DocComment("Doc text".into()),
            TokenKind::Ident("id".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_arbitrary_code_without_errors() {
    let source = r"
const total = items.reduce((acc, x) => acc + x.price * 2, 0) % 7;
if (a !== b && c >= d) { console.log(`sum: ${total}`); }
";
    let tokens = kinds(source);
    assert!(tokens.iter().all(|k| !matches!(k, TokenKind::Error(_))));
    assert!(tokens.contains(&TokenKind::Arrow));
    assert!(tokens.contains(&TokenKind::Other('%')));
}

#[test]
fn lex_spans_point_into_source() {
    let source = "type Id = string;";
    let tokens = Lexer::tokenize_all(source);
    let texts: Vec<_> = tokens.iter().map(|t| t.text(source)).collect();
    assert_eq!(texts, vec!["type", "Id", "=", "string", ";", ""]);
}
