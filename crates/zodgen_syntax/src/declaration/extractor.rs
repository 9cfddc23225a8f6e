//! Declaration extractor implementation.
//!
//! Walks the token stream of a whole source file and carves out `interface`,
//! `type` and `enum` declarations. Everything else is skipped. Malformed
//! declarations are skipped with a warning; extraction never fails.

use super::registry::{Registry, RegistryBuilder};
use super::types::{
    DeclarationKind, EnumDeclaration, Field, ShapeDeclaration, TypeAliasDeclaration,
};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Extracts every declaration in `source`.
#[must_use]
pub fn extract(source: &str) -> Registry {
    Extractor::new(source).run()
}

/// Scans a token stream for declarations.
pub struct Extractor<'src> {
    source: &'src str,
    /// Significant tokens (doc comments kept), always terminated by `Eof`.
    tokens: Vec<Token>,
    registry: RegistryBuilder,
}

impl<'src> Extractor<'src> {
    /// Creates an extractor over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Lexer::tokenize_significant(source),
            registry: RegistryBuilder::new(),
        }
    }

    /// Scans the whole source and returns the populated registry.
    #[must_use]
    pub fn run(mut self) -> Registry {
        let mut i = 0;
        while i < self.tokens.len() {
            i = self.declaration_at(i).unwrap_or(i + 1);
        }
        self.registry.build()
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Tries to read a declaration starting at token `i`.
    ///
    /// Returns the index to resume scanning from, or `None` if token `i` does
    /// not start a declaration.
    fn declaration_at(&mut self, i: usize) -> Option<usize> {
        let kind = match self.tokens[i].as_ident()? {
            "interface" => DeclarationKind::Shape,
            "type" => DeclarationKind::Alias,
            "enum" => DeclarationKind::Enum,
            _ => return None,
        };
        if i > 0 && self.tokens[i - 1].kind == TokenKind::Dot {
            return None;
        }

        match kind {
            DeclarationKind::Shape => self.shape_at(i),
            DeclarationKind::Alias => self.alias_at(i),
            DeclarationKind::Enum => self.enum_at(i),
        }
    }

    // =========================================================================
    // Interfaces
    // =========================================================================

    fn shape_at(&mut self, i: usize) -> Option<usize> {
        let span = self.tokens[i].span;
        let Some(name) = self.ident_at(i + 1) else {
            return self.unnamed_block(i, DeclarationKind::Shape);
        };

        let mut j = i + 2;
        if self.tokens[j].kind == TokenKind::LAngle {
            self.registry.warn(
                span,
                format!("generic interface `{name}` is not supported; skipped"),
            );
            return Some(self.skip_to_body_end(j));
        }

        let mut extends = Vec::new();
        if self.tokens[j].is_ident("extends") {
            j += 1;
            loop {
                let Some(base) = self.dotted_name_at(&mut j) else {
                    self.registry.warn(
                        self.tokens[j].span,
                        format!("malformed extends clause on interface `{name}`; skipped"),
                    );
                    return Some(j);
                };
                if self.tokens[j].kind == TokenKind::LAngle {
                    self.registry.warn(
                        self.tokens[j].span,
                        format!("generic base `{base}` of interface `{name}` is ignored"),
                    );
                    j = self.find_matching(j)? + 1;
                } else {
                    extends.push(base);
                }
                if self.tokens[j].kind == TokenKind::Comma {
                    j += 1;
                } else {
                    break;
                }
            }
        }

        if self.tokens[j].kind != TokenKind::LBrace {
            self.registry
                .warn(span, format!("interface `{name}` has no body; skipped"));
            return Some(j);
        }
        let Some(close) = self.find_matching(j) else {
            self.registry.warn(
                span,
                format!("unterminated body for interface `{name}`; skipped"),
            );
            return Some(j + 1);
        };

        let fields = self.members(j + 1, close, &name);
        self.registry.add_shape(ShapeDeclaration {
            name,
            extends,
            fields,
            span,
        });
        Some(close + 1)
    }

    /// Reads interface members between `start` and `end` (exclusive).
    fn members(&mut self, start: usize, end: usize, owner: &str) -> Vec<Field> {
        let mut fields = Vec::new();
        let mut description = None;
        let mut k = start;

        while k < end {
            match &self.tokens[k].kind {
                TokenKind::DocComment(text) => {
                    description = Some(text.clone());
                    k += 1;
                }
                TokenKind::Semicolon | TokenKind::Comma => k += 1,
                TokenKind::Ident(_) | TokenKind::Str { .. } => {
                    let (field, next) = self.member(k, end, owner);
                    if let Some(mut field) = field {
                        field.description = description.take();
                        fields.push(field);
                    }
                    description = None;
                    k = next;
                }
                TokenKind::LBracket => {
                    self.registry.warn(
                        self.tokens[k].span,
                        format!("index signature in interface `{owner}` is not supported; skipped"),
                    );
                    description = None;
                    k = self.expression_end(k, end);
                }
                other => {
                    let message = format!("unexpected {} in interface `{owner}`", other.name());
                    self.registry.warn(self.tokens[k].span, message);
                    description = None;
                    k = self.expression_end(k, end);
                }
            }
        }
        fields
    }

    /// Reads one `[readonly] name[?]: type` member starting at `k`.
    fn member(&mut self, k: usize, end: usize, owner: &str) -> (Option<Field>, usize) {
        let mut j = k;
        if self.tokens[j].is_ident("readonly") && j + 1 < end && self.member_name(j + 1).is_some()
        {
            j += 1;
        }
        let span = self.tokens[j].span;
        let name = self.member_name(j).unwrap_or_default();
        j += 1;

        let optional = j < end && self.tokens[j].kind == TokenKind::Question;
        if optional {
            j += 1;
        }

        if j >= end || self.tokens[j].kind != TokenKind::Colon {
            let message = if j < end
                && matches!(self.tokens[j].kind, TokenKind::LParen | TokenKind::LAngle)
            {
                format!("method `{name}` in interface `{owner}` is not supported; skipped")
            } else {
                format!("expected ':' after member `{name}` in interface `{owner}`; skipped")
            };
            self.registry.warn(span, message);
            return (None, self.expression_end(k, end));
        }

        let type_end = self.expression_end(j, end);
        let Some(type_text) = self.text_between(j + 1, type_end) else {
            self.registry.warn(
                span,
                format!("member `{name}` in interface `{owner}` has no type; skipped"),
            );
            return (None, type_end);
        };

        let field = Field {
            name,
            type_text,
            optional,
            description: None,
            span,
        };
        (Some(field), type_end)
    }

    fn member_name(&self, k: usize) -> Option<String> {
        match &self.tokens[k].kind {
            TokenKind::Ident(name) | TokenKind::Str { value: name, .. } => Some(name.clone()),
            _ => None,
        }
    }

    // =========================================================================
    // Type aliases
    // =========================================================================

    fn alias_at(&mut self, i: usize) -> Option<usize> {
        let span = self.tokens[i].span;
        // `import type { .. }`, `{ type: .. }` and friends are not declarations.
        let name = self.ident_at(i + 1)?;
        let j = i + 2;

        match self.tokens[j].kind {
            TokenKind::Equals => {}
            TokenKind::LAngle => {
                self.registry.warn(
                    span,
                    format!("generic type alias `{name}` is not supported; skipped"),
                );
                return Some(self.expression_end(j, self.eof()));
            }
            _ => {
                self.registry
                    .warn(span, format!("type alias `{name}` has no '='; skipped"));
                return Some(j);
            }
        }

        let body_end = self.expression_end(j, self.eof());
        let Some(type_text) = self.text_between(j + 1, body_end) else {
            self.registry.warn(
                span,
                format!("type alias `{name}` has an empty right-hand side; skipped"),
            );
            return Some(body_end);
        };

        self.registry.add_alias(TypeAliasDeclaration {
            name,
            type_text,
            span,
        });
        Some(body_end)
    }

    // =========================================================================
    // Enums
    // =========================================================================

    fn enum_at(&mut self, i: usize) -> Option<usize> {
        let span = self.tokens[i].span;
        let Some(name) = self.ident_at(i + 1) else {
            return self.unnamed_block(i, DeclarationKind::Enum);
        };

        let j = i + 2;
        if self.tokens[j].kind != TokenKind::LBrace {
            self.registry
                .warn(span, format!("enum `{name}` has no body; skipped"));
            return Some(j);
        }
        let Some(close) = self.find_matching(j) else {
            self.registry
                .warn(span, format!("unterminated body for enum `{name}`; skipped"));
            return Some(j + 1);
        };

        let values = self.enum_members(j + 1, close, &name);
        self.registry.add_enum(EnumDeclaration { name, values, span });
        Some(close + 1)
    }

    /// Reads `Member` / `Member = "value"` entries separated by commas.
    fn enum_members(&mut self, start: usize, end: usize, owner: &str) -> Vec<String> {
        let mut values = Vec::new();
        let mut k = start;

        while k < end {
            let stop = self.enum_member_end(k, end);
            match self.member_name(k) {
                Some(member) => {
                    let initializer: Vec<&TokenKind> =
                        self.tokens[k + 1..stop].iter().map(|t| &t.kind).collect();
                    let value = match initializer.as_slice() {
                        [] => member,
                        [TokenKind::Equals, TokenKind::Str { value, .. }] => value.clone(),
                        _ => {
                            self.registry.warn(
                                self.tokens[k].span,
                                format!(
                                    "enum member `{owner}.{member}` has a non-string initializer; using its name"
                                ),
                            );
                            member
                        }
                    };
                    values.push(value);
                }
                None if matches!(
                    self.tokens[k].kind,
                    TokenKind::Comma | TokenKind::DocComment(_)
                ) => {}
                None => {
                    let message = format!(
                        "unexpected {} in enum `{owner}`",
                        self.tokens[k].kind.name()
                    );
                    self.registry.warn(self.tokens[k].span, message);
                }
            }
            k = stop.max(k + 1);
        }
        values
    }

    /// Returns the index of the comma ending the enum member at `k`, or `end`.
    fn enum_member_end(&self, k: usize, end: usize) -> usize {
        let mut depth = 0usize;
        for idx in k..end {
            let kind = &self.tokens[idx].kind;
            if matches!(kind, TokenKind::Comma | TokenKind::DocComment(_)) && depth == 0 {
                return idx;
            }
            if kind.is_open_delimiter() {
                depth += 1;
            } else if kind.is_close_delimiter() {
                depth = depth.saturating_sub(1);
            }
        }
        end
    }

    // =========================================================================
    // Scanning helpers
    // =========================================================================

    fn eof(&self) -> usize {
        self.tokens.len() - 1
    }

    fn ident_at(&self, k: usize) -> Option<String> {
        self.tokens.get(k)?.as_ident().map(str::to_owned)
    }

    /// Reads `A` or `A.B.C` at `*j`, advancing past it.
    fn dotted_name_at(&self, j: &mut usize) -> Option<String> {
        let mut name = self.ident_at(*j)?;
        *j += 1;
        while self.tokens[*j].kind == TokenKind::Dot {
            let part = self.ident_at(*j + 1)?;
            name.push('.');
            name.push_str(&part);
            *j += 2;
        }
        Some(name)
    }

    /// Handles `interface {` / `enum {` with the name missing.
    fn unnamed_block(&mut self, i: usize, kind: DeclarationKind) -> Option<usize> {
        if self.tokens[i + 1].kind != TokenKind::LBrace {
            return None;
        }
        self.registry.warn(
            self.tokens[i].span,
            format!("{kind} declaration without a name; skipped"),
        );
        Some(self.find_matching(i + 1).map_or(i + 2, |close| close + 1))
    }

    /// Skips generic parameters at `j` and the body that follows them.
    fn skip_to_body_end(&self, j: usize) -> usize {
        let Some(after_params) = self.find_matching(j).map(|close| close + 1) else {
            return j + 1;
        };
        let Some(open) = (after_params..self.eof())
            .find(|&k| self.tokens[k].kind == TokenKind::LBrace)
        else {
            return after_params;
        };
        self.find_matching(open).map_or(open + 1, |close| close + 1)
    }

    /// Finds the token closing the `{` or `<` at `open`.
    fn find_matching(&self, open: usize) -> Option<usize> {
        let (opener, closer) = match self.tokens[open].kind {
            TokenKind::LBrace => (TokenKind::LBrace, TokenKind::RBrace),
            TokenKind::LAngle => (TokenKind::LAngle, TokenKind::RAngle),
            _ => return None,
        };
        let mut depth = 0usize;
        for (idx, token) in self.tokens.iter().enumerate().skip(open) {
            if token.kind == opener {
                depth += 1;
            } else if token.kind == closer {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
        }
        None
    }

    /// Returns the index where the expression that follows token `start` ends.
    ///
    /// The expression ends at depth 0 on `;`, `,`, a doc comment, a closing
    /// delimiter of an enclosing group, end of input, or a line break that
    /// does not continue the expression. The result is always greater than
    /// `start` and at most `limit`.
    fn expression_end(&self, start: usize, limit: usize) -> usize {
        let mut depth = 0usize;
        for idx in start..limit {
            let kind = &self.tokens[idx].kind;
            if idx > start && depth == 0 && self.ends_expression(idx) {
                return idx;
            }
            if kind.is_open_delimiter() {
                depth += 1;
            } else if kind.is_close_delimiter() {
                depth = depth.saturating_sub(1);
            }
        }
        limit.max(start + 1)
    }

    fn ends_expression(&self, idx: usize) -> bool {
        let token = &self.tokens[idx];
        match token.kind {
            TokenKind::Semicolon | TokenKind::Comma | TokenKind::Eof | TokenKind::DocComment(_) => {
                true
            }
            ref kind if kind.is_close_delimiter() => true,
            TokenKind::Pipe | TokenKind::Amp | TokenKind::Arrow | TokenKind::Dot => false,
            _ => {
                let prev = &self.tokens[idx - 1];
                token.span.line > prev.span.line && !prev.kind.continues_expression()
            }
        }
    }

    /// Returns the source text of tokens `from..to`, if any.
    ///
    /// Tokens are copied verbatim, so string literals keep their exact
    /// contents. Any gap between tokens (whitespace, comments) becomes a
    /// single space, and doc comments are dropped.
    fn text_between(&self, from: usize, to: usize) -> Option<String> {
        let mut text = String::new();
        let mut previous_end = None;
        for token in self.tokens.get(from..to)? {
            if matches!(token.kind, TokenKind::DocComment(_)) {
                continue;
            }
            if previous_end.is_some_and(|end| token.span.start > end) {
                text.push(' ');
            }
            text.push_str(token.text(self.source));
            previous_end = Some(token.span.end);
        }
        (!text.is_empty()).then_some(text)
    }
}
