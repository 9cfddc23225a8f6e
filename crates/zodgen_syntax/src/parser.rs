//! Recursive-descent parser for type expressions.
//!
//! Grammar (lowest precedence first):
//!
//! ```text
//! type     := union '?'? EOF
//! union    := '|'? postfix ('|' postfix)*
//! postfix  := primary ('[' ']')*
//! primary  := '(' union ')' | STRING | name ('<' union (',' union)* '>')?
//! name     := IDENT ('.' IDENT)*
//! ```
//!
//! `Array<T>` becomes [`TypeExpr::Array`] and `Record<K, V>` becomes
//! [`TypeExpr::Map`]; a `Record` whose arguments cannot be parsed still
//! succeeds as `Map(None)`.
//!
//! Nesting through groups, generic arguments and `[]` suffixes is limited to
//! [`MAX_NESTING`] levels; deeper input is a parse error.

use zodgen_foundation::{Error, Primitive, Result};

use crate::ast::{MapArgs, StringLiteral, TypeExpr};
use crate::lexer::Lexer;
use crate::pretty::normalize_source;
use crate::token::{Token, TokenKind};

/// Maximum nesting depth of a type expression.
pub const MAX_NESTING: usize = 128;

/// Parser for a single type expression.
pub struct Parser<'src> {
    /// Significant tokens, always terminated by `Eof`.
    tokens: Vec<Token>,
    /// Index of the current token.
    pos: usize,
    /// Source text (for error messages and raw slices).
    source: &'src str,
    /// Current nesting depth.
    depth: usize,
    /// Set once the nesting limit has been hit.
    too_deep: bool,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let tokens = Lexer::tokenize_all(source)
            .into_iter()
            .filter(|t| !matches!(t.kind, TokenKind::Comment(_) | TokenKind::DocComment(_)))
            .collect();
        Self {
            tokens,
            pos: 0,
            source,
            depth: 0,
            too_deep: false,
        }
    }

    /// Parses the whole source as one type expression.
    ///
    /// # Errors
    /// Returns a parse error if the source is not a complete type expression
    /// in the supported grammar.
    pub fn parse(&mut self) -> Result<TypeExpr> {
        let expr = self.parse_union()?;
        let expr = if self.eat(&TokenKind::Question) {
            TypeExpr::optional(expr)
        } else {
            expr
        };
        if !self.at(&TokenKind::Eof) {
            return Err(self.error(&format!("unexpected {}", self.current().kind.name())));
        }
        Ok(expr)
    }

    fn parse_union(&mut self) -> Result<TypeExpr> {
        self.enter(1)?;
        let result = self.parse_union_branches();
        self.depth -= 1;
        result
    }

    fn parse_union_branches(&mut self) -> Result<TypeExpr> {
        self.eat(&TokenKind::Pipe);
        let first = self.parse_postfix()?;
        if !self.at(&TokenKind::Pipe) {
            return Ok(first);
        }

        let mut branches = vec![first];
        while self.eat(&TokenKind::Pipe) {
            branches.push(self.parse_postfix()?);
        }
        Ok(TypeExpr::Union(branches))
    }

    fn parse_postfix(&mut self) -> Result<TypeExpr> {
        let mut expr = self.parse_primary()?;
        let mut suffixes = 0;
        let result = loop {
            if !self.eat(&TokenKind::LBracket) {
                break Ok(expr);
            }
            if let Err(err) = self
                .expect(&TokenKind::RBracket)
                .and_then(|()| self.enter(1))
            {
                break Err(err);
            }
            suffixes += 1;
            expr = TypeExpr::array(expr);
        };
        self.depth -= suffixes;
        result
    }

    fn parse_primary(&mut self) -> Result<TypeExpr> {
        match self.current().kind.clone() {
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_union()?;
                self.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Str { value, quote } => {
                self.advance();
                Ok(TypeExpr::Literal(StringLiteral { value, quote }))
            }
            TokenKind::Ident(name) => {
                self.advance();
                self.parse_named(name)
            }
            TokenKind::Eof => Err(self.error("unexpected end of type expression")),
            TokenKind::Error(msg) => Err(self.error(&msg)),
            other => Err(self.error(&format!(
                "unsupported {} in type expression",
                other.name()
            ))),
        }
    }

    /// Parses the rest of a (possibly dotted, possibly generic) name.
    fn parse_named(&mut self, mut name: String) -> Result<TypeExpr> {
        while self.eat(&TokenKind::Dot) {
            let Some(part) = self.current().as_ident().map(str::to_owned) else {
                return Err(self.error("expected identifier after '.'"));
            };
            self.advance();
            name.push('.');
            name.push_str(&part);
        }

        if self.at(&TokenKind::LAngle) {
            return self.parse_generic(name);
        }

        Ok(match Primitive::from_keyword(&name) {
            Some(primitive) => TypeExpr::Primitive(primitive),
            None => TypeExpr::Reference(name),
        })
    }

    /// Parses `<...>` after `name`; the current token is `<`.
    fn parse_generic(&mut self, name: String) -> Result<TypeExpr> {
        let open = self.pos;
        self.advance();

        if name == "Record" {
            match self.parse_record_args() {
                Ok(Some(args)) => return Ok(TypeExpr::Map(Some(args))),
                Err(err) if self.too_deep => return Err(err),
                _ => {}
            }
            self.pos = open;
            self.skip_angle_group()?;
            return Ok(TypeExpr::Map(None));
        }

        let mut args = vec![self.parse_union()?];
        while self.eat(&TokenKind::Comma) {
            args.push(self.parse_union()?);
        }
        self.expect(&TokenKind::RAngle)?;

        if name == "Array" {
            return Ok(match <[TypeExpr; 1]>::try_from(args) {
                Ok([element]) => TypeExpr::array(element),
                Err(args) => TypeExpr::Generic { name, args },
            });
        }
        Ok(TypeExpr::Generic { name, args })
    }

    /// Parses `K, V>`; returns `None` when the key is missing.
    fn parse_record_args(&mut self) -> Result<Option<MapArgs>> {
        let Some(key) = self.scan_record_key() else {
            return Ok(None);
        };
        self.expect(&TokenKind::Comma)?;
        let value = self.parse_union()?;
        self.expect(&TokenKind::RAngle)?;
        Ok(Some(MapArgs {
            key,
            value: Box::new(value),
        }))
    }

    /// Consumes the key argument of a `Record` as raw text, stopping before
    /// the separating comma. The key may be any token sequence.
    fn scan_record_key(&mut self) -> Option<String> {
        let start = self.current().span.start;
        let mut end = start;
        let mut depth = 0usize;
        loop {
            let token = self.current().clone();
            match token.kind {
                TokenKind::Comma if depth == 0 => break,
                TokenKind::Eof => return None,
                ref kind if kind.is_open_delimiter() => depth += 1,
                ref kind if kind.is_close_delimiter() => {
                    if depth == 0 {
                        return None;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            end = token.span.end;
            self.advance();
        }
        let key = normalize_source(self.source.get(start..end)?);
        (!key.is_empty()).then_some(key)
    }

    /// Skips a balanced `<...>` group starting at the current `<`.
    fn skip_angle_group(&mut self) -> Result<()> {
        let mut depth = 0usize;
        loop {
            match self.current().kind {
                TokenKind::LAngle => depth += 1,
                TokenKind::RAngle => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.advance();
                        return Ok(());
                    }
                }
                TokenKind::Eof => return Err(self.error("unterminated generic argument list")),
                _ => {}
            }
            self.advance();
        }
    }

    /// Descends `levels` levels, failing past [`MAX_NESTING`].
    fn enter(&mut self, levels: usize) -> Result<()> {
        if self.depth + levels > MAX_NESTING {
            self.too_deep = true;
            return Err(self.error("type expression nested too deeply"));
        }
        self.depth += levels;
        Ok(())
    }

    fn current(&self) -> &Token {
        // The token list always ends with Eof and `pos` never moves past it.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn at(&self, kind: &TokenKind) -> bool {
        &self.current().kind == kind
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.error(&format!(
                "expected {}, found {}",
                kind.name(),
                self.current().kind.name()
            )))
        }
    }

    fn error(&self, message: &str) -> Error {
        let span = self.current().span;
        Error::parse(
            message,
            span.line,
            span.column,
            span.source_line(self.source).to_string(),
        )
    }
}

/// Parses a single type expression.
///
/// # Errors
/// Returns a parse error if `source` is outside the supported grammar.
pub fn parse_type(source: &str) -> Result<TypeExpr> {
    Parser::new(source).parse()
}
