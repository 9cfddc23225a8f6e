//! Evaluating validators against JSON values.
//!
//! This mirrors what the emitted Zod code accepts at runtime, for the subset
//! of values JSON can express. An absent property is passed as `None`.
//!
//! JSON has no dates or big integers, so `Date` accepts strings and
//! `bigint` accepts integral numbers.

use serde_json::Value;

use crate::assembler::Program;
use crate::validator::{ObjectSchema, Validator};

/// Maximum evaluation depth, counting both nested validators and followed
/// references. Deeper values are rejected.
const MAX_DEPTH: usize = 512;

/// Resolves declaration names to their validators.
pub trait SchemaLookup {
    /// Returns the validator emitted for `name`, if any.
    fn schema(&self, name: &str) -> Option<&Validator>;
}

impl SchemaLookup for Program {
    fn schema(&self, name: &str) -> Option<&Validator> {
        self.get(name).map(|item| &item.validator)
    }
}

/// A lookup with no declarations.
impl SchemaLookup for () {
    fn schema(&self, _name: &str) -> Option<&Validator> {
        None
    }
}

impl Validator {
    /// Returns true if this validator accepts `value`.
    ///
    /// References are resolved through `schemas`; unknown references reject.
    #[must_use]
    pub fn accepts(&self, value: Option<&Value>, schemas: &dyn SchemaLookup) -> bool {
        self.accepts_at(value, schemas, 0)
    }

    fn accepts_at(&self, value: Option<&Value>, schemas: &dyn SchemaLookup, depth: usize) -> bool {
        let depth = depth + 1;
        if depth > MAX_DEPTH {
            return false;
        }
        match self {
            Self::Optional(inner) => value.is_none() || inner.accepts_at(value, schemas, depth),
            Self::Described { inner, .. } => inner.accepts_at(value, schemas, depth),
            Self::Unresolved(_) => true,
            Self::Primitive(p) => accepts_primitive(*p, value),
            Self::Reference(name) => schemas
                .schema(name)
                .is_some_and(|v| v.accepts_at(value, schemas, depth)),
            Self::Union(branches) => branches
                .iter()
                .any(|branch| branch.accepts_at(value, schemas, depth)),
            Self::Literal(lit) => {
                matches!(value, Some(Value::String(s)) if *s == unescape(&lit.value))
            }
            Self::Enum(values) => {
                matches!(value, Some(Value::String(s)) if values.iter().any(|v| unescape(v) == *s))
            }
            Self::Array(element) => match value {
                Some(Value::Array(items)) => items
                    .iter()
                    .all(|item| element.accepts_at(Some(item), schemas, depth)),
                _ => false,
            },
            Self::Record(element) => match value {
                Some(Value::Object(map)) => map
                    .values()
                    .all(|item| element.accepts_at(Some(item), schemas, depth)),
                _ => false,
            },
            Self::Object(object) => object.accepts_at(value, schemas, depth),
        }
    }
}

impl ObjectSchema {
    /// Unknown properties are allowed; every base must accept the value too.
    fn accepts_at(&self, value: Option<&Value>, schemas: &dyn SchemaLookup, depth: usize) -> bool {
        let Some(Value::Object(map)) = value else {
            return false;
        };
        let bases_accept = self.extends.iter().all(|base| {
            schemas
                .schema(base)
                .is_some_and(|v| v.accepts_at(value, schemas, depth))
        });
        bases_accept
            && self
                .fields
                .iter()
                .all(|field| {
                    let value = map.get(&unescape(&field.name));
                    field.validator.accepts_at(value, schemas, depth)
                })
    }
}

fn accepts_primitive(primitive: zodgen_foundation::Primitive, value: Option<&Value>) -> bool {
    use zodgen_foundation::Primitive as P;
    match (primitive, value) {
        (P::Any | P::Unknown, _)
        | (P::Undefined | P::Void, None)
        | (P::String | P::Date, Some(Value::String(_)))
        | (P::Boolean, Some(Value::Bool(_)))
        | (P::Number, Some(Value::Number(_)))
        | (P::Null, Some(Value::Null)) => true,
        (P::BigInt, Some(Value::Number(n))) => n.is_i64() || n.is_u64(),
        _ => false,
    }
}

/// Resolves backslash escapes in raw string-literal text.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
