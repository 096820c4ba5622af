use serde_json::{Value, json};

/// Layer filter expression, serialized to the engine's JSON array form.
///
/// Only the combinators the controller emits are modeled; the engine side
/// accepts the full expression language but never hands expressions back.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpr {
    /// `["==", key, value]`
    Eq(String, Value),
    /// `["any", ...]` — matches when any clause matches; empty matches nothing.
    Any(Vec<FilterExpr>),
    /// `["all", ...]` — matches when every clause matches.
    All(Vec<FilterExpr>),
}

impl FilterExpr {
    pub fn eq(key: impl Into<String>, value: impl Into<Value>) -> Self {
        FilterExpr::Eq(key.into(), value.into())
    }

    pub fn to_value(&self) -> Value {
        match self {
            FilterExpr::Eq(key, value) => json!(["==", key, value]),
            FilterExpr::Any(clauses) => combinator("any", clauses),
            FilterExpr::All(clauses) => combinator("all", clauses),
        }
    }
}

fn combinator(op: &str, clauses: &[FilterExpr]) -> Value {
    let mut out = vec![Value::from(op)];
    out.extend(clauses.iter().map(FilterExpr::to_value));
    Value::Array(out)
}
