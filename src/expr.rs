//! Filter expression AST with boolean connectors and condition leaves

use std::fmt::Display;

use crate::ast::{ComparisonOp, LogicalOp, Value};
use crate::error::ExprError;

/// A condition leaf: `attribute operator value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub attribute: String,
    pub operator: ComparisonOp,
    pub value: Value,
}

impl Condition {
    pub fn new(
        attribute: impl Into<String>,
        operator: ComparisonOp,
        value: impl Into<Value>,
    ) -> Result<Self, ExprError> {
        let attribute = attribute.into();
        if attribute.is_empty() {
            return Err(ExprError::EmptyAttribute);
        }
        Ok(Condition {
            attribute,
            operator,
            value: value.into(),
        })
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.attribute, self.operator, self.value)
    }
}

/// Boolean filter expression over named attributes.
///
/// Immutable once constructed; builders only ever wrap existing nodes in
/// new parents, so the tree is acyclic by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Leaf comparison against a single attribute
    Condition(Condition),
    /// Binary connective
    Logical {
        left: Box<Expr>,
        operator: LogicalOp,
        right: Box<Expr>,
    },
    /// Unary negation
    Not(Box<Expr>),
}

impl Expr {
    pub fn condition(
        attribute: impl Into<String>,
        operator: ComparisonOp,
        value: impl Into<Value>,
    ) -> Result<Self, ExprError> {
        Condition::new(attribute, operator, value).map(Expr::Condition)
    }

    pub fn logical(left: Self, operator: LogicalOp, right: Self) -> Self {
        Expr::Logical {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn and(left: Self, right: Self) -> Self {
        Self::logical(left, LogicalOp::And, right)
    }

    pub fn or(left: Self, right: Self) -> Self {
        Self::logical(left, LogicalOp::Or, right)
    }

    pub fn not(inner: Self) -> Self {
        Expr::Not(Box::new(inner))
    }

    /// Indented tree diagram, one node per line. Diagnostic output only;
    /// deterministic for identical trees but not guaranteed machine-parseable.
    pub fn to_tree(&self) -> String {
        let mut out = String::new();
        self.tree_into(0, "", &mut out);
        out
    }

    fn tree_into(&self, depth: usize, prefix: &str, out: &mut String) {
        match self {
            Expr::Condition(c) => {
                out.push_str(&format!(
                    "{} └── Condition: {} {} {}\n",
                    prefix,
                    c.attribute,
                    c.operator,
                    c.value.raw_token()
                ));
            }
            Expr::Logical {
                left,
                operator,
                right,
            } => {
                out.push_str(&format!("{} └── {}\n", prefix, operator));
                let child_prefix = format!("{}│   ", prefix);
                left.tree_into(depth + 1, &child_prefix, out);
                right.tree_into(depth + 1, &child_prefix, out);
            }
            Expr::Not(inner) => {
                out.push_str(&format!("{} └── NOT\n", prefix));
                inner.tree_into(depth + 1, &format!("{}    ", prefix), out);
            }
        }
    }

    /// URL-query-safe serialization, usable as a raw filter query-parameter
    /// value. Attribute names are percent-encoded; string values are
    /// single-quoted and then percent-encoded (the quotes travel as `%27`),
    /// so the token decodes unambiguously even when the value contains
    /// reserved URL characters. Numbers and booleans emit their literal
    /// token.
    pub fn to_filter_string(&self) -> String {
        match self {
            Expr::Condition(c) => {
                let value = match &c.value {
                    Value::Str(s) => urlencoding::encode(&format!("'{}'", s)).into_owned(),
                    other => other.raw_token(),
                };
                format!(
                    "{}{}{}",
                    urlencoding::encode(&c.attribute),
                    c.operator,
                    value
                )
            }
            Expr::Logical {
                left,
                operator,
                right,
            } => format!(
                "({} {} {})",
                left.to_filter_string(),
                operator,
                right.to_filter_string()
            ),
            Expr::Not(inner) => format!("NOT({})", inner.to_filter_string()),
        }
    }
}

/// Fully-parenthesized infix rendering.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Condition(c) => write!(f, "{}", c),
            Expr::Logical {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Expr::Not(inner) => write!(f, "NOT ({})", inner),
        }
    }
}
