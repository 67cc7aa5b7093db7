//! Left-associated (no-precedence) expression builder

use serde::{Deserialize, Serialize};

use crate::ast::{ComparisonOp, LogicalOp, Value};
use crate::builder::ExpressionBuilder;
use crate::error::ExprError;
use crate::expr::Expr;

/// Builder that folds every step into a single left-associated chain.
///
/// Each `and`/`or` call immediately combines the *entire* expression
/// accumulated so far with one new expression, so this builder cannot
/// express operator precedence: `a AND b OR c` always comes out as
/// `((a AND b) OR c)`. That is its documented contract, not a bug; use
/// [`PrecedenceBuilder`](crate::PrecedenceBuilder) when AND must bind
/// tighter than OR.
#[derive(Debug, Default)]
pub struct ChainedBuilder {
    expr: Option<Expr>,
}

impl ChainedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combine the accumulated expression with an already-built one using AND.
    pub fn and(mut self, expr: Expr) -> Result<Self, ExprError> {
        let base = self
            .expr
            .take()
            .ok_or(ExprError::NoBaseExpression("AND"))?;
        self.expr = Some(Expr::logical(base, LogicalOp::And, expr));
        Ok(self)
    }

    /// Combine the accumulated expression with an already-built one using OR.
    pub fn or(mut self, expr: Expr) -> Result<Self, ExprError> {
        let base = self.expr.take().ok_or(ExprError::NoBaseExpression("OR"))?;
        self.expr = Some(Expr::logical(base, LogicalOp::Or, expr));
        Ok(self)
    }

    /// Negate the entire expression accumulated so far.
    ///
    /// Note the asymmetry with [`PrecedenceBuilder::not`], which negates
    /// only the next condition added.
    pub fn not(mut self) -> Result<Self, ExprError> {
        let base = self
            .expr
            .take()
            .ok_or(ExprError::NoBaseExpression("NOT"))?;
        self.expr = Some(Expr::not(base));
        Ok(self)
    }

    /// Structural mirror of the accumulated AST, for programmatic
    /// introspection (UI tree widgets). `None` when nothing has been
    /// accumulated.
    pub fn structured_tree(&self) -> Option<StructuredNode> {
        self.expr.as_ref().map(StructuredNode::from_expr)
    }
}

impl ExpressionBuilder for ChainedBuilder {
    /// Adds a condition, combining with the accumulated expression via an
    /// implicit AND. The only operation that can start the chain.
    fn add_condition(
        mut self,
        attribute: impl Into<String>,
        operator: ComparisonOp,
        value: impl Into<Value>,
    ) -> Result<Self, ExprError> {
        let condition = Expr::condition(attribute, operator, value)?;
        self.expr = Some(match self.expr.take() {
            Some(base) => Expr::logical(base, LogicalOp::And, condition),
            None => condition,
        });
        Ok(self)
    }

    fn build(self) -> Result<Expr, ExprError> {
        self.expr.ok_or(ExprError::NoExpressionBuilt)
    }
}

/// Node tag for [`StructuredNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Condition,
    Logical,
    Not,
}

/// Plain structural tree mirroring the AST.
///
/// Serializes as `{ "type": ..., "name": ..., "attribute"?, "operator"?,
/// "value"?, "children": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub children: Vec<StructuredNode>,
}

impl StructuredNode {
    pub fn from_expr(expr: &Expr) -> Self {
        match expr {
            Expr::Condition(c) => StructuredNode {
                kind: NodeKind::Condition,
                name: format!("{} {} {}", c.attribute, c.operator, c.value.raw_token()),
                attribute: Some(c.attribute.clone()),
                operator: Some(c.operator.token().to_string()),
                value: Some(c.value.clone()),
                children: vec![],
            },
            Expr::Logical {
                left,
                operator,
                right,
            } => StructuredNode {
                kind: NodeKind::Logical,
                name: format!("({})", operator),
                attribute: None,
                operator: Some(operator.token().to_string()),
                value: None,
                children: vec![Self::from_expr(left), Self::from_expr(right)],
            },
            Expr::Not(inner) => StructuredNode {
                kind: NodeKind::Not,
                name: "NOT".to_string(),
                attribute: None,
                operator: None,
                value: None,
                children: vec![Self::from_expr(inner)],
            },
        }
    }
}
