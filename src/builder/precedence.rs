//! Precedence-aware expression builder

use crate::ast::{ComparisonOp, LogicalOp, Value};
use crate::builder::ExpressionBuilder;
use crate::error::ExprError;
use crate::expr::Expr;

/// Builder that honors conventional operator precedence (AND binds tighter
/// than OR) regardless of call order.
///
/// Combination is deferred through an operand stack and an operator stack,
/// reduced with the operator-precedence algorithm: `and` reduces pending
/// runs of equal-or-tighter operators before pushing (left-associativity),
/// `or` drains everything pending first (nothing may stay deferred behind
/// the lowest-precedence connector). Ties resolve left-to-right.
#[derive(Debug, Default)]
pub struct PrecedenceBuilder {
    operands: Vec<Expr>,
    operators: Vec<LogicalOp>,
    pending_not: bool,
}

impl PrecedenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Negate the *next* condition added.
    ///
    /// Prefix scope only: the flag never attaches to an already-combined
    /// expression. Note the asymmetry with
    /// [`ChainedBuilder::not`](crate::ChainedBuilder::not), which negates
    /// everything accumulated so far.
    pub fn not(mut self) -> Self {
        self.pending_not = true;
        self
    }

    /// Push AND, first reducing any pending run of equal-or-tighter
    /// operators so consecutive ANDs stay left-associated.
    pub fn and(mut self) -> Self {
        while self
            .operators
            .last()
            .is_some_and(|top| top.precedence() >= LogicalOp::And.precedence())
        {
            if !self.reduce() {
                break;
            }
        }
        self.operators.push(LogicalOp::And);
        self
    }

    /// Push OR, first draining the whole operator stack: OR is the lowest
    /// precedence, so every pending AND must bind before it.
    pub fn or(mut self) -> Self {
        while !self.operators.is_empty() {
            if !self.reduce() {
                break;
            }
        }
        self.operators.push(LogicalOp::Or);
        self
    }

    /// Pop the two most recent operands and the most recent operator and
    /// push the combined node back. First pop is the right operand, second
    /// the left. Returns false when the stacks cannot supply a reduction.
    fn reduce(&mut self) -> bool {
        if self.operands.len() < 2 || self.operators.is_empty() {
            return false;
        }
        let right = self.operands.pop();
        let left = self.operands.pop();
        let operator = self.operators.pop();
        if let (Some(left), Some(right), Some(operator)) = (left, right, operator) {
            self.operands.push(Expr::logical(left, operator, right));
        }
        true
    }
}

impl ExpressionBuilder for PrecedenceBuilder {
    /// Push a condition onto the operand stack, consuming a pending NOT.
    fn add_condition(
        mut self,
        attribute: impl Into<String>,
        operator: ComparisonOp,
        value: impl Into<Value>,
    ) -> Result<Self, ExprError> {
        let mut condition = Expr::condition(attribute, operator, value)?;
        if self.pending_not {
            condition = Expr::not(condition);
            self.pending_not = false;
        }
        self.operands.push(condition);
        Ok(self)
    }

    /// Drain the operator stack; exactly one operand must remain.
    fn build(mut self) -> Result<Expr, ExprError> {
        while !self.operators.is_empty() {
            if !self.reduce() {
                break;
            }
        }
        if self.operands.is_empty() && self.operators.is_empty() && !self.pending_not {
            return Err(ExprError::NoExpressionBuilt);
        }
        match self.operands.pop() {
            Some(expr) if self.operands.is_empty() && self.operators.is_empty() => Ok(expr),
            _ => Err(ExprError::InvalidStructure),
        }
    }
}
