//! Expression construction strategies
//!
//! Two independent builders over the same node types: [`ChainedBuilder`]
//! folds every step into a left-associated chain, while
//! [`PrecedenceBuilder`] defers combination through operand/operator stacks
//! so AND binds tighter than OR regardless of call order. Callers pick the
//! semantics explicitly; the builders share no state.

mod chained;
pub use chained::{ChainedBuilder, NodeKind, StructuredNode};

mod precedence;
pub use precedence::PrecedenceBuilder;

use crate::ast::{ComparisonOp, Value};
use crate::error::ExprError;
use crate::expr::Expr;

/// Capability set shared by both construction strategies.
pub trait ExpressionBuilder: Sized {
    /// Add a condition leaf. Fails on an empty attribute name.
    fn add_condition(
        self,
        attribute: impl Into<String>,
        operator: ComparisonOp,
        value: impl Into<Value>,
    ) -> Result<Self, ExprError>;

    /// Finish the session and return the built expression.
    fn build(self) -> Result<Expr, ExprError>;
}
