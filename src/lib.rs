//! Build boolean filter expressions over named attributes and render them
//! as infix strings, indented tree diagrams, or URL-safe query-filter
//! strings.
//!
//! Two construction strategies are provided. [`ChainedBuilder`] folds every
//! call into a left-associated chain; [`PrecedenceBuilder`] defers
//! combination through operand/operator stacks so AND binds tighter than OR
//! regardless of call order:
//!
//! ```
//! use filter_expr::{ComparisonOp, ExpressionBuilder, PrecedenceBuilder};
//!
//! # fn main() -> Result<(), filter_expr::ExprError> {
//! let expr = PrecedenceBuilder::new()
//!     .add_condition("age", ComparisonOp::GreaterThan, 1)?
//!     .and()
//!     .not()
//!     .add_condition("name", ComparisonOp::Equal, "pepe")?
//!     .or()
//!     .add_condition("salary", ComparisonOp::LessThan, true)?
//!     .build()?;
//!
//! assert_eq!(
//!     expr.to_string(),
//!     "((age > 1 AND NOT (name = 'pepe')) OR salary < true)"
//! );
//! assert_eq!(
//!     expr.to_filter_string(),
//!     "((age>1 AND NOT(name=%27pepe%27)) OR salary<true)"
//! );
//! # Ok(()) }
//! ```
//!
//! Expressions are immutable once built; builders only ever wrap existing
//! nodes in new parents. No evaluation, SQL generation, or parsing of
//! filter strings back into trees happens here.

pub mod ast;
mod builder;
mod error;
mod expr;
mod items;
#[cfg(test)]
mod proptest_generators;

pub use ast::{ComparisonOp, LogicalOp, Value};
pub use builder::{
    ChainedBuilder, ExpressionBuilder, NodeKind, PrecedenceBuilder, StructuredNode,
};
pub use error::ExprError;
pub use expr::{Condition, Expr};
pub use items::{build_expr, ConditionItem};
