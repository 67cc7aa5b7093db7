//! Leaf types for the filter expression AST

mod operators;
pub use operators::{ComparisonOp, LogicalOp};

mod values;
pub use values::Value;
