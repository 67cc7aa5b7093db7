//! Row model for filter-building UIs

use serde::{Deserialize, Serialize};

use crate::ast::{ComparisonOp, LogicalOp, Value};
use crate::builder::{ExpressionBuilder, PrecedenceBuilder};
use crate::error::ExprError;
use crate::expr::Expr;

/// One row of a filter form: a condition plus the connector joining it to
/// the row below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionItem {
    pub field: String,
    pub operator: ComparisonOp,
    pub value: Value,
    /// Connector to the NEXT row; `None` defaults to AND. Ignored on the
    /// last row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector: Option<LogicalOp>,
}

/// Fold an ordered row list into an expression, honoring operator
/// precedence (AND binds tighter than OR).
pub fn build_expr(items: &[ConditionItem]) -> Result<Expr, ExprError> {
    let mut builder = PrecedenceBuilder::new();
    for (i, item) in items.iter().enumerate() {
        builder = builder.add_condition(item.field.clone(), item.operator, item.value.clone())?;
        if i + 1 < items.len() {
            builder = match item.connector.unwrap_or(LogicalOp::And) {
                LogicalOp::And => builder.and(),
                LogicalOp::Or => builder.or(),
            };
        }
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(field: &str, value: impl Into<Value>, connector: Option<LogicalOp>) -> ConditionItem {
        ConditionItem {
            field: field.to_string(),
            operator: ComparisonOp::Equal,
            value: value.into(),
            connector,
        }
    }

    #[test]
    fn empty_row_list_fails() {
        assert_eq!(build_expr(&[]).unwrap_err(), ExprError::NoExpressionBuilt);
    }

    #[test]
    fn single_row() {
        let expr = build_expr(&[item("a", 1, None)]).unwrap();
        assert_eq!(expr.to_string(), "a = 1");
    }

    #[test]
    fn connectors_fold_with_precedence() {
        let rows = [
            item("a", 1, Some(LogicalOp::And)),
            item("b", 2, Some(LogicalOp::Or)),
            item("c", 3, None),
        ];
        let expr = build_expr(&rows).unwrap();
        assert_eq!(expr.to_string(), "((a = 1 AND b = 2) OR c = 3)");
    }

    #[test]
    fn missing_connector_defaults_to_and() {
        let rows = [item("a", 1, None), item("b", 2, None)];
        let expr = build_expr(&rows).unwrap();
        assert_eq!(expr.to_string(), "(a = 1 AND b = 2)");
    }

    #[test]
    fn trailing_connector_is_ignored() {
        let rows = [item("a", 1, Some(LogicalOp::Or)), item("b", 2, Some(LogicalOp::Or))];
        let expr = build_expr(&rows).unwrap();
        assert_eq!(expr.to_string(), "(a = 1 OR b = 2)");
    }

    #[test]
    fn rows_round_trip_through_json() {
        let rows = vec![
            item("age", 30, Some(LogicalOp::Or)),
            item("name", "pepe", None),
        ];
        let json = serde_json::to_string(&rows).unwrap();
        let back: Vec<ConditionItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rows);
    }
}
