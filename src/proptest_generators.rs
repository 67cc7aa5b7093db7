#[cfg(test)]
mod tests {
    use crate::ast::{ComparisonOp, LogicalOp, Value};
    use crate::builder::{ChainedBuilder, ExpressionBuilder, PrecedenceBuilder};
    use crate::expr::Expr;
    use proptest::prelude::*;

    // Strategy for attribute names (non-empty by construction)
    fn arb_attribute() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,8}"
    }

    // Strategy for string values, including reserved URL characters
    fn arb_string_value() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 _.&/='+?#-]{0,12}"
    }

    fn arb_comparison_op() -> impl Strategy<Value = ComparisonOp> {
        prop_oneof![
            Just(ComparisonOp::Equal),
            Just(ComparisonOp::NotEqual),
            Just(ComparisonOp::GreaterThan),
            Just(ComparisonOp::GreaterThanOrEqual),
            Just(ComparisonOp::LessThan),
            Just(ComparisonOp::LessThanOrEqual),
        ]
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            arb_string_value().prop_map(Value::Str),
            any::<i32>().prop_map(|n| Value::Num(n as f64)),
            any::<bool>().prop_map(Value::Bool),
        ]
    }

    fn arb_condition() -> impl Strategy<Value = Expr> {
        (arb_attribute(), arb_comparison_op(), arb_value())
            .prop_map(|(attr, op, value)| Expr::condition(attr, op, value).unwrap())
    }

    // Strategy for arbitrary expression trees
    fn arb_expr() -> impl Strategy<Value = Expr> {
        arb_condition().prop_recursive(4, 24, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::and(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::or(l, r)),
                inner.prop_map(Expr::not),
            ]
        })
    }

    // One step of a builder call script: condition parts, prefix-NOT flag,
    // and the connector joining it to the previous step
    type ScriptStep = (String, ComparisonOp, Value, bool, bool);

    fn arb_script() -> impl Strategy<Value = Vec<ScriptStep>> {
        prop::collection::vec(
            (
                arb_attribute(),
                arb_comparison_op(),
                arb_value(),
                any::<bool>(),
                any::<bool>(),
            ),
            1..8,
        )
    }

    proptest! {
        #[test]
        fn rendering_is_idempotent(expr in arb_expr()) {
            prop_assert_eq!(expr.to_string(), expr.to_string());
            prop_assert_eq!(expr.to_tree(), expr.to_tree());
            prop_assert_eq!(expr.to_filter_string(), expr.to_filter_string());
        }

        #[test]
        fn filter_string_value_round_trips(attr in arb_attribute(), s in arb_string_value()) {
            let expr = Expr::condition(attr.clone(), ComparisonOp::Equal, s.clone()).unwrap();
            let filter = expr.to_filter_string();
            let token = filter
                .strip_prefix(&format!("{}=", urlencoding::encode(&attr)))
                .unwrap();
            let decoded = urlencoding::decode(token).unwrap();
            prop_assert_eq!(decoded.into_owned(), format!("'{}'", s));
        }

        // Any well-formed alternating condition/connector script reduces
        // to a single root
        #[test]
        fn well_formed_scripts_always_build(script in arb_script()) {
            let mut builder = PrecedenceBuilder::new();
            for (i, (attr, op, value, negate, conn_is_and)) in script.iter().enumerate() {
                if i > 0 {
                    builder = if *conn_is_and { builder.and() } else { builder.or() };
                }
                if *negate {
                    builder = builder.not();
                }
                builder = builder.add_condition(attr.clone(), *op, value.clone()).unwrap();
            }
            let expr = builder.build().unwrap();
            // balanced parens fall out of a single well-formed root
            let rendered = expr.to_string();
            let opens = rendered.matches('(').count();
            let closes = rendered.matches(')').count();
            prop_assert_eq!(opens, closes);
        }

        // With only AND connectors the two strategies agree exactly
        #[test]
        fn pure_and_chains_agree_across_builders(
            conditions in prop::collection::vec((arb_attribute(), arb_comparison_op(), arb_value()), 1..6)
        ) {
            let mut chained = ChainedBuilder::new();
            let mut precedence = PrecedenceBuilder::new();
            for (i, (attr, op, value)) in conditions.iter().enumerate() {
                chained = chained.add_condition(attr.clone(), *op, value.clone()).unwrap();
                if i > 0 {
                    precedence = precedence.and();
                }
                precedence = precedence.add_condition(attr.clone(), *op, value.clone()).unwrap();
            }
            prop_assert_eq!(chained.build().unwrap(), precedence.build().unwrap());
        }
    }
}
