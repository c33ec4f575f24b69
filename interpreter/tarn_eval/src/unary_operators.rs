//! Unary operator implementations for the evaluator.

use crate::{EvalError, EvalResult, Value};
use tarn_ir::UnaryOp;

/// Evaluate a unary operation.
///
/// `!` applies the shared truthiness rule, so it accepts any operand:
/// `!true == false`, `!null == true`, `!5 == false`. `-` is defined on
/// integers only.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match op {
        UnaryOp::Not => Ok(Value::Bool(!value.is_truthy())),
        UnaryOp::Neg => match value {
            Value::Int(n) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or(EvalError::IntegerOverflow {
                    operation: "negation",
                }),
            other => Err(EvalError::InvalidUnaryOp {
                op: "-",
                operand: other.type_name(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bang_truth_table() {
        assert_eq!(
            evaluate_unary(Value::Bool(true), UnaryOp::Not),
            Ok(Value::Bool(false))
        );
        assert_eq!(
            evaluate_unary(Value::Bool(false), UnaryOp::Not),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            evaluate_unary(Value::Null, UnaryOp::Not),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            evaluate_unary(Value::Int(5), UnaryOp::Not),
            Ok(Value::Bool(false))
        );
        assert_eq!(
            evaluate_unary(Value::Int(0), UnaryOp::Not),
            Ok(Value::Bool(false))
        );
    }

    #[test]
    fn negation_on_integers() {
        assert_eq!(evaluate_unary(Value::Int(5), UnaryOp::Neg), Ok(Value::Int(-5)));
        assert_eq!(evaluate_unary(Value::Int(-5), UnaryOp::Neg), Ok(Value::Int(5)));
    }

    #[test]
    fn negation_rejects_non_integers() {
        assert_eq!(
            evaluate_unary(Value::Bool(true), UnaryOp::Neg),
            Err(EvalError::InvalidUnaryOp {
                op: "-",
                operand: "BOOLEAN"
            })
        );
        assert_eq!(
            evaluate_unary(Value::Null, UnaryOp::Neg),
            Err(EvalError::InvalidUnaryOp {
                op: "-",
                operand: "NULL"
            })
        );
    }

    #[test]
    fn negation_overflow_is_an_error() {
        assert_eq!(
            evaluate_unary(Value::Int(i64::MIN), UnaryOp::Neg),
            Err(EvalError::IntegerOverflow {
                operation: "negation"
            })
        );
    }
}
