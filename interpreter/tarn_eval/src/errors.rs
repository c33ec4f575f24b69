//! Evaluation errors.
//!
//! Every runtime failure is a first-class error value: once produced it
//! propagates unchanged through every enclosing evaluation step via the
//! `Err` arm of [`EvalResult`] and surfaces to the host exactly like a
//! normal value, rendered as `ERROR: <message>`. There is no fatal tier
//! and nothing is thrown.

use thiserror::Error;

/// Result of evaluation.
pub type EvalResult = Result<crate::Value, EvalError>;

/// Typed evaluation error.
///
/// Variants carry structured data; `Display` produces the exact message
/// grammar the REPL shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An identifier with no binding in any reachable scope.
    #[error("identifier not found: {name}")]
    UndefinedVariable { name: String },

    /// Infix operands of two different types.
    #[error("type mismatch: {left} {op} {right}")]
    BinaryTypeMismatch {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },

    /// Prefix operator applied to an unsupported operand type.
    #[error("unknown operator: {op}{operand}")]
    InvalidUnaryOp {
        op: &'static str,
        operand: &'static str,
    },

    /// Infix operator undefined for matching operand types.
    #[error("unknown operator: {left} {op} {right}")]
    InvalidBinaryOp {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },

    /// Integer division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Arithmetic result outside the i64 range.
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    /// Call applied to a non-function value.
    #[error("not a function: {type_name}")]
    NotCallable { type_name: &'static str },

    /// Call with the wrong number of arguments.
    #[error("wrong number of arguments: expected {expected}, got {got}")]
    ArityMismatch { expected: usize, got: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_documented_grammar() {
        assert_eq!(
            EvalError::UndefinedVariable {
                name: "foobar".to_string()
            }
            .to_string(),
            "identifier not found: foobar"
        );
        assert_eq!(
            EvalError::BinaryTypeMismatch {
                left: "INTEGER",
                op: "+",
                right: "BOOLEAN"
            }
            .to_string(),
            "type mismatch: INTEGER + BOOLEAN"
        );
        assert_eq!(
            EvalError::InvalidUnaryOp {
                op: "-",
                operand: "BOOLEAN"
            }
            .to_string(),
            "unknown operator: -BOOLEAN"
        );
        assert_eq!(
            EvalError::InvalidBinaryOp {
                left: "BOOLEAN",
                op: "+",
                right: "BOOLEAN"
            }
            .to_string(),
            "unknown operator: BOOLEAN + BOOLEAN"
        );
        assert_eq!(EvalError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            EvalError::IntegerOverflow {
                operation: "addition"
            }
            .to_string(),
            "integer overflow in addition"
        );
        assert_eq!(
            EvalError::NotCallable {
                type_name: "INTEGER"
            }
            .to_string(),
            "not a function: INTEGER"
        );
        assert_eq!(
            EvalError::ArityMismatch {
                expected: 2,
                got: 1
            }
            .to_string(),
            "wrong number of arguments: expected 2, got 1"
        );
    }
}
