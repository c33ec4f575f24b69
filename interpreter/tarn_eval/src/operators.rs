//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the type set is fixed, so pattern matching
//! is preferred over trait objects and the compiler checks every operator
//! and type combination is handled.

use crate::{EvalError, EvalResult, Value};
use tarn_ir::BinaryOp;

/// Evaluate a binary operation.
///
/// Both integers → arithmetic/comparison on the raw i64s. Differing types
/// → type mismatch. Matching non-integer types support only `==`/`!=`,
/// which compare by value for booleans/null and by identity for
/// functions.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        _ if left.type_name() != right.type_name() => Err(EvalError::BinaryTypeMismatch {
            left: left.type_name(),
            op: op.as_symbol(),
            right: right.type_name(),
        }),
        _ => match op {
            BinaryOp::Eq => Ok(Value::Bool(left == right)),
            BinaryOp::NotEq => Ok(Value::Bool(left != right)),
            _ => Err(EvalError::InvalidBinaryOp {
                left: left.type_name(),
                op: op.as_symbol(),
                right: right.type_name(),
            }),
        },
    }
}

/// Binary operations on integers.
///
/// All arithmetic is checked: overflow and division by zero come back as
/// recoverable errors, never as a host trap.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                checked_arith(a.checked_div(b), "division")
            }
        }
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
    }
}

/// Checked arithmetic with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, operation: &'static str) -> EvalResult {
    result
        .map(Value::Int)
        .ok_or(EvalError::IntegerOverflow { operation })
}
