//! Runtime values for the Tarn interpreter.

use crate::Environment;
use std::fmt;
use std::rc::Rc;
use tarn_ir::{Block, Ident, StringInterner};

/// Runtime value.
///
/// `Return` is a transient wrapper that carries a `return` statement's
/// value out of nested blocks; it is unwrapped at program and call
/// boundaries and never appears in a value position.
#[derive(Clone, Debug)]
pub enum Value {
    /// 64-bit signed integer.
    Int(i64),
    /// Boolean.
    Bool(bool),
    /// The null value; also the result of an `if` with no taken branch.
    Null,
    /// Transient `return` carrier.
    Return(Box<Value>),
    /// Function value (closure).
    Function(FunctionValue),
}

impl Value {
    /// Type name used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "INTEGER",
            Value::Bool(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Return(_) => "RETURN_VALUE",
            Value::Function(_) => "FUNCTION",
        }
    }

    /// Truthiness rule shared by `if` and `!`: exactly `false` and `null`
    /// are falsy; every other value, including `0`, is truthy.
    #[inline]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Null)
    }

    /// Strip one `Return` wrapper, if present.
    ///
    /// Called at the two unwrap points: the end of program evaluation and
    /// the function-call boundary.
    pub fn unwrap_return(self) -> Value {
        match self {
            Value::Return(inner) => *inner,
            other => other,
        }
    }

    /// Human-readable rendering for the REPL.
    pub fn inspect(&self, names: &StringInterner) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),
            Value::Return(inner) => inner.inspect(names),
            Value::Function(func) => {
                let mut out = String::from("fn(");
                for (i, param) in func.params.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(names.resolve(param.name));
                }
                out.push_str(") { ... }");
                out
            }
        }
    }
}

/// Value equality.
///
/// Integers, booleans, and null compare by value; functions compare by
/// identity (two function values are equal only if they came from the
/// same literal evaluation).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Return(a), Value::Return(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }
}

/// Function value: parameters, body, and the environment captured at the
/// definition site (lexical scoping).
#[derive(Clone)]
pub struct FunctionValue {
    pub params: Rc<Vec<Ident>>,
    pub body: Rc<Block>,
    pub env: Environment,
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

// Manual Debug: the captured environment routinely contains the function
// itself (any `let f = fn(...)` does this), so deriving would recurse.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("params", &self.params.len())
            .finish_non_exhaustive()
    }
}
