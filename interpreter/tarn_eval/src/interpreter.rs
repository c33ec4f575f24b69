//! The tree-walking interpreter.
//!
//! `eval_*` dispatches purely on node kind against the passed-in
//! environment; there is no other mutable state. Runtime failures flow
//! through the `Err` arm with `?`, so the first error produced anywhere
//! short-circuits every enclosing step unchanged. `return` travels in the
//! `Ok` arm as a [`Value::Return`] wrapper: blocks forward it untouched
//! and only the program and call boundaries unwrap it, which is what lets
//! a `return` escape from arbitrarily nested blocks.

use crate::stack::ensure_sufficient_stack;
use crate::{evaluate_binary, evaluate_unary, Environment, EvalError, EvalResult, FunctionValue, Value};
use std::rc::Rc;
use tarn_ir::{Block, Expr, ExprKind, Name, Program, Stmt, StmtKind, StringInterner};

/// Interpreter for a parsed program.
///
/// Holds the session interner for resolving identifier names in error
/// messages; all binding state lives in the caller's [`Environment`].
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
}

impl<'a> Interpreter<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Interpreter { interner }
    }

    /// Evaluate a whole program.
    ///
    /// The result is the last statement's value (`Null` for an empty
    /// program); a `return` anywhere ends evaluation with its unwrapped
    /// value.
    pub fn eval_program(&self, program: &Program, env: &Environment) -> EvalResult {
        let mut result = Value::Null;
        for stmt in &program.stmts {
            match self.eval_stmt(stmt, env)? {
                Value::Return(inner) => return Ok(*inner),
                value => result = value,
            }
        }
        Ok(result)
    }

    /// Evaluate a block.
    ///
    /// A `Return` result propagates still wrapped: unwrapping happens only
    /// at program and call scope, so nested blocks hand an un-triggered
    /// return up through every level in between.
    fn eval_block(&self, block: &Block, env: &Environment) -> EvalResult {
        let mut result = Value::Null;
        for stmt in &block.stmts {
            let value = self.eval_stmt(stmt, env)?;
            if matches!(value, Value::Return(_)) {
                return Ok(value);
            }
            result = value;
        }
        Ok(result)
    }

    fn eval_stmt(&self, stmt: &Stmt, env: &Environment) -> EvalResult {
        match &stmt.kind {
            StmtKind::Let { name, value } => {
                let value = self.eval_expr(value, env)?;
                Ok(env.set(name.name, value))
            }
            StmtKind::Return { value } => {
                let value = self.eval_expr(value, env)?;
                Ok(Value::Return(Box::new(value)))
            }
            StmtKind::Expr(expr) => self.eval_expr(expr, env),
        }
    }

    /// Evaluate an expression.
    ///
    /// Uses `ensure_sufficient_stack`: recursion depth tracks AST nesting
    /// and call depth, both user-controlled.
    fn eval_expr(&self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
    }

    fn eval_expr_inner(&self, expr: &Expr, env: &Environment) -> EvalResult {
        match &expr.kind {
            ExprKind::Ident(name) => self.eval_ident(*name, env),
            ExprKind::Int(value) => Ok(Value::Int(*value)),
            ExprKind::Bool(value) => Ok(Value::Bool(*value)),
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(operand, env)?;
                evaluate_unary(operand, *op)
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                evaluate_binary(left, right, *op)
            }
            ExprKind::If {
                cond,
                then_block,
                else_block,
            } => {
                let cond = self.eval_expr(cond, env)?;
                if cond.is_truthy() {
                    self.eval_block(then_block, env)
                } else if let Some(alt) = else_block {
                    self.eval_block(alt, env)
                } else {
                    Ok(Value::Null)
                }
            }
            ExprKind::Function { params, body } => Ok(Value::Function(FunctionValue {
                params: Rc::new(params.clone()),
                body: Rc::new(body.clone()),
                env: env.clone(),
            })),
            ExprKind::Call { callee, args } => {
                let callee = self.eval_expr(callee, env)?;
                let mut arg_values = Vec::with_capacity(args.len());
                for arg in args {
                    arg_values.push(self.eval_expr(arg, env)?);
                }
                self.apply_function(callee, arg_values)
            }
        }
    }

    fn eval_ident(&self, name: Name, env: &Environment) -> EvalResult {
        env.get(name)
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: self.interner.resolve(name).to_string(),
            })
    }

    /// Apply a function value to evaluated arguments.
    ///
    /// The body runs in a fresh scope enclosed by the closure's captured
    /// environment; a `return` from the body unwraps here, at the call
    /// boundary.
    fn apply_function(&self, callee: Value, args: Vec<Value>) -> EvalResult {
        match callee {
            Value::Function(func) => {
                if func.params.len() != args.len() {
                    return Err(EvalError::ArityMismatch {
                        expected: func.params.len(),
                        got: args.len(),
                    });
                }

                let local = Environment::enclosed(&func.env);
                for (param, arg) in func.params.iter().zip(args) {
                    local.set(param.name, arg);
                }

                let result = self.eval_block(&func.body, &local)?;
                Ok(result.unwrap_return())
            }
            other => Err(EvalError::NotCallable {
                type_name: other.type_name(),
            }),
        }
    }
}

/// Evaluate a program against an environment.
///
/// Convenience entry point wrapping [`Interpreter`].
pub fn eval(program: &Program, env: &Environment, interner: &StringInterner) -> EvalResult {
    Interpreter::new(interner).eval_program(program, env)
}
