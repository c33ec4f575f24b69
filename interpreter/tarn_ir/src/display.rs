//! Canonical source printer.
//!
//! Renders any node back to parseable source text. Expressions come out
//! fully parenthesized (`-a * b` renders as `((-a) * b)`), which makes
//! operator binding visible in tests and gives the renderer a stable
//! fixed point: parsing a rendering and re-rendering is byte-identical.

use crate::ast::{Block, Expr, ExprKind, Program, Stmt, StmtKind};
use crate::StringInterner;

/// Render a whole program, statements separated by single spaces.
pub fn render_program(program: &Program, names: &StringInterner) -> String {
    let mut p = Printer::new(names);
    for (i, stmt) in program.stmts.iter().enumerate() {
        if i > 0 {
            p.out.push(' ');
        }
        p.stmt(stmt);
    }
    p.out
}

/// Render a single statement.
pub fn render_stmt(stmt: &Stmt, names: &StringInterner) -> String {
    let mut p = Printer::new(names);
    p.stmt(stmt);
    p.out
}

/// Render a single expression.
pub fn render_expr(expr: &Expr, names: &StringInterner) -> String {
    let mut p = Printer::new(names);
    p.expr(expr);
    p.out
}

struct Printer<'a> {
    names: &'a StringInterner,
    out: String,
}

impl<'a> Printer<'a> {
    fn new(names: &'a StringInterner) -> Self {
        Printer {
            names,
            out: String::new(),
        }
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Let { name, value } => {
                self.out.push_str("let ");
                self.out.push_str(self.names.resolve(name.name));
                self.out.push_str(" = ");
                self.expr(value);
                self.out.push(';');
            }
            StmtKind::Return { value } => {
                self.out.push_str("return ");
                self.expr(value);
                self.out.push(';');
            }
            StmtKind::Expr(expr) => {
                self.expr(expr);
                self.out.push(';');
            }
        }
    }

    fn block(&mut self, block: &Block) {
        if block.stmts.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push_str("{ ");
        for (i, stmt) in block.stmts.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            self.stmt(stmt);
        }
        self.out.push_str(" }");
    }

    fn expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Ident(name) => self.out.push_str(self.names.resolve(*name)),
            ExprKind::Int(value) => {
                self.out.push_str(&value.to_string());
            }
            ExprKind::Bool(value) => self.out.push_str(if *value { "true" } else { "false" }),
            ExprKind::Unary { op, operand } => {
                self.out.push('(');
                self.out.push_str(op.as_symbol());
                self.expr(operand);
                self.out.push(')');
            }
            ExprKind::Binary { op, left, right } => {
                self.out.push('(');
                self.expr(left);
                self.out.push(' ');
                self.out.push_str(op.as_symbol());
                self.out.push(' ');
                self.expr(right);
                self.out.push(')');
            }
            ExprKind::If {
                cond,
                then_block,
                else_block,
            } => {
                self.out.push_str("if (");
                self.expr(cond);
                self.out.push_str(") ");
                self.block(then_block);
                if let Some(alt) = else_block {
                    self.out.push_str(" else ");
                    self.block(alt);
                }
            }
            ExprKind::Function { params, body } => {
                self.out.push_str("fn(");
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.out.push_str(self.names.resolve(param.name));
                }
                self.out.push_str(") ");
                self.block(body);
            }
            ExprKind::Call { callee, args } => {
                self.expr(callee);
                self.out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.expr(arg);
                }
                self.out.push(')');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, Ident, UnaryOp};
    use crate::Span;
    use pretty_assertions::assert_eq;

    fn expr(kind: ExprKind) -> Expr {
        Expr::new(kind, Span::DUMMY)
    }

    fn boxed(kind: ExprKind) -> Box<Expr> {
        Box::new(expr(kind))
    }

    #[test]
    fn renders_let_statement() {
        let names = StringInterner::new();
        let x = names.intern("x");
        let stmt = Stmt::new(
            StmtKind::Let {
                name: Ident::new(x, Span::DUMMY),
                value: expr(ExprKind::Int(5)),
            },
            Span::DUMMY,
        );
        assert_eq!(render_stmt(&stmt, &names), "let x = 5;");
    }

    #[test]
    fn renders_unary_inside_binary() {
        let names = StringInterner::new();
        let a = names.intern("a");
        let b = names.intern("b");
        // -a * b
        let tree = expr(ExprKind::Binary {
            op: BinaryOp::Mul,
            left: boxed(ExprKind::Unary {
                op: UnaryOp::Neg,
                operand: boxed(ExprKind::Ident(a)),
            }),
            right: boxed(ExprKind::Ident(b)),
        });
        assert_eq!(render_expr(&tree, &names), "((-a) * b)");
    }

    #[test]
    fn renders_if_with_else() {
        let names = StringInterner::new();
        let x = names.intern("x");
        let tree = expr(ExprKind::If {
            cond: boxed(ExprKind::Bool(true)),
            then_block: Block {
                stmts: vec![Stmt::new(
                    StmtKind::Expr(expr(ExprKind::Ident(x))),
                    Span::DUMMY,
                )],
                span: Span::DUMMY,
            },
            else_block: Some(Block {
                stmts: Vec::new(),
                span: Span::DUMMY,
            }),
        });
        assert_eq!(render_expr(&tree, &names), "if (true) { x; } else {}");
    }

    #[test]
    fn renders_function_and_call() {
        let names = StringInterner::new();
        let add = names.intern("add");
        let x = names.intern("x");
        let y = names.intern("y");
        let func = expr(ExprKind::Function {
            params: vec![Ident::new(x, Span::DUMMY), Ident::new(y, Span::DUMMY)],
            body: Block {
                stmts: vec![Stmt::new(
                    StmtKind::Expr(expr(ExprKind::Binary {
                        op: BinaryOp::Add,
                        left: boxed(ExprKind::Ident(x)),
                        right: boxed(ExprKind::Ident(y)),
                    })),
                    Span::DUMMY,
                )],
                span: Span::DUMMY,
            },
        });
        assert_eq!(render_expr(&func, &names), "fn(x, y) { (x + y); }");

        let call = expr(ExprKind::Call {
            callee: boxed(ExprKind::Ident(add)),
            args: vec![expr(ExprKind::Int(1)), expr(ExprKind::Int(2))],
        });
        assert_eq!(render_expr(&call, &names), "add(1, 2)");
    }

    #[test]
    fn renders_program_with_spaces_between_statements() {
        let names = StringInterner::new();
        let x = names.intern("x");
        let program = Program {
            stmts: vec![
                Stmt::new(
                    StmtKind::Let {
                        name: Ident::new(x, Span::DUMMY),
                        value: expr(ExprKind::Int(5)),
                    },
                    Span::DUMMY,
                ),
                Stmt::new(StmtKind::Expr(expr(ExprKind::Ident(x))), Span::DUMMY),
            ],
        };
        assert_eq!(render_program(&program, &names), "let x = 5; x;");
    }
}
