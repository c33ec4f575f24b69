//! Parser tests.
//!
//! Structural assertions go through the AST; operator-binding assertions
//! go through the canonical printer, which renders expressions fully
//! parenthesized and so makes precedence directly visible.

use crate::{parse, ParseResult};
use pretty_assertions::assert_eq;
use tarn_ir::display::render_program;
use tarn_ir::{ExprKind, StmtKind, StringInterner};

fn parse_source(source: &str, interner: &StringInterner) -> ParseResult {
    let (tokens, lex_errors) = tarn_lexer::lex(source, interner);
    assert!(lex_errors.is_empty(), "unexpected lex errors: {lex_errors:?}");
    parse(&tokens, interner)
}

/// Parse without errors and hand back the canonical rendering.
fn rendered(source: &str) -> String {
    let interner = StringInterner::new();
    let result = parse_source(source, &interner);
    assert!(
        !result.has_errors(),
        "unexpected parse errors for {source:?}: {:?}",
        result.errors
    );
    render_program(&result.program, &interner)
}

fn error_messages(source: &str) -> Vec<String> {
    let interner = StringInterner::new();
    let result = parse_source(source, &interner);
    result.errors.iter().map(|e| e.message.clone()).collect()
}

#[test]
fn let_statement_structure() {
    let interner = StringInterner::new();
    let result = parse_source("let x = 5;", &interner);
    assert!(!result.has_errors());
    assert_eq!(result.program.stmts.len(), 1);

    let StmtKind::Let { name, value } = &result.program.stmts[0].kind else {
        panic!("expected let statement, got {:?}", result.program.stmts[0]);
    };
    assert_eq!(interner.resolve(name.name), "x");
    assert_eq!(value.kind, ExprKind::Int(5));
}

#[test]
fn return_statement_structure() {
    let interner = StringInterner::new();
    let result = parse_source("return 10;", &interner);
    assert!(!result.has_errors());

    let StmtKind::Return { value } = &result.program.stmts[0].kind else {
        panic!("expected return statement");
    };
    assert_eq!(value.kind, ExprKind::Int(10));
}

#[test]
fn trailing_semicolon_is_optional() {
    let interner = StringInterner::new();
    let result = parse_source("let x = 5", &interner);
    assert!(!result.has_errors());
    assert_eq!(result.program.stmts.len(), 1);

    let result = parse_source("5 + 5", &interner);
    assert!(!result.has_errors());
}

#[test]
fn if_expression_structure() {
    let interner = StringInterner::new();
    let result = parse_source("if (x < y) { x }", &interner);
    assert!(!result.has_errors());

    let StmtKind::Expr(expr) = &result.program.stmts[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::If {
        cond,
        then_block,
        else_block,
    } = &expr.kind
    else {
        panic!("expected if expression, got {expr:?}");
    };
    assert!(matches!(cond.kind, ExprKind::Binary { .. }));
    assert_eq!(then_block.stmts.len(), 1);
    assert!(else_block.is_none());
}

#[test]
fn if_else_expression_structure() {
    let interner = StringInterner::new();
    let result = parse_source("if (x < y) { x } else { y }", &interner);
    assert!(!result.has_errors());

    let StmtKind::Expr(expr) = &result.program.stmts[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::If { else_block, .. } = &expr.kind else {
        panic!("expected if expression");
    };
    assert!(else_block.is_some());
}

#[test]
fn function_literal_structure() {
    let interner = StringInterner::new();
    let result = parse_source("fn(x, y) { x + y; }", &interner);
    assert!(!result.has_errors());

    let StmtKind::Expr(expr) = &result.program.stmts[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Function { params, body } = &expr.kind else {
        panic!("expected function literal, got {expr:?}");
    };
    let names: Vec<&str> = params.iter().map(|p| interner.resolve(p.name)).collect();
    assert_eq!(names, vec!["x", "y"]);
    assert_eq!(body.stmts.len(), 1);
}

#[test]
fn function_parameter_lists() {
    assert_eq!(rendered("fn() {};"), "fn() {};");
    assert_eq!(rendered("fn(x) {};"), "fn(x) {};");
    assert_eq!(rendered("fn(x, y, z) {};"), "fn(x, y, z) {};");
}

#[test]
fn call_expression_structure() {
    let interner = StringInterner::new();
    let result = parse_source("add(1, 2 * 3, 4 + 5);", &interner);
    assert!(!result.has_errors());

    let StmtKind::Expr(expr) = &result.program.stmts[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Call { callee, args } = &expr.kind else {
        panic!("expected call expression, got {expr:?}");
    };
    assert!(matches!(callee.kind, ExprKind::Ident(_)));
    assert_eq!(args.len(), 3);
}

#[test]
fn operator_precedence_table() {
    let cases = [
        ("-a * b", "((-a) * b);"),
        ("!-a", "(!(-a));"),
        ("a + b + c", "((a + b) + c);"),
        ("a + b - c", "((a + b) - c);"),
        ("a * b * c", "((a * b) * c);"),
        ("a * b / c", "((a * b) / c);"),
        ("a + b / c", "(a + (b / c));"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f);"),
        ("3 + 4; -5 * 5", "(3 + 4); ((-5) * 5);"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4));"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4));"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)));",
        ),
        ("true", "true;"),
        ("false", "false;"),
        ("3 > 5 == false", "((3 > 5) == false);"),
        ("3 < 5 == true", "((3 < 5) == true);"),
    ];
    for (source, expected) in cases {
        assert_eq!(rendered(source), expected, "source: {source:?}");
    }
}

#[test]
fn grouping_overrides_precedence() {
    let cases = [
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4);"),
        ("(5 + 5) * 2", "((5 + 5) * 2);"),
        ("2 / (5 + 5)", "(2 / (5 + 5));"),
        ("-(5 + 5)", "(-(5 + 5));"),
        ("!(true == true)", "(!(true == true));"),
    ];
    for (source, expected) in cases {
        assert_eq!(rendered(source), expected, "source: {source:?}");
    }
}

#[test]
fn call_binds_tightest() {
    let cases = [
        ("a + add(b * c) + d", "((a + add((b * c))) + d);"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)));",
        ),
        (
            "add(a + b + c * d / f + g)",
            "add((((a + b) + ((c * d) / f)) + g));",
        ),
        ("f(1)(2)", "f(1)(2);"),
        ("-f(x)", "(-f(x));"),
    ];
    for (source, expected) in cases {
        assert_eq!(rendered(source), expected, "source: {source:?}");
    }
}

#[test]
fn rendering_is_a_fixed_point() {
    let sources = [
        "let x = a + b * c + d / e - f;",
        "if (x < y) { let z = x; return z; } else { y; }",
        "let adder = fn(a, b) { a + b; }; adder(1, 2 * 3);",
        "-(5 + 5) * !true;",
        "fn() {}();",
    ];
    for source in sources {
        let once = rendered(source);
        let twice = rendered(&once);
        assert_eq!(once, twice, "source: {source:?}");
    }
}

#[test]
fn missing_assign_in_let() {
    let errors = error_messages("let x 5;");
    assert_eq!(
        errors,
        vec!["expected next token to be `=`, got integer literal instead"]
    );
}

#[test]
fn missing_name_in_let() {
    let errors = error_messages("let = 5;");
    assert_eq!(
        errors,
        vec!["expected next token to be identifier, got `=` instead"]
    );
}

#[test]
fn no_prefix_parse_function() {
    let errors = error_messages(";");
    assert_eq!(errors, vec!["no prefix parse function for `;`"]);
}

#[test]
fn unclosed_if_condition() {
    let errors = error_messages("if (x { y }");
    // Recovery stops before the orphaned `}`, which then gets its own
    // expression-position report.
    assert_eq!(
        errors,
        vec![
            "expected next token to be `)`, got `{` instead",
            "no prefix parse function for `}`",
        ]
    );
}

#[test]
fn missing_block_after_if() {
    let errors = error_messages("if (x) y");
    assert_eq!(
        errors,
        vec!["expected next token to be `{`, got identifier instead"]
    );
}

#[test]
fn unterminated_block_reports_eof() {
    let errors = error_messages("if (x) { y");
    assert_eq!(
        errors,
        vec!["expected next token to be `}`, got end of input instead"]
    );
}

#[test]
fn parser_recovers_at_statement_boundary() {
    let interner = StringInterner::new();
    let result = parse_source("let x 5; let y = 10;", &interner);

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.program.stmts.len(), 1);
    let StmtKind::Let { name, .. } = &result.program.stmts[0].kind else {
        panic!("expected surviving let statement");
    };
    assert_eq!(interner.resolve(name.name), "y");
}

#[test]
fn every_broken_statement_is_reported() {
    let errors = error_messages("let x 5; let = 10; let 838383;");
    assert_eq!(errors.len(), 3);
}

#[test]
fn error_token_from_lexer_reaches_the_parser() {
    let interner = StringInterner::new();
    let (tokens, lex_errors) = tarn_lexer::lex("let x = @;", &interner);
    assert_eq!(lex_errors.len(), 1);

    let result = parse(&tokens, &interner);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].message,
        "no prefix parse function for unrecognized token"
    );
}

#[test]
fn deeply_nested_expression_parses() {
    let depth = 20_000;
    let mut source = String::new();
    for _ in 0..depth {
        source.push('(');
    }
    source.push('1');
    for _ in 0..depth {
        source.push(')');
    }

    assert_eq!(rendered(&source), "1;");
}
