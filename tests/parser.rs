use codelang::{
    ast::{BinaryOperator, Declaration, Expr, LiteralValue, LogicalOperator, Statement},
    error::{Diagnostic, Diagnostics, ParseError},
    interpreter::{lexer::scan, parser::core::parse},
};

fn parse_source(source: &str) -> (Vec<Statement>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    let statements = parse(&tokens, &mut diagnostics);
    (statements, diagnostics)
}

/// Parses a program that must be free of errors and returns the body of its
/// code block.
fn body(source: &str) -> Vec<Statement> {
    let (mut statements, diagnostics) = parse_source(source);
    assert!(diagnostics.is_empty(), "Unexpected errors:\n{diagnostics}");
    assert_eq!(statements.len(), 1);

    match statements.remove(0) {
        Statement::Block { statements, .. } => statements,
        other => panic!("Expected the program block, got {other:?}"),
    }
}

fn parse_errors(source: &str) -> Vec<ParseError> {
    let (_, diagnostics) = parse_source(source);
    diagnostics.iter()
               .filter_map(|d| match d {
                   Diagnostic::Parse(error) => Some(error.clone()),
                   _ => None,
               })
               .collect()
}

fn int(value: i64, line: usize) -> Expr {
    Expr::Literal { value: LiteralValue::Integer(value),
                    line }
}

fn displayed(statement: &Statement) -> &Expr {
    match statement {
        Statement::Display { value, .. } => value,
        other => panic!("Expected DISPLAY, got {other:?}"),
    }
}

#[test]
fn declarations_expand_per_name() {
    let statements = body("BEGIN CODE\nINT a, b = 2\nEND CODE");

    assert_eq!(statements.len(), 2);
    assert!(matches!(&statements[0], Statement::Int(Declaration { initializer: None, .. })));
    assert!(matches!(&statements[1],
                     Statement::Int(Declaration { initializer: Some(_), .. })));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let statements = body("BEGIN CODE\nDISPLAY: 1 + 2 * 3\nEND CODE");

    let expected = Expr::Binary { left:  Box::new(int(1, 2)),
                                  op:    BinaryOperator::Add,
                                  right: Box::new(Expr::Binary { left:  Box::new(int(2, 2)),
                                                                 op:    BinaryOperator::Mul,
                                                                 right: Box::new(int(3, 2)),
                                                                 line:  2, }),
                                  line:  2, };
    assert_eq!(displayed(&statements[0]), &expected);
}

#[test]
fn and_binds_tighter_than_or() {
    let statements = body("BEGIN CODE\nDISPLAY: TRUE OR FALSE AND TRUE\nEND CODE");

    match displayed(&statements[0]) {
        Expr::Logical { op: LogicalOperator::Or,
                        right,
                        .. } => {
            assert!(matches!(**right, Expr::Logical { op: LogicalOperator::And, .. }));
        },
        other => panic!("Expected OR at the top, got {other:?}"),
    }
}

#[test]
fn assignment_is_right_associative() {
    let statements = body("BEGIN CODE\nINT a, b\na = b = 1\nEND CODE");

    match &statements[2] {
        Statement::Expression { expr: Expr::Assign { name, value },
                                .. } => {
            assert_eq!(name.lexeme, "a");
            assert!(matches!(&**value, Expr::Assign { name, .. } if name.lexeme == "b"));
        },
        other => panic!("Expected an assignment, got {other:?}"),
    }
}

#[test]
fn invalid_assignment_target_is_reported() {
    let errors = parse_errors("BEGIN CODE\n1 = 2\nEND CODE");

    assert_eq!(errors, vec![ParseError::InvalidAssignmentTarget { line: 2 }]);
}

#[test]
fn lone_dollar_is_newline_literal() {
    let statements = body("BEGIN CODE\nDISPLAY: $\nEND CODE");

    assert_eq!(displayed(&statements[0]),
               &Expr::Literal { value: LiteralValue::Text("\n".into()),
                                line:  2, });
}

#[test]
fn trailing_dollar_joins_empty_text() {
    let statements = body("BEGIN CODE\nDISPLAY: \"a\" $\nEND CODE");

    match displayed(&statements[0]) {
        Expr::Binary { op: BinaryOperator::LineBreak,
                       right,
                       .. } => {
            assert!(matches!(&**right, Expr::Literal { value: LiteralValue::Text(t), .. } if t.is_empty()));
        },
        other => panic!("Expected a line break join, got {other:?}"),
    }
}

#[test]
fn else_if_chains_nest() {
    let src = "BEGIN CODE\nIF (TRUE)\nBEGIN IF\nEND IF\nELSE IF (FALSE)\nBEGIN IF\nEND IF\nELSE\nBEGIN IF\nEND IF\nEND CODE";
    let statements = body(src);

    match &statements[0] {
        Statement::If { else_branch: Some(else_branch),
                        .. } => match &**else_branch {
            Statement::If { else_branch: Some(last),
                            .. } => assert!(matches!(**last, Statement::Block { .. })),
            other => panic!("Expected a chained IF, got {other:?}"),
        },
        other => panic!("Expected IF with ELSE, got {other:?}"),
    }
}

#[test]
fn for_loop_lowers_to_while() {
    let src = "BEGIN CODE\nFOR (INT i = 0; i < 3; i = i + 1)\nBEGIN FOR\nDISPLAY: i\nEND FOR\nEND CODE";
    let statements = body(src);

    let Statement::Block { statements: wrapper, .. } = &statements[0] else {
        panic!("Expected the initializer block, got {:?}", statements[0]);
    };
    assert!(matches!(&wrapper[0], Statement::Int(Declaration { name, .. }) if name.lexeme == "i"));

    let Statement::While { body, .. } = &wrapper[1] else {
        panic!("Expected a WHILE loop, got {:?}", wrapper[1]);
    };
    let Statement::Block { statements: looped, .. } = &**body else {
        panic!("Expected a loop body block, got {body:?}");
    };
    assert!(matches!(looped[0], Statement::Display { .. }));
    assert!(matches!(looped[1], Statement::Expression { expr: Expr::Assign { .. }, .. }));
}

#[test]
fn for_loop_clauses_may_be_omitted() {
    let statements = body("BEGIN CODE\nFOR (;;)\nBEGIN FOR\nEND FOR\nEND CODE");

    match &statements[0] {
        Statement::While { condition, .. } => {
            assert!(matches!(condition, Expr::Literal { value: LiteralValue::Bool(true), .. }));
        },
        other => panic!("Expected a bare WHILE loop, got {other:?}"),
    }
}

#[test]
fn redeclaration_before_code_is_accepted() {
    let statements = body("BEGIN CODE\nINT x = 1\nCHAR x = 'c'\nEND CODE");

    assert!(matches!(statements[1], Statement::Char(_)));
}

#[test]
fn declaration_inside_body_after_code_is_rejected() {
    let errors = parse_errors("BEGIN CODE\nIF (TRUE)\nBEGIN IF\nINT y\nEND IF\nEND CODE");

    assert_eq!(errors, vec![ParseError::DeclarationAfterExecutable { line: 4 }]);
}

#[test]
fn nested_code_block_is_rejected() {
    let errors = parse_errors("BEGIN CODE\nBEGIN CODE\nEND CODE\nEND CODE");

    assert_eq!(errors, vec![ParseError::MultipleCodeBlocks { line: 2 }]);
}

#[test]
fn code_outside_block_is_rejected() {
    let errors = parse_errors("INT x\nBEGIN CODE\nEND CODE");

    assert!(matches!(&errors[..], [ParseError::CodeOutsideBlock { line: 1, .. }]));
}

#[test]
fn empty_program_needs_code_block() {
    let errors = parse_errors("# nothing here");

    assert!(matches!(&errors[..], [ParseError::MissingCodeBlock { .. }]));
}

#[test]
fn recovery_reports_every_statement_error() {
    let src = "BEGIN CODE\nDISPLAY 1\nDISPLAY: (2 +)\nDISPLAY: 3\nEND CODE";
    let errors = parse_errors(src);

    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], ParseError::UnexpectedToken { line: 2, .. }));
    assert!(matches!(errors[1], ParseError::ExpectedExpression { line: 3, .. }));
}

#[test]
fn recovery_keeps_block_terminator() {
    let errors = parse_errors("BEGIN CODE\nINT\nEND CODE");

    assert_eq!(errors.len(), 1, "Unexpected errors: {errors:?}");
    assert_eq!(errors[0].to_string(), "Error on line 3 at 'END': Expect variable name.");
}

#[test]
fn recovery_skips_failing_boundary_token() {
    let errors = parse_errors("BEGIN CODE\nEND x\nDISPLAY: 1\nEND CODE");

    assert_eq!(errors.len(), 1, "Unexpected errors: {errors:?}");
    assert!(matches!(errors[0], ParseError::ExpectedExpression { line: 2, .. }));
}

#[test]
fn error_messages_name_the_found_token() {
    let errors = parse_errors("BEGIN CODE\nSCAN x\nEND CODE");

    assert_eq!(errors[0].to_string(), "Error on line 2 at 'x': Expect ':' after 'SCAN'.");
}
