use codelang::{
    ast::{BinaryOperator, UnaryOperator},
    error::{Diagnostics, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::{core::Context, io::infer_value},
        lexer::{TokenKind, scan},
        parser::core::parse,
        token::Token,
        value::{core::Value, declared_type::DeclaredType},
    },
};

fn name(lexeme: &str) -> Token {
    Token::new(TokenKind::Identifier, lexeme, 1)
}

/// Runs a syntactically valid program against `input` and returns what it
/// printed together with the outcome of the run.
fn run_with_input(source: &str, input: &str) -> (String, Result<(), RuntimeError>) {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    let statements = parse(&tokens, &mut diagnostics);
    assert!(!diagnostics.had_error(), "Unexpected errors:\n{diagnostics}");

    let mut reader = input.as_bytes();
    let mut output: Vec<u8> = Vec::new();
    let result = Context::new(&mut reader, &mut output).interpret(&statements);

    (String::from_utf8(output).unwrap(), result)
}

#[test]
fn integer_arithmetic_stays_integral() {
    let value = Context::eval_binary(BinaryOperator::Mod, &Value::Integer(-7), &Value::Integer(2), 1);
    assert_eq!(value.unwrap(), Value::Integer(-1));

    let value = Context::eval_binary(BinaryOperator::Sub, &Value::Integer(2), &Value::Integer(5), 1);
    assert_eq!(value.unwrap(), Value::Integer(-3));
}

#[test]
fn mixed_arithmetic_widens() {
    let value = Context::eval_binary(BinaryOperator::Add, &Value::Integer(1), &Value::Float(0.5), 1);
    assert_eq!(value.unwrap(), Value::Float(1.5));
}

#[test]
fn arithmetic_errors_carry_line() {
    let error = Context::eval_binary(BinaryOperator::Div,
                                     &Value::Float(1.0),
                                     &Value::Integer(0),
                                     7).unwrap_err();
    assert_eq!(error, RuntimeError::DivisionByZero { line: 7 });

    let error = Context::eval_binary(BinaryOperator::Mul,
                                     &Value::Integer(i64::MAX),
                                     &Value::Integer(2),
                                     3).unwrap_err();
    assert_eq!(error, RuntimeError::Overflow { line: 3 });

    let error = Context::eval_binary(BinaryOperator::Add, &Value::from("a"), &Value::Nil, 2);
    assert!(matches!(error, Err(RuntimeError::ExpectedNumbers { line: 2, .. })));
}

#[test]
fn equality_is_exact() {
    let equal = |l: &Value, r: &Value| {
        Context::eval_binary(BinaryOperator::Equal, l, r, 1).unwrap()
    };

    assert_eq!(equal(&Value::Integer(3), &Value::Float(3.0)), Value::Bool(false));
    assert_eq!(equal(&Value::Nil, &Value::Nil), Value::Bool(true));
    assert_eq!(equal(&Value::from("ab"), &Value::from("ab")), Value::Bool(true));
    assert_eq!(equal(&Value::Char('a'), &Value::from("a")), Value::Bool(false));
}

#[test]
fn concatenation_accepts_any_values() {
    let value = Context::eval_binary(BinaryOperator::Concat, &Value::Float(2.5), &Value::Char('!'), 1);
    assert_eq!(value.unwrap(), Value::from("2.5!"));
}

#[test]
fn unary_operators() {
    assert_eq!(Context::eval_unary(UnaryOperator::Negate, &Value::Float(1.5), 1).unwrap(),
               Value::Float(-1.5));
    assert_eq!(Context::eval_unary(UnaryOperator::Not, &Value::Integer(0), 1).unwrap(),
               Value::Bool(false));
    assert_eq!(Context::eval_unary(UnaryOperator::LineBreak, &Value::Integer(4), 1).unwrap(),
               Value::from("\n4"));
    assert_eq!(Context::eval_unary(UnaryOperator::Negate, &Value::Integer(i64::MIN), 9),
               Err(RuntimeError::Overflow { line: 9 }));
}

#[test]
fn display_formats() {
    assert_eq!(Value::Float(3.0).to_string(), "3");
    assert_eq!(Value::Float(-0.5).to_string(), "-0.5");
    assert_eq!(Value::Bool(true).to_string(), "TRUE");
    assert_eq!(Value::Nil.to_string(), "nil");
}

#[test]
fn input_fields_are_inferred() {
    assert_eq!(infer_value("-12"), Value::Integer(-12));
    assert_eq!(infer_value("1e3"), Value::Float(1000.0));
    assert_eq!(infer_value("inf"), Value::from("inf"));
    assert_eq!(infer_value("7"), Value::Integer(7));
    assert_eq!(infer_value("#"), Value::Char('#'));
    assert_eq!(infer_value("FALSE"), Value::Bool(false));
    assert_eq!(infer_value(""), Value::from(""));
}

#[test]
fn environment_scopes_shadow_and_unwind() {
    let mut environment = Environment::new();
    environment.define("x", Value::Integer(1), DeclaredType::Int);

    environment.push_scope();
    environment.define("x", Value::Char('c'), DeclaredType::Char);
    assert_eq!(environment.get(&name("x")).unwrap(), Value::Char('c'));
    environment.pop_scope();

    assert_eq!(environment.get(&name("x")).unwrap(), Value::Integer(1));
    assert_eq!(environment.declared_type(&name("x")).unwrap(), DeclaredType::Int);
}

#[test]
fn environment_assignment_checks_type() {
    let mut environment = Environment::new();
    environment.define("flag", Value::Nil, DeclaredType::Bool);

    environment.push_scope();
    environment.assign(&name("flag"), Value::Bool(true)).unwrap();
    environment.pop_scope();
    assert_eq!(environment.get(&name("flag")).unwrap(), Value::Bool(true));

    let error = environment.assign(&name("flag"), Value::Integer(1)).unwrap_err();
    assert_eq!(error.to_string(), "Error on line 1: Input must be of type BOOL.");
    assert_eq!(environment.get(&name("flag")).unwrap(), Value::Bool(true));

    assert!(matches!(environment.assign(&name("other"), Value::Nil),
                     Err(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn redeclaration_in_same_scope_replaces_value_and_type() {
    let (printed, result) =
        run_with_input("BEGIN CODE\nINT x = 1\nCHAR x = 'c'\nDISPLAY: x\nx = 'd'\nDISPLAY: x\nEND CODE",
                       "");

    assert!(result.is_ok());
    assert_eq!(printed, "c\nd\n");
}

#[test]
fn block_scope_is_dropped_after_error() {
    let mut reader = "".as_bytes();
    let mut output: Vec<u8> = Vec::new();
    let mut context = Context::new(&mut reader, &mut output);

    let mut diagnostics = Diagnostics::new();
    let tokens = scan("BEGIN CODE\nDISPLAY: 1 / 0\nEND CODE", &mut diagnostics);
    let statements = parse(&tokens, &mut diagnostics);

    assert!(context.interpret(&statements).is_err());
    assert_eq!(context.environment.depth(), 1);
}

#[test]
fn scan_reads_one_line_per_statement() {
    let src = "BEGIN CODE\nINT a\nSTRING s\nBOOL b\nSCAN: a\nSCAN: s, b\nDISPLAY: a & s & b\nEND CODE";
    let (printed, result) = run_with_input(src, "12\nhello there, \"TRUE\"\n");

    assert!(result.is_ok());
    assert_eq!(printed, "12hello thereTRUE\n");
}

#[test]
fn scan_at_end_of_input_reads_empty_line() {
    let (_, result) = run_with_input("BEGIN CODE\nINT a\nSCAN: a\nEND CODE", "");

    assert_eq!(result,
               Err(RuntimeError::TypeMismatch { name:     "a".to_string(),
                                                expected: DeclaredType::Int,
                                                line:     3, }));
}

#[test]
fn scan_into_undeclared_variable_fails() {
    let (_, result) = run_with_input("BEGIN CODE\nSCAN: ghost\nEND CODE", "1\n");

    assert!(matches!(result, Err(RuntimeError::UndefinedVariable { line: 2, .. })));
}
