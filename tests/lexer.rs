use codelang::{
    ast::LiteralValue,
    error::{Diagnostic, Diagnostics, LexError},
    interpreter::{
        lexer::{TokenKind, scan},
        token::Token,
    },
};

fn tokens(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    (tokens, diagnostics)
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokens(source).0.iter().map(|t| t.kind).collect()
}

fn first_lex_error(source: &str) -> LexError {
    let (_, diagnostics) = tokens(source);
    match diagnostics.iter().next() {
        Some(Diagnostic::Lex(error)) => error.clone(),
        other => panic!("Expected a lexical error, got {other:?}"),
    }
}

#[test]
fn program_frame_and_declaration() {
    use TokenKind::{Begin, Code, End, Eof, Equals, Identifier, Int, Integer};

    assert_eq!(kinds("BEGIN CODE\nINT x = 1\nEND CODE"),
               vec![Begin, Code, Int, Identifier, Equals, Integer, End, Code, Eof]);
}

#[test]
fn multi_character_operators() {
    use TokenKind::{EqualEqual, Eof, GreaterEqual, LessEqual, NotEqual};

    assert_eq!(kinds("== <> <= >="), vec![EqualEqual, NotEqual, LessEqual, GreaterEqual, Eof]);
}

#[test]
fn lines_are_counted() {
    let (tokens, _) = tokens("INT x\n\nDISPLAY: x");
    let display = tokens.iter()
                        .find(|t| t.kind == TokenKind::Display)
                        .unwrap();

    assert_eq!(display.line, 3);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
}

#[test]
fn numbers_carry_their_values() {
    let (tokens, diagnostics) = tokens("2.5 42");

    assert!(diagnostics.is_empty());
    assert_eq!(tokens[0].literal, Some(LiteralValue::Float(2.5)));
    assert_eq!(tokens[1].literal, Some(LiteralValue::Integer(42)));
}

#[test]
fn oversized_integer_is_rejected() {
    assert!(matches!(first_lex_error("99999999999999999999"),
                     LexError::InvalidNumber { line: 1, .. }));
}

#[test]
fn character_literal() {
    let (tokens, _) = tokens("'a'");

    assert_eq!(tokens[0].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[0].literal, Some(LiteralValue::Char('a')));
    assert_eq!(tokens[0].lexeme, "'a'");
}

#[test]
fn text_literal_is_split_at_dollar() {
    use TokenKind::{Eof, LineBreak, Text};

    let (tokens, diagnostics) = tokens("\"first$second\"");

    assert!(diagnostics.is_empty());
    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               vec![Text, LineBreak, Text, Eof]);
    assert_eq!(tokens[0].literal, Some(LiteralValue::Text("first".into())));
    assert_eq!(tokens[2].literal, Some(LiteralValue::Text("second".into())));
    assert_eq!(tokens[2].line, 2);
}

#[test]
fn quoted_boolean_words_become_booleans() {
    let (tokens, _) = tokens("\"TRUE\" \"FALSE\" \"TRUE \"");

    assert_eq!(tokens[0].kind, TokenKind::True);
    assert_eq!(tokens[0].literal, Some(LiteralValue::Bool(true)));
    assert_eq!(tokens[1].kind, TokenKind::False);
    assert_eq!(tokens[2].kind, TokenKind::Text);
}

#[test]
fn bracket_escapes() {
    let (tokens, diagnostics) = tokens("[&] [[] []]");

    assert!(diagnostics.is_empty());
    let escaped: Vec<_> = tokens.iter().filter_map(|t| t.literal.clone()).collect();
    assert_eq!(escaped,
               vec![LiteralValue::Char('&'), LiteralValue::Char('['), LiteralValue::Char(']')]);
}

#[test]
fn dollar_outside_text_advances_line() {
    let (tokens, _) = tokens("a $ b");

    assert_eq!(tokens[1].kind, TokenKind::LineBreak);
    assert_eq!(tokens[1].line, 1);
    assert_eq!(tokens[2].line, 2);
}

#[test]
fn comments_are_skipped() {
    let (tokens, _) = tokens("x # note & \"quotes\"\ny");

    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn lower_case_control_keywords() {
    use TokenKind::{Else, Eof, For, Identifier, If, While};

    assert_eq!(kinds("if else while for iffy"),
               vec![If, Else, While, For, Identifier, Eof]);
    assert_eq!(kinds("display"), vec![Identifier, Eof]);
}

#[test]
fn lexical_errors() {
    assert!(matches!(first_lex_error("x @ y"),
                     LexError::UnexpectedCharacter { line: 1, .. }));
    assert!(matches!(first_lex_error("\"abc"), LexError::UnterminatedString { .. }));
    assert!(matches!(first_lex_error("'a"), LexError::UnterminatedCharacter { line: 1 }));
    assert!(matches!(first_lex_error("'ab'"), LexError::InvalidCharacter { line: 1 }));
    assert!(matches!(first_lex_error("''"), LexError::InvalidCharacter { line: 1 }));
    assert!(matches!(first_lex_error("[a]"), LexError::InvalidEscape { line: 1, .. }));
}

#[test]
fn scanning_continues_after_error() {
    let (tokens, diagnostics) = tokens("x @ y ? z");

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Identifier).count(), 3);
}
