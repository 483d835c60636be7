use log::debug;
use logos::Logos;

use crate::{
    ast::LiteralValue,
    error::{Diagnostics, LexError},
    interpreter::token::Token,
};

/// Characters that may appear inside a bracket escape such as `[&]`.
pub const ESCAPABLE: &[char] = &['[', ']', '&', '$', '#', '\'', '"', '%', '+', '-', '*', '/', '<',
                                 '>', '=', '(', ')', ',', ':', ';'];

/// Represents the category of a lexical token.
///
/// Quoted runs and bracket escapes are only recognized by their opening
/// character here; [`scan`] consumes the rest of the run by hand because a
/// single text literal can expand into several tokens.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<>`
    #[token("<>")]
    NotEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `$`, the line-break operator. Also advances the line counter.
    #[token("$", |lex| {
        lex.extras.line += 1;
    })]
    LineBreak,
    /// Opening `'` of a character literal.
    #[token("'")]
    Apostrophe,
    /// Opening `"` of a text literal.
    #[token("\"")]
    DoubleQuote,
    /// Opening `[` of a bracket escape.
    #[token("[")]
    LBracket,
    /// Floating-point literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// A decoded `'c'` literal.
    CharLiteral,
    /// A decoded text literal segment.
    Text,
    /// A decoded `[c]` escape.
    Escape,
    /// `BEGIN`
    #[token("BEGIN")]
    Begin,
    /// `END`
    #[token("END")]
    End,
    /// `CODE`
    #[token("CODE")]
    Code,
    /// `IF`
    #[token("IF")]
    #[token("if")]
    If,
    /// `ELSE`
    #[token("ELSE")]
    #[token("else")]
    Else,
    /// `WHILE`
    #[token("WHILE")]
    #[token("while")]
    While,
    /// `FOR`
    #[token("FOR")]
    #[token("for")]
    For,
    /// `DISPLAY`
    #[token("DISPLAY")]
    Display,
    /// `SCAN`
    #[token("SCAN")]
    Scan,
    /// `NIL`
    #[token("NIL")]
    Nil,
    /// `TRUE`, bare or quoted.
    #[token("TRUE")]
    True,
    /// `FALSE`, bare or quoted.
    #[token("FALSE")]
    False,
    /// `AND`
    #[token("AND")]
    And,
    /// `OR`
    #[token("OR")]
    Or,
    /// `NOT`
    #[token("NOT")]
    Not,
    /// `INT`
    #[token("INT")]
    Int,
    /// `CHAR`
    #[token("CHAR")]
    Char,
    /// `BOOL`
    #[token("BOOL")]
    Bool,
    /// `FLOAT`
    #[token("FLOAT")]
    FloatKeyword,
    /// `STRING`
    #[token("STRING")]
    StringKeyword,
    /// Identifier tokens; variable names such as `x` or `total_count`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of the token sequence.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

type Lexer<'src> = logos::Lexer<'src, TokenKind>;

/// Converts source text into tokens.
///
/// Lexical errors are recorded in `diagnostics` and scanning carries on with
/// the next character, so one pass reports every offending run. The returned
/// sequence always ends with exactly one [`TokenKind::Eof`].
///
/// # Example
/// ```
/// use codelang::{
///     error::Diagnostics,
///     interpreter::lexer::{TokenKind, scan},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("x <> 10", &mut diagnostics);
///
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Identifier, TokenKind::NotEqual, TokenKind::Integer, TokenKind::Eof]);
/// assert!(diagnostics.is_empty());
/// ```
pub fn scan(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(TokenKind::Apostrophe) => scan_char(&mut lexer, &mut tokens, diagnostics),
            Ok(TokenKind::DoubleQuote) => scan_text(&mut lexer, &mut tokens, diagnostics),
            Ok(TokenKind::LBracket) => scan_escape(&mut lexer, &mut tokens, diagnostics),
            Ok(TokenKind::Integer) => match lexer.slice().parse::<i64>() {
                Ok(value) => tokens.push(Token::literal(TokenKind::Integer,
                                                        lexer.slice(),
                                                        value.into(),
                                                        line)),
                Err(_) => diagnostics.report(LexError::InvalidNumber { literal: lexer.slice()
                                                                                     .to_string(),
                                                                       line }),
            },
            Ok(TokenKind::Float) => match lexer.slice().parse::<f64>() {
                Ok(value) => tokens.push(Token::literal(TokenKind::Float,
                                                        lexer.slice(),
                                                        value.into(),
                                                        line)),
                Err(_) => diagnostics.report(LexError::InvalidNumber { literal: lexer.slice()
                                                                                     .to_string(),
                                                                       line }),
            },
            Ok(TokenKind::LineBreak) => {
                tokens.push(Token::new(TokenKind::LineBreak, lexer.slice(), line - 1));
            },
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), line)),
            Err(()) => {
                diagnostics.report(LexError::UnexpectedCharacter { character: lexer.slice()
                                                                                   .to_string(),
                                                                   line })
            },
        }
    }

    tokens.push(Token::new(TokenKind::Eof, "", lexer.extras.line));
    debug!("scanned {} tokens", tokens.len());
    tokens
}

/// Consumes a character literal after its opening `'`.
///
/// The literal must close on the same line and hold exactly one character.
fn scan_char(lexer: &mut Lexer<'_>, tokens: &mut Vec<Token>, diagnostics: &mut Diagnostics) {
    let line = lexer.extras.line;
    let rest = lexer.remainder();

    let Some(close) = rest.find(['\'', '\n']).filter(|&i| rest[i..].starts_with('\'')) else {
        let consumed = rest.find('\n').unwrap_or(rest.len());
        lexer.bump(consumed);
        diagnostics.report(LexError::UnterminatedCharacter { line });
        return;
    };

    let content = &rest[..close];
    let start = lexer.span().start;
    lexer.bump(close + 1);

    let mut chars = content.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            tokens.push(Token::literal(TokenKind::CharLiteral,
                                       &lexer.source()[start..lexer.span().end],
                                       c.into(),
                                       line));
        },
        _ => diagnostics.report(LexError::InvalidCharacter { line }),
    }
}

/// Consumes a text literal after its opening `"`.
///
/// Every `$` inside the literal closes the current segment and emits a
/// line-break token before scanning continues with a fresh segment. A final
/// segment reading exactly `TRUE` or `FALSE` becomes a boolean literal.
fn scan_text(lexer: &mut Lexer<'_>, tokens: &mut Vec<Token>, diagnostics: &mut Diagnostics) {
    let source = lexer.source();
    let mut segment_start = lexer.span().start;
    let body_start = lexer.span().end;
    let rest = lexer.remainder();
    let mut segment = String::new();
    let mut segment_line = lexer.extras.line;

    for (offset, ch) in rest.char_indices() {
        let position = body_start + offset;
        match ch {
            '"' => {
                lexer.bump(offset + 1);
                let lexeme = &source[segment_start..=position];
                tokens.push(text_token(segment, lexeme, segment_line));
                return;
            },
            '$' => {
                if position > segment_start {
                    let lexeme = &source[segment_start..position];
                    tokens.push(Token::literal(TokenKind::Text,
                                               lexeme,
                                               LiteralValue::Text(std::mem::take(&mut segment)),
                                               segment_line));
                }
                tokens.push(Token::new(TokenKind::LineBreak, "$", lexer.extras.line));
                lexer.extras.line += 1;
                segment_start = position + 1;
                segment_line = lexer.extras.line;
            },
            '\n' => {
                lexer.extras.line += 1;
                segment.push(ch);
            },
            _ => segment.push(ch),
        }
    }

    lexer.bump(rest.len());
    diagnostics.report(LexError::UnterminatedString { line: lexer.extras.line });
}

fn text_token(segment: String, lexeme: &str, line: usize) -> Token {
    match segment.as_str() {
        "TRUE" => Token::literal(TokenKind::True, lexeme, true.into(), line),
        "FALSE" => Token::literal(TokenKind::False, lexeme, false.into(), line),
        _ => Token::literal(TokenKind::Text, lexeme, LiteralValue::Text(segment), line),
    }
}

/// Consumes a bracket escape after its opening `[`.
///
/// Only `[c]` with `c` in [`ESCAPABLE`] produces a token. When no closing `]`
/// follows the character, only the `[` is consumed.
fn scan_escape(lexer: &mut Lexer<'_>, tokens: &mut Vec<Token>, diagnostics: &mut Diagnostics) {
    let line = lexer.extras.line;
    let start = lexer.span().start;
    let mut chars = lexer.remainder().chars();

    match (chars.next(), chars.next()) {
        (Some(c), Some(']')) => {
            lexer.bump(c.len_utf8() + 1);
            if ESCAPABLE.contains(&c) {
                tokens.push(Token::literal(TokenKind::Escape,
                                           &lexer.source()[start..lexer.span().end],
                                           c.into(),
                                           line));
            } else {
                diagnostics.report(LexError::InvalidEscape { character: c.to_string(),
                                                             line });
            }
        },
        (Some(c), _) => diagnostics.report(LexError::InvalidEscape { character: c.to_string(),
                                                                     line }),
        (None, _) => diagnostics.report(LexError::InvalidEscape { character: String::new(),
                                                                  line }),
    }
}
