use log::debug;

use crate::{
    ast::{Expr, Statement},
    error::{Diagnostics, ParseError},
    interpreter::{lexer::TokenKind, token::Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a scanned token sequence.
///
/// Syntax errors are recorded in the shared [`Diagnostics`]; after an error
/// the parser synchronizes to the next statement boundary and keeps going, so
/// one pass reports every independent error.
pub struct Parser<'t, 'd> {
    pub(in crate::interpreter::parser) tokens:             &'t [Token],
    pub(in crate::interpreter::parser) current:            usize,
    /// Set once an executable statement was parsed in the current program
    /// block; later declarations are rejected.
    pub(in crate::interpreter::parser) executable_started: bool,
    pub(in crate::interpreter::parser) code_block_seen:    bool,
    pub(in crate::interpreter::parser) diagnostics:        &'d mut Diagnostics,
}

/// Parses a token sequence into the program's statements.
///
/// A well-formed program yields exactly one [`Statement::Block`] holding the
/// body of its `BEGIN CODE … END CODE` block. Whenever a syntax error was
/// reported, the returned statements must not be evaluated.
///
/// # Example
/// ```
/// use codelang::{
///     ast::Statement,
///     error::Diagnostics,
///     interpreter::{lexer::scan, parser::core::parse},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("BEGIN CODE\nINT x = 1\nDISPLAY: x\nEND CODE", &mut diagnostics);
/// let statements = parse(&tokens, &mut diagnostics);
///
/// assert!(!diagnostics.had_error());
/// assert!(matches!(&statements[..], [Statement::Block { statements, .. }] if statements.len() == 2));
/// ```
pub fn parse(tokens: &[Token], diagnostics: &mut Diagnostics) -> Vec<Statement> {
    let mut parser = Parser::new(tokens, diagnostics);
    let statements = parser.parse_program();
    debug!("parsed {} top-level statements", statements.len());
    statements
}

impl<'t, 'd> Parser<'t, 'd> {
    /// Creates a parser positioned at the first token.
    pub fn new(tokens: &'t [Token], diagnostics: &'d mut Diagnostics) -> Self {
        Self { tokens,
               current: 0,
               executable_started: false,
               code_block_seen: false,
               diagnostics }
    }

    /// Parses every top-level construct until end of input.
    pub fn parse_program(&mut self) -> Vec<Statement> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            let start = self.current;
            match self.parse_top_level() {
                Ok(Some(statement)) => statements.push(statement),
                Ok(None) => {},
                Err(error) => {
                    self.report(error);
                    self.synchronize(start);
                },
            }
        }

        if !self.code_block_seen && !self.diagnostics.had_error() {
            self.report(ParseError::MissingCodeBlock { line: self.peek().line });
        }

        statements
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing.
    /// It begins at the lowest-precedence level, assignment, and recursively
    /// descends through the precedence hierarchy.
    ///
    /// Grammar: `expression := assignment`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_assignment()
    }

    fn parse_top_level(&mut self) -> ParseResult<Option<Statement>> {
        if self.check(TokenKind::Begin) && self.check_next(TokenKind::Code) {
            return self.parse_code_block();
        }

        let token = self.peek();
        Err(ParseError::CodeOutsideBlock { found: token.to_string(),
                                           line:  token.line, })
    }
}
