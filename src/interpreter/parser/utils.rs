use crate::{
    error::{Diagnostic, ParseError},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        token::{END_OF_INPUT, Token},
    },
};

/// Token kinds at which error recovery resumes parsing.
const SYNCHRONIZE_AT: &[TokenKind] = &[TokenKind::Begin,
                                       TokenKind::Int,
                                       TokenKind::Char,
                                       TokenKind::Bool,
                                       TokenKind::FloatKeyword,
                                       TokenKind::StringKeyword,
                                       TokenKind::Scan,
                                       TokenKind::Display,
                                       TokenKind::If,
                                       TokenKind::While,
                                       TokenKind::For,
                                       TokenKind::End];

impl<'t> Parser<'t, '_> {
    /// Returns the current token without consuming it.
    pub(in crate::interpreter::parser) fn peek(&self) -> &'t Token {
        self.tokens.get(self.current).unwrap_or(&END_OF_INPUT)
    }

    /// Returns the most recently consumed token.
    pub(in crate::interpreter::parser) fn previous(&self) -> &'t Token {
        self.current
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .unwrap_or(&END_OF_INPUT)
    }

    pub(in crate::interpreter::parser) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Consumes the current token and returns it.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> &'t Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Looks one token past the current one.
    pub(in crate::interpreter::parser) fn check_next(&self, kind: TokenKind) -> bool {
        !self.is_at_end()
        && self.tokens
               .get(self.current + 1)
               .is_some_and(|token| token.kind == kind)
    }

    /// Consumes the current token if its kind is one of `kinds`.
    pub(in crate::interpreter::parser) fn match_kind(&mut self, kinds: &[TokenKind]) -> bool {
        self.match_operator(kinds).is_some()
    }

    /// Consumes and returns the current token if its kind is one of `kinds`.
    pub(in crate::interpreter::parser) fn match_operator(&mut self,
                                                         kinds: &[TokenKind])
                                                         -> Option<&'t Token> {
        if !self.is_at_end() && kinds.contains(&self.peek().kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes a token of the given kind or fails with `message`.
    ///
    /// # Errors
    /// `UnexpectedToken` naming the token found instead.
    pub(in crate::interpreter::parser) fn consume(&mut self,
                                                  kind: TokenKind,
                                                  message: &'static str)
                                                  -> ParseResult<&'t Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }

        let found = self.peek();
        Err(ParseError::UnexpectedToken { message,
                                          found: found.to_string(),
                                          line: found.line })
    }

    /// Returns true if the current token can begin an operand of `operator`.
    ///
    /// The operand must start on the same source line as the operator. Since
    /// `$` advances the line counter itself, tokens on its own line are
    /// numbered one past it.
    pub(in crate::interpreter::parser) fn starts_operand(&self, operator: &Token) -> bool {
        use TokenKind::{
            CharLiteral, Escape, False, Float, Identifier, Integer, LParen, LineBreak, Minus, Nil,
            Not, Plus, Text, True,
        };

        let next = self.peek();
        let same_line = next.line <= operator.line + 1;
        same_line
        && matches!(next.kind,
                    Not | Minus
                        | Plus
                        | LineBreak
                        | True
                        | False
                        | Nil
                        | Integer
                        | Float
                        | CharLiteral
                        | Text
                        | Escape
                        | Identifier
                        | LParen)
    }

    pub(in crate::interpreter::parser) fn report(&mut self, error: impl Into<Diagnostic>) {
        self.diagnostics.report(error);
    }

    /// Discards tokens until one that can start a statement.
    ///
    /// `start` is the position where the failed construct began. If it
    /// consumed nothing, the offending token is skipped first so the parser
    /// always makes progress. Otherwise a boundary token at the failure point
    /// is kept, so that `INT` directly before `END CODE` does not swallow the
    /// block terminator.
    pub(in crate::interpreter::parser) fn synchronize(&mut self, start: usize) {
        if self.current == start {
            self.advance();
        }

        while !self.is_at_end() {
            if SYNCHRONIZE_AT.contains(&self.peek().kind) {
                return;
            }
            self.advance();
        }
    }
}
