use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        value::declared_type::DeclaredType,
    },
};

impl Parser<'_, '_> {
    /// Parses a `BEGIN CODE … END CODE` block starting at `BEGIN`.
    ///
    /// Only the first such block in a program produces a statement. Any later
    /// one is reported, and its body is still parsed for further errors.
    ///
    /// # Returns
    /// - `Ok(Some(Statement::Block))`: For the program's first block.
    /// - `Ok(None)`: For a duplicate block.
    pub(in crate::interpreter::parser) fn parse_code_block(&mut self)
                                                           -> ParseResult<Option<Statement>> {
        let begin = self.advance();
        self.advance();

        let duplicate = self.code_block_seen;
        if duplicate {
            self.report(ParseError::MultipleCodeBlocks { line: begin.line });
        } else {
            self.code_block_seen = true;
            self.executable_started = false;
        }

        let statements = self.parse_body(TokenKind::Code, "Expect 'END CODE' after block.")?;

        Ok((!duplicate).then_some(Statement::Block { statements,
                                                     line: begin.line }))
    }

    /// Parses declarations until `END <closing>`, then consumes that pair.
    ///
    /// Stops early at end of input, in which case the missing terminator is
    /// reported through `message`.
    fn parse_body(&mut self,
                  closing: TokenKind,
                  message: &'static str)
                  -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();

        while !(self.check(TokenKind::End) && self.check_next(closing)) && !self.is_at_end() {
            statements.extend(self.parse_declaration());
        }

        self.consume(TokenKind::End, message)?;
        self.consume(closing, message)?;

        Ok(statements)
    }

    /// Parses `BEGIN <keyword> … END <keyword>` into a block statement.
    fn parse_keyword_block(&mut self,
                           keyword: TokenKind,
                           open_message: &'static str,
                           close_message: &'static str)
                           -> ParseResult<Statement> {
        let (line, statements) = self.parse_keyword_body(keyword, open_message, close_message)?;

        Ok(Statement::Block { statements, line })
    }

    /// Parses `BEGIN <keyword> … END <keyword>` and returns the line of
    /// `BEGIN` with the body's statements.
    fn parse_keyword_body(&mut self,
                          keyword: TokenKind,
                          open_message: &'static str,
                          close_message: &'static str)
                          -> ParseResult<(usize, Vec<Statement>)> {
        let begin = self.consume(TokenKind::Begin, open_message)?;
        self.consume(keyword, open_message)?;

        let statements = self.parse_body(keyword, close_message)?;

        Ok((begin.line, statements))
    }

    /// Parses an `IF` statement with optional `ELSE` and chained `ELSE IF`.
    ///
    /// Syntax:
    /// ```text
    ///     IF (<condition>) BEGIN IF <statements> END IF
    ///     ELSE IF (<condition>) BEGIN IF <statements> END IF
    ///     ELSE BEGIN IF <statements> END IF
    /// ```
    /// Nested `ELSE IF` constructs are parsed recursively.
    ///
    /// # Parameters
    /// - `line`: Line number of the `IF` token.
    ///
    /// # Errors
    /// - `UnexpectedToken` if a parenthesis or a `BEGIN IF` / `END IF` pair is
    ///   missing.
    /// - Propagates any errors from sub-expression parsing.
    pub(in crate::interpreter::parser) fn parse_if(&mut self,
                                                   line: usize)
                                                   -> ParseResult<Statement> {
        self.consume(TokenKind::LParen, "Expect '(' after 'IF'.")?;
        let condition = self.parse_expression()?;
        self.consume(TokenKind::RParen, "Expect ')' after if condition.")?;

        let then_branch = self.parse_keyword_block(TokenKind::If,
                                                   "Expect 'BEGIN IF' after ')'.",
                                                   "Expect 'END IF' after the statement body.")?;

        let else_branch = if self.match_kind(&[TokenKind::Else]) {
            if self.check(TokenKind::If) {
                let line = self.advance().line;
                Some(Box::new(self.parse_if(line)?))
            } else {
                Some(Box::new(self.parse_keyword_block(TokenKind::If,
                                                       "Expect 'BEGIN IF' after 'ELSE'.",
                                                       "Expect 'END IF' after the statement body.")?))
            }
        } else {
            None
        };

        Ok(Statement::If { condition,
                           then_branch: Box::new(then_branch),
                           else_branch,
                           line })
    }

    /// Parses `WHILE (<condition>) BEGIN WHILE … END WHILE`.
    pub(in crate::interpreter::parser) fn parse_while(&mut self,
                                                      line: usize)
                                                      -> ParseResult<Statement> {
        self.consume(TokenKind::LParen, "Expect '(' after 'WHILE'.")?;
        let condition = self.parse_expression()?;
        self.consume(TokenKind::RParen, "Expect ')' after condition.")?;

        let body = self.parse_keyword_block(TokenKind::While,
                                            "Expect 'BEGIN WHILE' after ')'.",
                                            "Expect 'END WHILE' after statement body.")?;

        Ok(Statement::While { condition,
                              body: Box::new(body),
                              line })
    }

    /// Parses a `FOR` loop and lowers it to a `WHILE` loop.
    ///
    /// Syntax:
    /// ```text
    ///     FOR (<init>; <condition>; <increment>) BEGIN FOR <statements> END FOR
    /// ```
    /// Every clause may be omitted; a missing condition loops forever. The
    /// increment runs at the end of each iteration, inside the body's scope.
    /// When an initializer is present, the loop is wrapped in a block that
    /// holds it, so a declared loop variable does not outlive the loop.
    pub(in crate::interpreter::parser) fn parse_for(&mut self,
                                                    line: usize)
                                                    -> ParseResult<Statement> {
        self.consume(TokenKind::LParen, "Expect '(' after 'FOR'.")?;

        let initializer = if self.match_kind(&[TokenKind::Semicolon]) {
            None
        } else if let Some(declared_type) = DeclaredType::from_keyword(self.peek().kind) {
            self.advance();
            let declaration = self.parse_single_declaration()?;
            self.consume(TokenKind::Semicolon, "Expect ';' after initializer.")?;
            Some(Statement::declaration(declared_type, declaration))
        } else {
            let expr = self.parse_expression()?;
            self.consume(TokenKind::Semicolon, "Expect ';' after initializer.")?;
            Some(Statement::Expression { line: expr.line_number(),
                                         expr })
        };

        let condition = if self.check(TokenKind::Semicolon) {
            Expr::Literal { value: true.into(),
                            line }
        } else {
            self.parse_expression()?
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.consume(TokenKind::RParen, "Expect ')' after for clauses.")?;

        let (body_line, mut statements) =
            self.parse_keyword_body(TokenKind::For,
                                    "Expect 'BEGIN FOR' after ')'.",
                                    "Expect 'END FOR' after statement body.")?;

        if let Some(increment) = increment {
            statements.push(Statement::Expression { line: increment.line_number(),
                                                    expr: increment });
        }

        let looped = Statement::While { condition,
                                        body: Box::new(Statement::Block { statements,
                                                                          line: body_line }),
                                        line };

        Ok(match initializer {
            Some(initializer) => Statement::Block { statements: vec![initializer, looped],
                                                    line },
            None => looped,
        })
    }
}
