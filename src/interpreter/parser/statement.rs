use crate::{
    ast::{Declaration, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        value::declared_type::DeclaredType,
    },
};

impl Parser<'_, '_> {
    /// Parses one declaration or statement inside a block body.
    ///
    /// A typed declaration may expand to several statements
    /// (`INT a, b = 2`). Errors are reported here and followed by
    /// synchronization, so the caller always makes progress and simply gets
    /// no statements for the failed construct.
    pub(in crate::interpreter::parser) fn parse_declaration(&mut self) -> Vec<Statement> {
        let start = self.current;
        let result = if let Some(declared_type) = DeclaredType::from_keyword(self.peek().kind) {
            self.advance();
            self.parse_var_declaration(declared_type)
        } else if self.check(TokenKind::Begin) && self.check_next(TokenKind::Code) {
            self.parse_code_block().map(|block| block.into_iter().collect())
        } else {
            self.parse_statement().map(|statement| vec![statement])
        };

        match result {
            Ok(statements) => statements,
            Err(error) => {
                self.report(error);
                self.synchronize(start);
                Vec::new()
            },
        }
    }

    /// Parses the comma separated names after a declaration keyword.
    ///
    /// Grammar: `declaration := TYPE name ("=" expression)? ("," name ("="
    /// expression)?)*`
    ///
    /// A declaration following executable code is reported, but still parsed
    /// so that errors inside it are found too.
    fn parse_var_declaration(&mut self,
                             declared_type: DeclaredType)
                             -> ParseResult<Vec<Statement>> {
        if self.executable_started {
            self.report(ParseError::DeclarationAfterExecutable { line: self.previous().line });
        }

        let mut statements = Vec::new();
        loop {
            let declaration = self.parse_single_declaration()?;
            statements.push(Statement::declaration(declared_type, declaration));

            if !self.match_kind(&[TokenKind::Comma]) {
                break;
            }
        }

        Ok(statements)
    }

    /// Parses `name` or `name = expression` after a declaration keyword.
    pub(in crate::interpreter::parser) fn parse_single_declaration(&mut self)
                                                                   -> ParseResult<Declaration> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.match_kind(&[TokenKind::Equals]) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        Ok(Declaration { name: name.clone(),
                         initializer })
    }

    /// Parses an executable statement.
    ///
    /// Dispatches on the leading keyword; anything else is an expression
    /// statement. Every executable statement closes the declaration section
    /// of the enclosing program block.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        let token = self.peek();

        match token.kind {
            TokenKind::If => {
                self.advance();
                self.executable_started = true;
                self.parse_if(token.line)
            },
            TokenKind::While => {
                self.advance();
                self.executable_started = true;
                self.parse_while(token.line)
            },
            TokenKind::For => {
                self.advance();
                self.executable_started = true;
                self.parse_for(token.line)
            },
            TokenKind::Display => {
                self.advance();
                self.consume(TokenKind::Colon, "Expect ':' after 'DISPLAY'.")?;
                self.executable_started = true;
                let value = self.parse_expression()?;

                Ok(Statement::Display { value,
                                        line: token.line })
            },
            TokenKind::Scan => {
                self.advance();
                self.consume(TokenKind::Colon, "Expect ':' after 'SCAN'.")?;
                self.executable_started = true;

                let mut targets = Vec::new();
                loop {
                    targets.push(self.consume(TokenKind::Identifier, "Expect variable name.")?
                                     .clone());
                    if !self.match_kind(&[TokenKind::Comma]) {
                        break;
                    }
                }

                Ok(Statement::Scan { targets,
                                     line: token.line })
            },
            _ => {
                self.executable_started = true;
                let expr = self.parse_expression()?;

                Ok(Statement::Expression { line: expr.line_number(),
                                           expr })
            },
        }
    }
}
