use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses prefix operators.
    ///
    /// A `$` with nothing to prefix on its line stands for a newline text
    /// literal, as in `DISPLAY: a & $ & b`.
    ///
    /// The rule is: `unary := ("NOT" | "-" | "+" | "$") unary | primary`
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.match_operator(&[TokenKind::Not,
                                                TokenKind::Minus,
                                                TokenKind::Plus,
                                                TokenKind::LineBreak])
        else {
            return self.parse_primary();
        };

        let op = match token.kind {
            TokenKind::Not => UnaryOperator::Not,
            TokenKind::Minus => UnaryOperator::Negate,
            TokenKind::Plus => UnaryOperator::Plus,
            TokenKind::LineBreak => {
                if !self.starts_operand(token) {
                    return Ok(Expr::Literal { value: "\n".into(),
                                              line:  token.line, });
                }
                UnaryOperator::LineBreak
            },
            _ => unreachable!(),
        };

        let expr = self.parse_unary()?;
        Ok(Expr::Unary { op,
                         expr: Box::new(expr),
                         line: token.line })
    }

    /// Parses literals, variables and parenthesized groups.
    ///
    /// # Errors
    /// - `ExpectedExpression` if no operand starts at the current token.
    /// - `UnexpectedToken` if a group is not closed by `)`.
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let token = self.peek();
        let line = token.line;

        let expr = match token.kind {
            TokenKind::True => Expr::Literal { value: true.into(),
                                               line },
            TokenKind::False => Expr::Literal { value: false.into(),
                                                line },
            TokenKind::Nil => Expr::Literal { value: LiteralValue::Nil,
                                              line },
            TokenKind::Integer
            | TokenKind::Float
            | TokenKind::CharLiteral
            | TokenKind::Text
            | TokenKind::Escape => Expr::Literal { value: token.literal
                                                               .clone()
                                                               .unwrap_or(LiteralValue::Nil),
                                                   line },
            TokenKind::Identifier => Expr::Variable { name: token.clone() },
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.consume(TokenKind::RParen, "Expect ')' after expression.")?;

                return Ok(Expr::Grouping { expr: Box::new(expr),
                                           line });
            },
            _ => {
                return Err(ParseError::ExpectedExpression { found: token.to_string(),
                                                            line });
            },
        };

        self.advance();
        Ok(expr)
    }
}
