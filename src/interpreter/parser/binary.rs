use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses an assignment.
    ///
    /// Assignment is right-associative: `a = b = 3` assigns `3` to `b`, then
    /// to `a`. Only a bare variable may stand left of `=`. Any other target
    /// is reported and the right-hand side is returned in its place, so
    /// parsing continues.
    ///
    /// The rule is: `assignment := IDENTIFIER "=" assignment | logical_or`
    pub(in crate::interpreter::parser) fn parse_assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_logical_or()?;

        if let Some(equals) = self.match_operator(&[TokenKind::Equals]) {
            let value = self.parse_assignment()?;

            if let Expr::Variable { name } = expr {
                return Ok(Expr::Assign { name,
                                         value: Box::new(value) });
            }

            self.report(ParseError::InvalidAssignmentTarget { line: equals.line });
            return Ok(value);
        }

        Ok(expr)
    }

    /// Parses logical OR expressions.
    ///
    /// The rule is: `logical_or := logical_and ("OR" logical_and)*`
    fn parse_logical_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_logical_and()?;
        while let Some(operator) = self.match_operator(&[TokenKind::Or]) {
            let right = self.parse_logical_and()?;
            left = Expr::Logical { left:  Box::new(left),
                                   op:    LogicalOperator::Or,
                                   right: Box::new(right),
                                   line:  operator.line, };
        }
        Ok(left)
    }

    /// Parses logical AND expressions.
    ///
    /// The rule is: `logical_and := equality ("AND" equality)*`
    fn parse_logical_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_equality()?;
        while let Some(operator) = self.match_operator(&[TokenKind::And]) {
            let right = self.parse_equality()?;
            left = Expr::Logical { left:  Box::new(left),
                                   op:    LogicalOperator::And,
                                   right: Box::new(right),
                                   line:  operator.line, };
        }
        Ok(left)
    }

    /// The rule is: `equality := comparison (("==" | "<>") comparison)*`
    fn parse_equality(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(&[TokenKind::EqualEqual, TokenKind::NotEqual],
                                Self::parse_comparison)
    }

    /// The rule is: `comparison := term (("<" | "<=" | ">" | ">=") term)*`
    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(&[TokenKind::Less,
                                  TokenKind::LessEqual,
                                  TokenKind::Greater,
                                  TokenKind::GreaterEqual],
                                Self::parse_term)
    }

    /// Parses addition-level expressions.
    ///
    /// The rule is: `term := factor (("+" | "-" | "&" | "$") factor)*`
    fn parse_term(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(&[TokenKind::Plus,
                                  TokenKind::Minus,
                                  TokenKind::Ampersand,
                                  TokenKind::LineBreak],
                                Self::parse_factor)
    }

    /// Parses multiplication-level expressions.
    ///
    /// The rule is: `factor := unary (("*" | "/" | "%" | "$") unary)*`
    fn parse_factor(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(&[TokenKind::Star,
                                  TokenKind::Slash,
                                  TokenKind::Percent,
                                  TokenKind::LineBreak],
                                Self::parse_unary)
    }

    /// Parses one left-associative precedence level.
    ///
    /// A `$` with no operand after it on the same line joins its left
    /// operand with empty text, so `"hello" $` ends in a line break.
    fn parse_binary_level(&mut self,
                          operators: &[TokenKind],
                          operand: fn(&mut Self) -> ParseResult<Expr>)
                          -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while let Some(token) = self.match_operator(operators) {
            let Some(op) = token_to_binary_operator(token.kind) else {
                break;
            };

            let right = if op == BinaryOperator::LineBreak && !self.starts_operand(token) {
                Expr::Literal { value: "".into(),
                                line:  token.line, }
            } else {
                operand(self)?
            };

            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line: token.line };
        }

        Ok(left)
    }
}

/// Maps a token kind to its binary operator, if it is one.
const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::Ampersand => Some(BinaryOperator::Concat),
        TokenKind::LineBreak => Some(BinaryOperator::LineBreak),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::NotEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
