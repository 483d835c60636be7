use crate::{ast::LiteralValue, interpreter::lexer::TokenKind};

/// A classified lexical unit.
///
/// Tokens are produced once by the lexer and never modified. Literal tokens
/// carry their decoded value in `literal`; every other token leaves it empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token category.
    pub kind:    TokenKind,
    /// The exact source slice.
    pub lexeme:  String,
    /// The decoded value for literal tokens.
    pub literal: Option<LiteralValue>,
    /// 1-based source line.
    pub line:    usize,
}

/// Marker returned when the parser reads past the last token.
pub(crate) static END_OF_INPUT: Token = Token { kind:    TokenKind::Eof,
                                                lexeme:  String::new(),
                                                literal: None,
                                                line:    0, };

impl Token {
    /// Creates a token without a literal value.
    ///
    /// # Example
    /// ```
    /// use codelang::interpreter::{lexer::TokenKind, token::Token};
    ///
    /// let token = Token::new(TokenKind::Identifier, "x", 3);
    /// assert_eq!(token.lexeme, "x");
    /// assert!(token.literal.is_none());
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: &str, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.to_string(),
               literal: None,
               line }
    }

    /// Creates a literal token carrying its decoded value.
    #[must_use]
    pub fn literal(kind: TokenKind, lexeme: &str, literal: LiteralValue, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.to_string(),
               literal: Some(literal),
               line }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind == TokenKind::Eof {
            write!(f, "end of input")
        } else {
            write!(f, "'{}'", self.lexeme)
        }
    }
}
