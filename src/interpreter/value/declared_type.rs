use crate::interpreter::{lexer::TokenKind, value::core::Value};

/// The type named by a declaration keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    /// `INT`, admits integers.
    Int,
    /// `CHAR`, admits single characters.
    Char,
    /// `BOOL`, admits booleans.
    Bool,
    /// `FLOAT`, admits floating-point numbers.
    Float,
    /// `STRING`, admits text.
    String,
}

impl DeclaredType {
    /// Maps a declaration keyword to its type.
    ///
    /// Returns `None` for every other token kind.
    ///
    /// # Example
    /// ```
    /// use codelang::interpreter::{lexer::TokenKind, value::declared_type::DeclaredType};
    ///
    /// assert_eq!(DeclaredType::from_keyword(TokenKind::FloatKeyword), Some(DeclaredType::Float));
    /// assert_eq!(DeclaredType::from_keyword(TokenKind::Identifier), None);
    /// ```
    #[must_use]
    pub const fn from_keyword(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Int => Some(Self::Int),
            TokenKind::Char => Some(Self::Char),
            TokenKind::Bool => Some(Self::Bool),
            TokenKind::FloatKeyword => Some(Self::Float),
            TokenKind::StringKeyword => Some(Self::String),
            _ => None,
        }
    }

    /// Returns true if `value` may be stored in a binding of this type.
    ///
    /// The match is exact: an integer is not a float, a character is not
    /// text, and nil is never admitted.
    ///
    /// # Example
    /// ```
    /// use codelang::interpreter::value::{core::Value, declared_type::DeclaredType};
    ///
    /// assert!(DeclaredType::Int.admits(&Value::Integer(3)));
    /// assert!(!DeclaredType::Float.admits(&Value::Integer(3)));
    /// assert!(!DeclaredType::String.admits(&Value::Nil));
    /// ```
    #[must_use]
    pub fn admits(self, value: &Value) -> bool {
        value.declared_type() == Some(self)
    }
}

impl std::fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int => "INT",
            Self::Char => "CHAR",
            Self::Bool => "BOOL",
            Self::Float => "FLOAT",
            Self::String => "STRING",
        };
        write!(f, "{name}")
    }
}
