use std::rc::Rc;

use crate::{ast::LiteralValue, interpreter::value::declared_type::DeclaredType};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the values a variable can hold or an expression can
/// produce. Text is reference counted, so copying a value out of a binding
/// never copies its characters.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value. Uninitialized variables hold it.
    Nil,
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Float(f64),
    /// A single character.
    Char(char),
    /// A boolean value, produced by comparisons and logical operators.
    Bool(bool),
    /// A text value.
    Text(Rc<str>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(Rc::from(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Float(r) => Self::Float(*r),
            LiteralValue::Char(c) => Self::Char(*c),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Text(s) => Self::Text(Rc::from(s.as_str())),
        }
    }
}

impl Value {
    /// Returns the truthiness of the value.
    ///
    /// `NIL` and `FALSE` are falsy; every other value, including `0` and
    /// empty text, is truthy.
    ///
    /// # Example
    /// ```
    /// use codelang::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            _ => true,
        }
    }

    /// Returns the declared type this value satisfies, or `None` for nil.
    #[must_use]
    pub const fn declared_type(&self) -> Option<DeclaredType> {
        match self {
            Self::Nil => None,
            Self::Integer(_) => Some(DeclaredType::Int),
            Self::Float(_) => Some(DeclaredType::Float),
            Self::Char(_) => Some(DeclaredType::Char),
            Self::Bool(_) => Some(DeclaredType::Bool),
            Self::Text(_) => Some(DeclaredType::String),
        }
    }

    /// Widens a numeric value to `f64`.
    ///
    /// # Returns
    /// - `Some(f64)`: For integers and floats.
    /// - `None`: For every non-numeric value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns true for integers and floats.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }
}

impl std::fmt::Display for Value {
    /// Renders the value the way `DISPLAY` prints it.
    ///
    /// Booleans are upper case, whole floats drop their fractional part and
    /// nil prints as `nil`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Bool(true) => write!(f, "TRUE"),
            Self::Bool(false) => write!(f, "FALSE"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
