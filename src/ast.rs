use crate::interpreter::{token::Token, value::declared_type::DeclaredType};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers every constant that can appear directly in source
/// code: numbers, characters, booleans, text and `NIL`. The lexer stores the
/// decoded value on literal tokens and the parser copies it into
/// [`Expr::Literal`] nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The absent value, written `NIL`.
    Nil,
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A single character, written `'c'` or as a bracket escape `[c]`.
    Char(char),
    /// A boolean literal, written `TRUE`, `FALSE`, `"TRUE"` or `"FALSE"`.
    Bool(bool),
    /// A text literal, written between double quotes.
    Text(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<char> for LiteralValue {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every composite node owns its children. The tree is built once by the
/// parser and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A prefix operation (`NOT`, `-`, `+` or `$`).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// An arithmetic, comparison, equality or text operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A short-circuiting `AND` / `OR`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand, evaluated only when the left one does not decide.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// The identifier token naming the variable.
        name: Token,
    },
    /// Assignment of a new value to an existing variable.
    Assign {
        /// The identifier token naming the target.
        name:  Token,
        /// The value being assigned.
        value: Box<Self>,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use codelang::ast::{Expr, LiteralValue};
    ///
    /// let expr = Expr::Literal { value: LiteralValue::Integer(7),
    ///                            line:  5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Grouping { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Logical { line, .. } => *line,
            Self::Variable { name } | Self::Assign { name, .. } => name.line,
        }
    }
}

/// A single typed declaration: `INT x` or `INT x = <expression>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The declared variable.
    pub name:        Token,
    /// The optional initializer.
    pub initializer: Option<Expr>,
}

/// Represents a statement.
///
/// A program is the single `BEGIN CODE … END CODE` block; every other
/// statement lives inside it.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A sequence of statements run in a fresh scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// An expression evaluated for its side effect.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `IF (cond) BEGIN IF … END IF [ELSE …]`.
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statement run when the condition is truthy.
        then_branch: Box<Self>,
        /// Statement run otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `WHILE (cond) BEGIN WHILE … END WHILE`, also the target of `FOR`.
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `DISPLAY: <expression>`.
    Display {
        /// The expression to print.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `SCAN: a, b, …`.
    Scan {
        /// The variables receiving the comma separated input fields.
        targets: Vec<Token>,
        /// Line number in the source code.
        line:    usize,
    },
    /// `INT` declaration.
    Int(Declaration),
    /// `CHAR` declaration.
    Char(Declaration),
    /// `BOOL` declaration.
    Bool(Declaration),
    /// `FLOAT` declaration.
    Float(Declaration),
    /// `STRING` declaration.
    String(Declaration),
    /// Untyped multi-assignment of existing variables. The parser never
    /// produces it; it is executed as a type-checked assignment per name.
    MultiVar {
        /// The assigned variables.
        names:        Vec<Token>,
        /// One optional initializer per name.
        initializers: Vec<Option<Expr>>,
        /// Line number in the source code.
        line:         usize,
    },
}

impl Statement {
    /// Builds the typed declaration statement for `declared_type`.
    #[must_use]
    pub fn declaration(declared_type: DeclaredType, declaration: Declaration) -> Self {
        match declared_type {
            DeclaredType::Int => Self::Int(declaration),
            DeclaredType::Char => Self::Char(declaration),
            DeclaredType::Bool => Self::Bool(declaration),
            DeclaredType::Float => Self::Float(declaration),
            DeclaredType::String => Self::String(declaration),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Text concatenation (`&`)
    Concat,
    /// Concatenation with an interposed newline (`$`)
    LineBreak,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`<>`)
    NotEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (`NOT x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Arithmetic identity (`+x`).
    Plus,
    /// Newline prefix (`$ x`).
    LineBreak,
}

/// Represents a short-circuiting logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// `AND`
    And,
    /// `OR`
    Or,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Concat, Div, Equal, Greater, GreaterEqual, Less, LessEqual, LineBreak, Mod, Mul,
            NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Concat => "&",
            LineBreak => "$",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "<>",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Not => "NOT",
            Self::Negate => "-",
            Self::Plus => "+",
            Self::LineBreak => "$",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
        }
    }
}
