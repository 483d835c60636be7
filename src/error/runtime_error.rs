use crate::interpreter::value::declared_type::DeclaredType;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An assigned or scanned value does not match the variable's declared
    /// type.
    TypeMismatch {
        /// The name of the variable.
        name:     String,
        /// The type the variable was declared with.
        expected: DeclaredType,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A declaration's initializer does not match the declared type.
    InitializerMismatch {
        /// The name of the variable.
        name:     String,
        /// The type named by the declaration keyword.
        expected: DeclaredType,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operand was not numeric.
    ExpectedNumber {
        /// The operator applied.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A binary operand was not numeric.
    ExpectedNumbers {
        /// The operator applied.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A line read by `SCAN` held a different number of fields than targets.
    ScanFieldCount {
        /// The number of target variables.
        expected: usize,
        /// The number of fields read.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading program input or writing program output failed.
    Io {
        /// Details reported by the failing reader or writer.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::InitializerMismatch { line, .. }
            | Self::DivisionByZero { line }
            | Self::ExpectedNumber { line, .. }
            | Self::ExpectedNumbers { line, .. }
            | Self::ScanFieldCount { line, .. }
            | Self::Overflow { line }
            | Self::Io { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::TypeMismatch { expected, line, .. } => {
                write!(f, "Error on line {line}: Input must be of type {expected}.")
            },
            Self::InitializerMismatch { name, expected, line } => write!(f,
                                                                         "Error on line {line}: Variable '{name}' must be initialized with a value of type {expected}."),

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::ExpectedNumber { operator, line } => {
                write!(f, "Error on line {line}: Operand of '{operator}' must be a number.")
            },
            Self::ExpectedNumbers { operator, line } => {
                write!(f, "Error on line {line}: Operands of '{operator}' must be numbers.")
            },
            Self::ScanFieldCount { expected, found, line } => write!(f,
                                                                     "Error on line {line}: Expected {expected} input value(s) but found {found}."),

            Self::Overflow { line } => write!(f, "Error on line {line}: Integer overflow."),
            Self::Io { details, line } => {
                write!(f, "Error on line {line}: Input/output failure: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
