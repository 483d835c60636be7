#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A required token was missing.
    UnexpectedToken {
        /// What the parser was looking for, e.g. `Expect ')' after condition.`
        message: &'static str,
        /// The token encountered instead.
        found:   String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// No expression could start at the current token.
    ExpectedExpression {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The left-hand side of `=` is not a variable.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A typed declaration followed an executable statement.
    DeclarationAfterExecutable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A second `BEGIN CODE` block was found.
    MultipleCodeBlocks {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The program holds no `BEGIN CODE` block at all.
    MissingCodeBlock {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Code was found outside the `BEGIN CODE` block.
    CodeOutsideBlock {
        /// The token encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::InvalidAssignmentTarget { line }
            | Self::DeclarationAfterExecutable { line }
            | Self::MultipleCodeBlocks { line }
            | Self::MissingCodeBlock { line }
            | Self::CodeOutsideBlock { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { message, found, line } => {
                write!(f, "Error on line {line} at {found}: {message}")
            },

            Self::ExpectedExpression { found, line } => {
                write!(f, "Error on line {line} at {found}: Expect expression.")
            },

            Self::InvalidAssignmentTarget { line } => {
                write!(f, "Error on line {line}: Invalid assignment target.")
            },

            Self::DeclarationAfterExecutable { line } => write!(f,
                                                                "Error on line {line}: Cannot declare variables after executable code."),

            Self::MultipleCodeBlocks { line } => write!(f,
                                                        "Error on line {line}: Cannot allow multiple BEGIN CODE and END CODE declarations."),

            Self::MissingCodeBlock { line } => {
                write!(f, "Error on line {line}: Expect 'BEGIN CODE' at start of program.")
            },

            Self::CodeOutsideBlock { found, line } => {
                write!(f, "Error on line {line} at {found}: Expect 'BEGIN CODE' before code.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
