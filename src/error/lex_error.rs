#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
pub enum LexError {
    /// A character that starts no token.
    UnexpectedCharacter {
        /// The offending text.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A text literal reached the end of input without its closing `"`.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A character literal reached the end of the line without its closing `'`.
    UnterminatedCharacter {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A character literal held zero or several characters.
    InvalidCharacter {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A bracket escape named a character outside the escapable set, or was
    /// not closed by `]`.
    InvalidEscape {
        /// The character following `[`.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An integer literal does not fit in 64 bits.
    InvalidNumber {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl LexError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::UnterminatedCharacter { line }
            | Self::InvalidCharacter { line }
            | Self::InvalidEscape { line, .. }
            | Self::InvalidNumber { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "Error on line {line}: Unexpected character '{character}'.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string.")
            },
            Self::UnterminatedCharacter { line } => {
                write!(f, "Error on line {line}: Unterminated character.")
            },
            Self::InvalidCharacter { line } => {
                write!(f, "Error on line {line}: Invalid character.")
            },
            Self::InvalidEscape { character, line } => {
                write!(f, "Error on line {line}: Invalid escape character '{character}'.")
            },
            Self::InvalidNumber { literal, line } => {
                write!(f, "Error on line {line}: Invalid number literal {literal}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
