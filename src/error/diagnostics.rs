use log::debug;

use crate::error::{LexError, ParseError, RuntimeError};

/// One reported error of any phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Raised by the lexer.
    Lex(LexError),
    /// Raised by the parser.
    Parse(ParseError),
    /// Raised by the evaluator.
    Runtime(RuntimeError),
}

impl Diagnostic {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl From<LexError> for Diagnostic {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Diagnostic {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Diagnostic {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

/// Collects the errors reported during one run.
///
/// Lexical and syntax errors mark the run as unfit for evaluation
/// ([`Diagnostics::had_error`]); runtime errors are tracked separately
/// ([`Diagnostics::had_runtime_error`]) since only evaluation raises them.
///
/// # Example
/// ```
/// use codelang::error::{Diagnostics, RuntimeError};
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.report(RuntimeError::DivisionByZero { line: 4 });
///
/// assert!(!diagnostics.had_error());
/// assert!(diagnostics.had_runtime_error());
/// assert_eq!(diagnostics.to_string(), "Error on line 4: Division by zero.");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Records an error.
    pub fn report(&mut self, error: impl Into<Diagnostic>) {
        let diagnostic = error.into();
        debug!("reported: {diagnostic}");
        self.entries.push(diagnostic);
    }

    /// Returns true if a lexical or syntax error was reported.
    #[must_use]
    pub fn had_error(&self) -> bool {
        self.entries
            .iter()
            .any(|d| matches!(d, Diagnostic::Lex(_) | Diagnostic::Parse(_)))
    }

    /// Returns true if a runtime error was reported.
    #[must_use]
    pub fn had_runtime_error(&self) -> bool {
        self.entries.iter().any(|d| matches!(d, Diagnostic::Runtime(_)))
    }

    /// Iterates over the reported errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of reported errors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, diagnostic) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}
