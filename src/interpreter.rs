/// The evaluator module executes statements and computes expression values.
///
/// The evaluator walks the statement tree produced by the parser, evaluates
/// expressions, enforces declared variable types, and performs program input
/// and output. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates expressions, including integer/float promotion and text
///   joining.
/// - Executes declarations, blocks and control flow.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// Variable scopes.
///
/// Holds the chain of nested scopes that maps each variable to its value and
/// declared type. A scope lives exactly as long as the block that created it.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   line.
/// - Decodes numeric, character, text and bracket-escape literals.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds statements from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs the statement tree of the program, checking its block structure
/// and the placement of declarations.
///
/// # Responsibilities
/// - Converts tokens into expression and statement nodes.
/// - Validates grammar and syntax, reporting errors with line info.
/// - Recovers after an error so later errors are reported in the same pass.
pub mod parser;
/// Lexical tokens.
///
/// Defines `Token`, the classified unit passed from the lexer to the parser.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution (integers,
/// floating-point numbers, characters, booleans, text and nil) and the
/// declared types that variables are bound with.
///
/// # Responsibilities
/// - Defines the `Value` enum and its display form.
/// - Defines `DeclaredType` and which values each declared type admits.
pub mod value;
