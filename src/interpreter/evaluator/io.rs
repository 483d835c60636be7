use log::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        token::Token,
        value::core::Value,
    },
};

impl Context<'_> {
    /// Writes a value's display text followed by a newline.
    ///
    /// # Errors
    /// `RuntimeError::Io` if the output writer fails.
    pub fn display(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{value}").map_err(|e| io_error(&e, line))
    }

    /// Reads one line of input and assigns its comma separated fields to
    /// `targets`.
    ///
    /// Fields are trimmed and typed by [`infer_value`]. Each inferred type
    /// must equal the target's declared type. End of input reads as an empty
    /// line.
    ///
    /// # Errors
    /// - `ScanFieldCount` if the number of fields differs from the number of
    ///   targets.
    /// - `UndefinedVariable` if a target is not declared.
    /// - `TypeMismatch` if a field's inferred type differs from its target's.
    /// - `Io` if the input reader fails.
    pub fn scan(&mut self, targets: &[Token], line: usize) -> EvalResult<()> {
        let mut buffer = String::new();
        self.input
            .read_line(&mut buffer)
            .map_err(|e| io_error(&e, line))?;

        let text = buffer.trim_end_matches(['\n', '\r']);
        debug!("scanned input line {text:?}");

        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        if fields.len() != targets.len() {
            return Err(RuntimeError::ScanFieldCount { expected: targets.len(),
                                                      found: fields.len(),
                                                      line });
        }

        for (target, field) in targets.iter().zip(fields) {
            let value = infer_value(field);
            let expected = self.environment.declared_type(target)?;
            trace!("field {field:?} for '{}' inferred as {:?}", target.lexeme, value.declared_type());

            if !expected.admits(&value) {
                return Err(RuntimeError::TypeMismatch { name: target.lexeme.clone(),
                                                        expected,
                                                        line });
            }
            self.environment.assign(target, value)?;
        }

        Ok(())
    }
}

/// Infers a runtime value from one field of scanned input.
///
/// Tries, in order: integer, floating point, a single character, the boolean
/// words `TRUE` / `FALSE` (bare or in double quotes), and finally text.
///
/// # Example
/// ```
/// use codelang::interpreter::{evaluator::io::infer_value, value::core::Value};
///
/// assert_eq!(infer_value("42"), Value::Integer(42));
/// assert_eq!(infer_value("4.5"), Value::Float(4.5));
/// assert_eq!(infer_value("x"), Value::Char('x'));
/// assert_eq!(infer_value("\"TRUE\""), Value::Bool(true));
/// assert_eq!(infer_value("hello"), Value::from("hello"));
/// ```
#[must_use]
pub fn infer_value(field: &str) -> Value {
    if let Ok(n) = field.parse::<i64>() {
        return Value::Integer(n);
    }

    if field.bytes().any(|b| b.is_ascii_digit())
       && let Ok(r) = field.parse::<f64>()
    {
        return Value::Float(r);
    }

    let mut chars = field.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Value::Char(c);
    }

    match field {
        "TRUE" | "\"TRUE\"" => Value::Bool(true),
        "FALSE" | "\"FALSE\"" => Value::Bool(false),
        _ => Value::from(field),
    }
}

fn io_error(error: &std::io::Error, line: usize) -> RuntimeError {
    RuntimeError::Io { details: error.to_string(),
                       line }
}
