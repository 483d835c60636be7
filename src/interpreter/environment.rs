use std::collections::HashMap;

use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        token::Token,
        value::{core::Value, declared_type::DeclaredType},
    },
};

/// A variable's current value together with the type it was declared with.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The current value; `Nil` until the variable is first assigned.
    pub value:         Value,
    /// The declared type, fixed for the binding's lifetime.
    pub declared_type: DeclaredType,
}

/// The chain of active scopes.
///
/// The last scope is the innermost one. Lookup and assignment walk from the
/// innermost scope outward; definition always targets the innermost scope.
#[derive(Debug, Clone)]
pub struct Environment {
    scopes: Vec<HashMap<String, Binding>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding a single empty root scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()] }
    }

    /// Pushes a new local scope.
    ///
    /// # Example
    /// ```
    /// use codelang::interpreter::environment::Environment;
    ///
    /// let mut environment = Environment::new();
    /// environment.push_scope();
    ///
    /// assert_eq!(environment.depth(), 2);
    /// ```
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
        trace!("entered scope {}", self.scopes.len());
    }

    /// Removes the innermost local scope and every binding in it.
    pub fn pop_scope(&mut self) {
        trace!("leaving scope {}", self.scopes.len());
        self.scopes.pop();
    }

    /// Returns the number of active scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Defines a variable in the innermost scope.
    ///
    /// Redefining a name already bound in the same scope replaces both its
    /// value and its declared type.
    pub fn define(&mut self, name: &str, value: Value, declared_type: DeclaredType) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(),
                         Binding { value,
                                   declared_type });
        }
    }

    /// Retrieves a variable's value.
    ///
    /// # Returns
    /// - `Ok(Value)`: The value bound in the nearest scope defining `name`.
    /// - `Err(RuntimeError::UndefinedVariable)`: If no active scope defines it.
    ///
    /// # Example
    /// ```
    /// use codelang::interpreter::{
    ///     environment::Environment,
    ///     lexer::TokenKind,
    ///     token::Token,
    ///     value::{core::Value, declared_type::DeclaredType},
    /// };
    ///
    /// let mut environment = Environment::new();
    /// environment.define("x", Value::Integer(10), DeclaredType::Int);
    /// environment.push_scope();
    ///
    /// let name = Token::new(TokenKind::Identifier, "x", 1);
    /// assert_eq!(environment.get(&name).unwrap(), Value::Integer(10));
    /// ```
    pub fn get(&self, name: &Token) -> EvalResult<Value> {
        self.lookup(name).map(|binding| binding.value.clone())
    }

    /// Returns the declared type of the nearest binding of `name`.
    pub fn declared_type(&self, name: &Token) -> EvalResult<DeclaredType> {
        self.lookup(name).map(|binding| binding.declared_type)
    }

    /// Assigns a new value to the nearest binding of `name`.
    ///
    /// The value must satisfy the binding's declared type; the binding is left
    /// unchanged otherwise.
    ///
    /// # Returns
    /// - `Ok(())`: If the value was stored.
    /// - `Err(RuntimeError::UndefinedVariable)`: If no active scope defines
    ///   `name`.
    /// - `Err(RuntimeError::TypeMismatch)`: If the value has the wrong type.
    pub fn assign(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        let binding = self.scopes
                          .iter_mut()
                          .rev()
                          .find_map(|scope| scope.get_mut(&name.lexeme))
                          .ok_or_else(|| undefined(name))?;

        if !binding.declared_type.admits(&value) {
            return Err(RuntimeError::TypeMismatch { name:     name.lexeme.clone(),
                                                    expected: binding.declared_type,
                                                    line:     name.line, });
        }

        binding.value = value;
        Ok(())
    }

    fn lookup(&self, name: &Token) -> EvalResult<&Binding> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(&name.lexeme))
            .ok_or_else(|| undefined(name))
    }
}

fn undefined(name: &Token) -> RuntimeError {
    RuntimeError::UndefinedVariable { name: name.lexeme.clone(),
                                      line: name.line, }
}
