use crate::{
    ast::{Declaration, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, declared_type::DeclaredType},
    },
};

impl Context<'_> {
    /// Executes a single statement.
    ///
    /// Handles blocks, typed declarations, control flow, program input and
    /// output, and plain expression statements.
    ///
    /// # Returns
    /// `Ok(())` once the statement completed, or the first runtime error
    /// raised while executing it.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Block { statements, .. } => self.execute_block(statements),
            Statement::Expression { expr, .. } => self.evaluate(expr).map(|_| ()),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            },
            Statement::While { condition, body, .. } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            },
            Statement::Display { value, line } => {
                let value = self.evaluate(value)?;
                self.display(&value, *line)
            },
            Statement::Scan { targets, line } => self.scan(targets, *line),
            Statement::MultiVar { names, initializers, .. } => {
                for (name, initializer) in names.iter().zip(initializers) {
                    let value = match initializer {
                        Some(expr) => self.evaluate(expr)?,
                        None => Value::Nil,
                    };
                    self.environment.assign(name, value)?;
                }
                Ok(())
            },
            Statement::Int(declaration) => self.define_variable(DeclaredType::Int, declaration),
            Statement::Char(declaration) => self.define_variable(DeclaredType::Char, declaration),
            Statement::Bool(declaration) => self.define_variable(DeclaredType::Bool, declaration),
            Statement::Float(declaration) => self.define_variable(DeclaredType::Float, declaration),
            Statement::String(declaration) => {
                self.define_variable(DeclaredType::String, declaration)
            },
        }
    }

    /// Executes statements inside a new local scope.
    ///
    /// The scope is removed afterwards, also when a statement fails.
    pub fn execute_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        self.environment.push_scope();
        let result = statements.iter()
                               .try_for_each(|statement| self.execute(statement));
        self.environment.pop_scope();
        result
    }

    /// Defines a typed variable in the innermost scope.
    ///
    /// The initializer, if any, must produce a value of exactly the declared
    /// type. Without one, the variable holds `NIL` until first assigned.
    fn define_variable(&mut self,
                       declared_type: DeclaredType,
                       declaration: &Declaration)
                       -> EvalResult<()> {
        let value = match &declaration.initializer {
            Some(initializer) => {
                let value = self.evaluate(initializer)?;
                if !declared_type.admits(&value) {
                    return Err(RuntimeError::InitializerMismatch { name:     declaration.name
                                                                                        .lexeme
                                                                                        .clone(),
                                                                   expected: declared_type,
                                                                   line:     declaration.name.line, });
                }
                value
            },
            None => Value::Nil,
        };

        self.environment
            .define(&declaration.name.lexeme, value, declared_type);
        Ok(())
    }
}
