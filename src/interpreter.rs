use std::rc::Rc;

use tracing::{debug, instrument};

use super::{parser, Builtins, Result, RuntimeError, Scope, Value};

/// Parses, evaluates and renders one expression at a time against a
/// persistent global scope.
pub struct Interpreter {
    global: Rc<Scope>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_builtins(&Builtins::standard())
    }

    pub fn with_builtins(builtins: &Builtins) -> Self {
        Self {
            global: Scope::global(builtins),
        }
    }

    /// Binds `name` in the global scope, visible to every later evaluation.
    pub fn define(&self, name: &str, value: Value) {
        self.global.define(name, value);
    }

    #[instrument(level = "debug", skip(self))]
    pub fn parse(&self, text: &str) -> Result<Value> {
        Ok(parser::parse(text)?)
    }

    /// Evaluates in a fresh scope chained to the global one.
    #[instrument(level = "debug", skip_all)]
    pub fn evaluate(&self, expression: &Value) -> Result<Value> {
        match expression {
            None => Err(RuntimeError::EvalEmpty.into()),
            Some(expression) => expression.eval(&Scope::child(&self.global)),
        }
    }

    pub fn render(&self, value: &Value) -> Result<String> {
        super::render(value)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn run(&self, text: &str) -> Result<String> {
        let result = self
            .parse(text)
            .and_then(|expression| self.evaluate(&expression))
            .and_then(|value| self.render(&value));
        if let Err(error) = &result {
            debug!(%error, "evaluation failed");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Expression, InternalError, NameError, SyntaxError};
    use pretty_assertions::assert_eq;

    #[test]
    fn run() -> Result<()> {
        let interpreter = Interpreter::new();
        assert_eq!(interpreter.run("(+ 1 2)")?, "3");
        assert_eq!(interpreter.run("  (list 1 (list 2 3) #t)  ")?, "(1 (2 3) #t)");
        assert_eq!(interpreter.run("42")?, "42");
        assert_eq!(interpreter.run("foo")?, "foo");
        Ok(())
    }

    #[test]
    fn failures_by_kind() {
        let interpreter = Interpreter::new();
        assert!(matches!(interpreter.run("(1 2 . 3 4)"), Err(Error::Syntax(_))));
        assert!(matches!(interpreter.run("(+ 1 2"), Err(Error::Syntax(_))));
        assert_eq!(
            interpreter.run("(undefined 1)"),
            Err(NameError::Unbound("undefined".to_string()).into())
        );
        assert_eq!(interpreter.run("()"), Err(RuntimeError::EvalEmpty.into()));
        assert!(matches!(interpreter.run("(car 1)"), Err(Error::Runtime(_))));
    }

    #[test]
    fn parse_and_evaluate_separately() -> Result<()> {
        let interpreter = Interpreter::new();
        let expression = interpreter.parse("(cdr '(1 2 3))")?;
        assert_eq!(interpreter.render(&expression)?, "(cdr (quote (1 2 3)))");
        let value = interpreter.evaluate(&expression)?;
        assert_eq!(interpreter.render(&value)?, "(2 3)");
        // evaluating the same tree again gives the same result
        assert_eq!(interpreter.evaluate(&expression)?, value);
        Ok(())
    }

    #[test]
    fn trailing_input() {
        let interpreter = Interpreter::new();
        match interpreter.parse("(+ 1 2) 3") {
            Err(Error::Syntax(error)) => {
                assert_eq!(error.data, SyntaxError::TrailingInput(crate::Token::Constant(3)))
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn host_bindings() -> Result<()> {
        let interpreter = Interpreter::new();
        let plus = interpreter.global.look_up("+")?;
        interpreter.define("add", plus.clone());
        assert_eq!(interpreter.run("(add 2 3)")?, "5");

        // procedures cannot be rendered
        assert_eq!(
            interpreter.render(&plus),
            Err(InternalError::RenderProcedure("+").into())
        );
        interpreter.define("seven", Expression::Integer(7).into_value());
        assert_eq!(
            interpreter.run("(seven)"),
            Err(RuntimeError::NotAProcedure("seven".to_string()).into())
        );
        Ok(())
    }

    #[test]
    fn instances_are_isolated() -> Result<()> {
        let custom = Interpreter::with_builtins(&Builtins::empty());
        assert_eq!(
            custom.run("(+ 1 2)"),
            Err(NameError::Unbound("+".to_string()).into())
        );

        let first = Interpreter::new();
        let second = Interpreter::new();
        first.define("x", Expression::Integer(1).into_value());
        assert!(first.global.look_up("x").is_ok());
        assert!(second.global.look_up("x").is_err());
        Ok(())
    }
}
