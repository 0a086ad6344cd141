use std::rc::Rc;

use tracing::trace;

use super::{Expression, InternalError, Result, RuntimeError, Scope, Value};

impl Expression {
    /// Atoms evaluate to themselves. A pair calls the procedure its head
    /// symbol names with the unevaluated rest of the chain.
    pub fn eval(self: &Rc<Self>, scope: &Rc<Scope>) -> Result<Value> {
        match self.as_ref() {
            Expression::Integer(_) | Expression::Boolean(_) | Expression::Symbol(_) => {
                Ok(Some(Rc::clone(self)))
            }
            Expression::Pair(pair) => {
                let name = match pair.first.as_deref() {
                    None => return Err(RuntimeError::CallEmpty.into()),
                    Some(Expression::Symbol(name)) => name,
                    Some(_) => return Err(RuntimeError::NotCallable.into()),
                };
                match scope.look_up(name)?.as_deref() {
                    Some(Expression::Procedure(procedure)) => {
                        trace!(procedure = procedure.name, "apply");
                        procedure.apply(scope, &pair.second)
                    }
                    _ => Err(RuntimeError::NotAProcedure(name.clone()).into()),
                }
            }
            Expression::Procedure(procedure) => {
                Err(InternalError::EvalProcedure(procedure.name).into())
            }
        }
    }
}

/// The elements of an argument chain, unevaluated and in order.
pub fn collect_arguments(tail: &Value) -> Result<Vec<Value>> {
    match tail.as_deref() {
        None => Ok(vec![]),
        Some(Expression::Pair(pair)) => match pair.elements() {
            (elements, None) => Ok(elements),
            (_, Some(_)) => Err(RuntimeError::ImproperArguments.into()),
        },
        Some(_) => Err(RuntimeError::ImproperArguments.into()),
    }
}

/// Like `collect_arguments`, with every element evaluated left to right.
pub fn evaluate_arguments(scope: &Rc<Scope>, tail: &Value) -> Result<Vec<Value>> {
    collect_arguments(tail)?
        .iter()
        .map(|argument| match argument {
            Some(expression) => expression.eval(scope),
            None => Err(RuntimeError::EmptyArgument.into()),
        })
        .collect()
}
