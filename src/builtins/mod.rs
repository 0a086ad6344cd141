//! The built-in procedure table.
//!
//! Every procedure receives the caller's scope and its argument chain
//! unevaluated. Ordinary procedures evaluate the whole chain up front with
//! `evaluate_arguments`; the special forms `quote`, `and` and `or` walk it
//! with `collect_arguments` and decide themselves what to evaluate.

use std::collections::HashMap;

use super::{ApplyFn, Expression, Procedure, Result, RuntimeError, Value};

macro_rules! define {
    ($builtins:expr, $name:literal, $function:expr) => {
        $builtins.define($name, $function);
    };
}

mod arithmetic;
mod list;
mod logic;
mod predicates;

/// An immutable name-to-procedure table, installed into the root scope of
/// an interpreter when it is constructed.
#[derive(Clone, Default)]
pub struct Builtins {
    procedures: HashMap<&'static str, Procedure>,
}

impl Builtins {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The full library: predicates, arithmetic, logic and list procedures.
    pub fn standard() -> Self {
        let mut builtins = Self::empty();
        predicates::register(&mut builtins);
        arithmetic::register(&mut builtins);
        logic::register(&mut builtins);
        list::register(&mut builtins);
        builtins
    }

    /// Adds `apply` under `name`, replacing any procedure already there.
    pub fn with(mut self, name: &'static str, apply: ApplyFn) -> Self {
        self.define(name, apply);
        self
    }

    fn define(&mut self, name: &'static str, apply: ApplyFn) {
        self.procedures.insert(name, Procedure::new(name, apply));
    }

    pub fn get(&self, name: &str) -> Option<&Procedure> {
        self.procedures.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Procedure> {
        self.procedures.values()
    }

    pub fn len(&self) -> usize {
        self.procedures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procedures.is_empty()
    }
}

fn boolean(value: bool) -> Value {
    Expression::Boolean(value).into_value()
}

fn is_false(value: &Value) -> bool {
    value.as_deref().map_or(false, Expression::is_false)
}

fn single(name: &'static str, mut arguments: Vec<Value>) -> Result<Value> {
    match arguments.len() {
        1 => Ok(arguments.pop().flatten()),
        got => Err(RuntimeError::WrongArity { name, expected: "1", got }.into()),
    }
}

fn two(name: &'static str, arguments: Vec<Value>) -> Result<(Value, Value)> {
    let got = arguments.len();
    let mut arguments = arguments.into_iter();
    match (arguments.next(), arguments.next(), arguments.next()) {
        (Some(first), Some(second), None) => Ok((first, second)),
        _ => Err(RuntimeError::WrongArity { name, expected: "2", got }.into()),
    }
}

fn integer(name: &'static str, value: &Value) -> Result<i64> {
    match value.as_deref() {
        Some(Expression::Integer(value)) => Ok(*value),
        _ => Err(RuntimeError::WrongType { name, expected: "integer arguments" }.into()),
    }
}

fn integers(name: &'static str, values: &[Value]) -> Result<Vec<i64>> {
    values.iter().map(|value| integer(name, value)).collect()
}
