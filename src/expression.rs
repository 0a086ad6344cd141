use std::fmt;
use std::rc::Rc;

use super::{InternalError, Pair, Result, Scope};

/// A possibly empty expression. `None` is the empty list `()`.
pub type Value = Option<Rc<Expression>>;

pub type ApplyFn = fn(&Rc<Scope>, &Value) -> Result<Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Integer(i64),
    Boolean(bool),
    Symbol(String),
    Pair(Pair),
    Procedure(Procedure),
}

impl Expression {
    pub fn into_value(self) -> Value {
        Some(Rc::new(self))
    }

    pub fn symbol(name: &str) -> Self {
        Expression::Symbol(name.to_string())
    }

    pub fn cons(first: Value, second: Value) -> Self {
        Expression::Pair(Pair::new(first, second))
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Expression::Boolean(false))
    }

    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        Ok(out)
    }

    // A pair reached here always opens a list; pairs reached through
    // `second` are continued by `write_elements` instead.
    fn write_to(&self, out: &mut String) -> Result<()> {
        match self {
            Expression::Integer(value) => out.push_str(&value.to_string()),
            Expression::Boolean(true) => out.push_str("#t"),
            Expression::Boolean(false) => out.push_str("#f"),
            Expression::Symbol(name) => out.push_str(name),
            Expression::Pair(pair) => {
                out.push('(');
                write_elements(pair, out)?;
            }
            Expression::Procedure(procedure) => {
                return Err(InternalError::RenderProcedure(procedure.name).into())
            }
        }
        Ok(())
    }
}

fn write_elements(mut pair: &Pair, out: &mut String) -> Result<()> {
    loop {
        write_value(&pair.first, out)?;
        let next = match &pair.second {
            None => break,
            Some(next) => next,
        };
        match next.as_ref() {
            Expression::Pair(next) => {
                out.push(' ');
                pair = next;
            }
            tail => {
                out.push_str(" . ");
                tail.write_to(out)?;
                break;
            }
        }
    }
    out.push(')');
    Ok(())
}

fn write_value(value: &Value, out: &mut String) -> Result<()> {
    match value {
        None => {
            out.push_str("()");
            Ok(())
        }
        Some(expression) => expression.write_to(out),
    }
}

/// Renders an evaluation result; the empty list renders as `()`.
pub fn render(value: &Value) -> Result<String> {
    let mut out = String::new();
    write_value(value, &mut out)?;
    Ok(out)
}

/// A built-in callable. Two procedures are the same when their names match.
#[derive(Clone, Copy)]
pub struct Procedure {
    pub name: &'static str,
    apply: ApplyFn,
}

impl Procedure {
    pub fn new(name: &'static str, apply: ApplyFn) -> Self {
        Self { name, apply }
    }

    /// Hands the unevaluated argument tail to the procedure.
    pub fn apply(&self, scope: &Rc<Scope>, args: &Value) -> Result<Value> {
        (self.apply)(scope, args)
    }
}

impl PartialEq for Procedure {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<procedure {}>", self.name)
    }
}
