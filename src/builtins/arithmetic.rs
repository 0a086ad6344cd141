use std::rc::Rc;

use super::{boolean, integer, integers, single, Builtins};
use crate::{evaluate_arguments, Expression, Result, RuntimeError, Scope, Value};

type Operator = fn(i64, i64) -> std::result::Result<i64, RuntimeError>;

pub fn register(builtins: &mut Builtins) {
    define!(builtins, "+", |scope, args| {
        fold("+", scope, args, Some(0), |a, b| a.checked_add(b).ok_or(RuntimeError::Overflow("+")))
    });

    define!(builtins, "*", |scope, args| {
        fold("*", scope, args, Some(1), |a, b| a.checked_mul(b).ok_or(RuntimeError::Overflow("*")))
    });

    define!(builtins, "-", |scope, args| {
        fold("-", scope, args, None, |a, b| a.checked_sub(b).ok_or(RuntimeError::Overflow("-")))
    });

    define!(builtins, "/", |scope, args| {
        fold("/", scope, args, None, |a, b| match b {
            0 => Err(RuntimeError::DivisionByZero),
            _ => a.checked_div(b).ok_or(RuntimeError::Overflow("/")),
        })
    });

    define!(builtins, "min", |scope, args| fold("min", scope, args, None, |a, b| Ok(a.min(b))));
    define!(builtins, "max", |scope, args| fold("max", scope, args, None, |a, b| Ok(a.max(b))));

    define!(builtins, "=", |scope, args| compare("=", scope, args, |a, b| a == b));
    define!(builtins, "<", |scope, args| compare("<", scope, args, |a, b| a < b));
    define!(builtins, ">", |scope, args| compare(">", scope, args, |a, b| a > b));
    define!(builtins, "<=", |scope, args| compare("<=", scope, args, |a, b| a <= b));
    define!(builtins, ">=", |scope, args| compare(">=", scope, args, |a, b| a >= b));

    define!(builtins, "abs", |scope, args| {
        let value = integer("abs", &single("abs", evaluate_arguments(scope, args)?)?)?;
        let value = value.checked_abs().ok_or(RuntimeError::Overflow("abs"))?;
        Ok(Expression::Integer(value).into_value())
    });
}

/// Left fold over integer arguments. Without a seed the first argument
/// starts the fold and at least one argument is required.
fn fold(
    name: &'static str,
    scope: &Rc<Scope>,
    args: &Value,
    seed: Option<i64>,
    operator: Operator,
) -> Result<Value> {
    let values = integers(name, &evaluate_arguments(scope, args)?)?;
    let (init, rest) = match (seed, values.split_first()) {
        (Some(seed), _) => (seed, &values[..]),
        (None, Some((first, rest))) => (*first, rest),
        (None, None) => {
            return Err(RuntimeError::WrongArity { name, expected: "at least 1", got: 0 }.into())
        }
    };
    let result = rest.iter().try_fold(init, |acc, &value| operator(acc, value))?;
    Ok(Expression::Integer(result).into_value())
}

/// True iff every adjacent pair of arguments satisfies `relation`.
fn compare(
    name: &'static str,
    scope: &Rc<Scope>,
    args: &Value,
    relation: fn(i64, i64) -> bool,
) -> Result<Value> {
    let values = integers(name, &evaluate_arguments(scope, args)?)?;
    Ok(boolean(values.windows(2).all(|pair| relation(pair[0], pair[1]))))
}
