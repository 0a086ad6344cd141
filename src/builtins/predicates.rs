use super::{boolean, single, Builtins};
use crate::{evaluate_arguments, is_proper_list, Expression};

pub fn register(builtins: &mut Builtins) {
    define!(builtins, "number?", |scope, args| {
        let value = single("number?", evaluate_arguments(scope, args)?)?;
        Ok(boolean(matches!(value.as_deref(), Some(Expression::Integer(_)))))
    });

    define!(builtins, "boolean?", |scope, args| {
        let value = single("boolean?", evaluate_arguments(scope, args)?)?;
        Ok(boolean(matches!(value.as_deref(), Some(Expression::Boolean(_)))))
    });

    define!(builtins, "pair?", |scope, args| {
        let value = single("pair?", evaluate_arguments(scope, args)?)?;
        Ok(boolean(matches!(value.as_deref(), Some(Expression::Pair(_)))))
    });

    define!(builtins, "symbol?", |scope, args| {
        let value = single("symbol?", evaluate_arguments(scope, args)?)?;
        Ok(boolean(matches!(value.as_deref(), Some(Expression::Symbol(_)))))
    });

    define!(builtins, "null?", |scope, args| {
        let value = single("null?", evaluate_arguments(scope, args)?)?;
        Ok(boolean(value.is_none()))
    });

    define!(builtins, "list?", |scope, args| {
        let value = single("list?", evaluate_arguments(scope, args)?)?;
        Ok(boolean(is_proper_list(&value)))
    });
}
