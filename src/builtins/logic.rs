use super::{boolean, is_false, single, Builtins};
use crate::{collect_arguments, evaluate_arguments};

pub fn register(builtins: &mut Builtins) {
    // Only #f is false; 0 and () are not.
    define!(builtins, "not", |scope, args| {
        let value = single("not", evaluate_arguments(scope, args)?)?;
        Ok(boolean(is_false(&value)))
    });

    // An empty-list argument stands for itself and is never evaluated.
    define!(builtins, "and", |scope, args| {
        let mut result = boolean(true);
        for argument in collect_arguments(args)? {
            result = match argument {
                Some(expression) => expression.eval(scope)?,
                None => None,
            };
            if is_false(&result) {
                break;
            }
        }
        Ok(result)
    });

    define!(builtins, "or", |scope, args| {
        let mut result = boolean(false);
        for argument in collect_arguments(args)? {
            result = match argument {
                Some(expression) => expression.eval(scope)?,
                None => None,
            };
            if !is_false(&result) {
                break;
            }
        }
        Ok(result)
    });
}
