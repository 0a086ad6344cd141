use std::convert::TryFrom;
use std::rc::Rc;

use super::{integer, single, two, Builtins};
use crate::{
    collect_arguments, evaluate_arguments, is_proper_list, make_list, Expression, Result,
    RuntimeError, Scope, Value,
};

pub fn register(builtins: &mut Builtins) {
    define!(builtins, "quote", |_, args| single("quote", collect_arguments(args)?));

    define!(builtins, "cons", |scope, args| {
        let (first, second) = two("cons", evaluate_arguments(scope, args)?)?;
        Ok(Expression::cons(first, second).into_value())
    });

    define!(builtins, "car", |scope, args| {
        let value = single("car", evaluate_arguments(scope, args)?)?;
        match value.as_deref() {
            Some(Expression::Pair(pair)) => Ok(pair.first.clone()),
            _ => Err(RuntimeError::WrongType { name: "car", expected: "a pair" }.into()),
        }
    });

    define!(builtins, "cdr", |scope, args| {
        let value = single("cdr", evaluate_arguments(scope, args)?)?;
        match value.as_deref() {
            Some(Expression::Pair(pair)) => Ok(pair.second.clone()),
            _ => Err(RuntimeError::WrongType { name: "cdr", expected: "a pair" }.into()),
        }
    });

    define!(builtins, "list", |scope, args| Ok(make_list(evaluate_arguments(scope, args)?)));

    define!(builtins, "list-ref", |scope, args| {
        let (elements, index) = list_and_index("list-ref", scope, args)?;
        match usize::try_from(index) {
            Ok(i) if i < elements.len() => Ok(elements[i].clone()),
            _ => Err(RuntimeError::IndexOutOfRange { index, length: elements.len() }.into()),
        }
    });

    define!(builtins, "list-tail", |scope, args| {
        let (elements, index) = list_and_index("list-tail", scope, args)?;
        match usize::try_from(index) {
            Ok(i) if i <= elements.len() => Ok(make_list(elements[i..].to_vec())),
            _ => Err(RuntimeError::IndexOutOfRange { index, length: elements.len() }.into()),
        }
    });
}

fn list_and_index(name: &'static str, scope: &Rc<Scope>, args: &Value) -> Result<(Vec<Value>, i64)> {
    let (list, index) = two(name, evaluate_arguments(scope, args)?)?;
    if !is_proper_list(&list) {
        return Err(RuntimeError::WrongType { name, expected: "a proper list" }.into());
    }
    Ok((collect_arguments(&list)?, integer(name, &index)?))
}

#[cfg(test)]
mod tests {
    use crate::{Error, Interpreter, NameError, RuntimeError};
    use pretty_assertions::assert_eq;

    fn run(text: &str) -> Result<String, Error> {
        Interpreter::new().run(text)
    }

    #[test]
    fn quote() -> Result<(), Error> {
        assert_eq!(run("(quote (1 2 3))")?, "(1 2 3)");
        assert_eq!(run("'(+ 1 2)")?, "(+ 1 2)");
        assert_eq!(run("(quote undefined-symbol)")?, "undefined-symbol");
        assert_eq!(run("'()")?, "()");
        assert_eq!(run("'(1 . 2)")?, "(1 . 2)");
        assert_eq!(
            run("(quote 1 2)"),
            Err(RuntimeError::WrongArity { name: "quote", expected: "1", got: 2 }.into())
        );
        assert_eq!(
            run("(quote)"),
            Err(RuntimeError::WrongArity { name: "quote", expected: "1", got: 0 }.into())
        );
        Ok(())
    }

    #[test]
    fn cons_car_cdr() -> Result<(), Error> {
        assert_eq!(run("(cons 1 2)")?, "(1 . 2)");
        assert_eq!(run("(cons 1 '(2 3))")?, "(1 2 3)");
        assert_eq!(run("(cons '(1) '())")?, "((1))");
        assert_eq!(run("(car '(1 2 3))")?, "1");
        assert_eq!(run("(cdr '(1 2 3))")?, "(2 3)");
        assert_eq!(run("(cdr '(1))")?, "()");
        assert_eq!(run("(cdr '(1 . 2))")?, "2");
        assert_eq!(run("(car '(() 1))")?, "()");
        assert_eq!(run("(car (cdr '(1 (2 3))))")?, "(2 3)");
        Ok(())
    }

    #[test]
    fn cons_car_cdr_errors() {
        assert_eq!(
            run("(car '())"),
            Err(RuntimeError::WrongType { name: "car", expected: "a pair" }.into())
        );
        assert_eq!(
            run("(cdr 5)"),
            Err(RuntimeError::WrongType { name: "cdr", expected: "a pair" }.into())
        );
        assert_eq!(
            run("(cons 1)"),
            Err(RuntimeError::WrongArity { name: "cons", expected: "2", got: 1 }.into())
        );
        assert_eq!(
            run("(car x)"),
            Err(RuntimeError::WrongType { name: "car", expected: "a pair" }.into())
        );
    }

    #[test]
    fn list() -> Result<(), Error> {
        assert_eq!(run("(list)")?, "()");
        assert_eq!(run("(list 1 (+ 1 1) 'c)")?, "(1 2 c)");
        assert_eq!(run("(list (list 1) (list))")?, "((1) ())");
        Ok(())
    }

    #[test]
    fn list_ref() -> Result<(), Error> {
        assert_eq!(run("(list-ref '(10 20 30) 0)")?, "10");
        assert_eq!(run("(list-ref (list 10 20 30) 2)")?, "30");
        assert_eq!(run("(list-ref '((a) b) 0)")?, "(a)");
        assert_eq!(
            run("(list-ref '(10 20 30) 3)"),
            Err(RuntimeError::IndexOutOfRange { index: 3, length: 3 }.into())
        );
        assert_eq!(
            run("(list-ref '(10 20 30) -1)"),
            Err(RuntimeError::IndexOutOfRange { index: -1, length: 3 }.into())
        );
        assert_eq!(
            run("(list-ref '() 0)"),
            Err(RuntimeError::IndexOutOfRange { index: 0, length: 0 }.into())
        );
        assert_eq!(
            run("(list-ref '(1 . 2) 0)"),
            Err(RuntimeError::WrongType { name: "list-ref", expected: "a proper list" }.into())
        );
        assert_eq!(
            run("(list-ref '(1 2) 'a)"),
            Err(RuntimeError::WrongType { name: "list-ref", expected: "integer arguments" }.into())
        );
        Ok(())
    }

    #[test]
    fn list_tail() -> Result<(), Error> {
        assert_eq!(run("(list-tail '(1 2 3) 0)")?, "(1 2 3)");
        assert_eq!(run("(list-tail '(1 2 3) 1)")?, "(2 3)");
        assert_eq!(run("(list-tail '(1 2 3) 3)")?, "()");
        assert_eq!(run("(list-tail '() 0)")?, "()");
        assert_eq!(
            run("(list-tail '(1 2 3) 4)"),
            Err(RuntimeError::IndexOutOfRange { index: 4, length: 3 }.into())
        );
        assert_eq!(
            run("(list-tail 7 0)"),
            Err(RuntimeError::WrongType { name: "list-tail", expected: "a proper list" }.into())
        );
        Ok(())
    }

    #[test]
    fn arguments_are_evaluated_first() {
        assert_eq!(
            run("(list 1 nope)"),
            Ok("(1 nope)".to_string())
        );
        assert_eq!(
            run("(cons (nope) 1)"),
            Err(Error::Name(NameError::Unbound("nope".to_string())))
        );
    }
}
