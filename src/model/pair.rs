use std::rc::Rc;

use crate::{Expression, Value};

/// A two-slot cell. `None` in either slot is the empty list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pair {
    pub first: Value,
    pub second: Value,
}

impl Pair {
    pub fn new(first: Value, second: Value) -> Self {
        Self { first, second }
    }

    /// Elements of the chain starting at this pair, in order, followed by the
    /// terminal value: `None` for a proper list, the dotted tail otherwise.
    pub fn elements(&self) -> (Vec<Value>, Value) {
        let mut elements = vec![self.first.clone()];
        let mut rest = &self.second;
        while let Some(expression) = rest {
            match expression.as_ref() {
                Expression::Pair(pair) => {
                    elements.push(pair.first.clone());
                    rest = &pair.second;
                }
                _ => return (elements, rest.clone()),
            }
        }
        (elements, None)
    }
}

/// Builds a fresh proper list holding `elements` in order.
pub fn make_list<I>(elements: I) -> Value
where
    I: IntoIterator<Item = Value>,
    I::IntoIter: DoubleEndedIterator,
{
    elements.into_iter().rev().fold(None, |tail, element| {
        Some(Rc::new(Expression::Pair(Pair::new(element, tail))))
    })
}

/// True iff following `second` from pair to pair ends in the empty list.
pub fn is_proper_list(mut value: &Value) -> bool {
    while let Some(expression) = value {
        match expression.as_ref() {
            Expression::Pair(pair) => value = &pair.second,
            _ => return false,
        }
    }
    true
}
