use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::trace;

use super::{Builtins, Expression, NameError, Value};

/// One link of the lexical lookup chain.
#[derive(Debug, Default)]
pub struct Scope {
    symbols: RefCell<HashMap<String, Value>>,
    parent: Option<Rc<Scope>>,
}

impl Scope {
    /// A root scope holding every procedure of `builtins`.
    pub fn global(builtins: &Builtins) -> Rc<Self> {
        let symbols = builtins
            .iter()
            .map(|procedure| {
                (procedure.name.to_string(), Expression::Procedure(*procedure).into_value())
            })
            .collect();
        Rc::new(Self {
            symbols: RefCell::new(symbols),
            parent: None,
        })
    }

    pub fn child(parent: &Rc<Scope>) -> Rc<Self> {
        Rc::new(Self {
            symbols: RefCell::default(),
            parent: Some(Rc::clone(parent)),
        })
    }

    pub fn define(&self, name: &str, value: Value) {
        self.symbols.borrow_mut().insert(name.to_string(), value);
    }

    /// Rebinds `name` in this scope. Without binding forms there is nothing
    /// that tells assignment from definition, so this behaves like `define`.
    pub fn reset(&self, name: &str, value: Value) {
        self.symbols.borrow_mut().insert(name.to_string(), value);
    }

    pub fn look_up(&self, name: &str) -> Result<Value, NameError> {
        let mut scope = self;
        loop {
            if let Some(value) = scope.symbols.borrow().get(name) {
                return Ok(value.clone());
            }
            match &scope.parent {
                Some(parent) => scope = parent.as_ref(),
                None => {
                    trace!(symbol = name, "unbound symbol");
                    return Err(NameError::Unbound(name.to_string()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn int(value: i64) -> Value {
        Expression::Integer(value).into_value()
    }

    #[test]
    fn nearest_binding_wins() -> Result<(), NameError> {
        let global = Scope::global(&Builtins::empty());
        global.define("x", int(1));
        global.define("y", int(2));

        let local = Scope::child(&global);
        local.define("x", int(10));

        assert_eq!(local.look_up("x")?, int(10));
        assert_eq!(local.look_up("y")?, int(2));
        assert_eq!(global.look_up("x")?, int(1));
        Ok(())
    }

    #[test]
    fn reset_overwrites_in_current_scope() -> Result<(), NameError> {
        let global = Scope::global(&Builtins::empty());
        global.define("x", int(1));
        let local = Scope::child(&global);
        local.reset("x", None);

        assert_eq!(local.look_up("x")?, None);
        assert_eq!(global.look_up("x")?, int(1));
        Ok(())
    }

    #[test]
    fn unbound() {
        let global = Scope::global(&Builtins::empty());
        let local = Scope::child(&global);
        assert_eq!(local.look_up("nope"), Err(NameError::Unbound("nope".to_string())));
    }

    #[test]
    fn global_holds_builtins() -> Result<(), NameError> {
        let global = Scope::global(&Builtins::standard());
        match global.look_up("car")?.as_deref() {
            Some(Expression::Procedure(procedure)) => assert_eq!(procedure.name, "car"),
            other => panic!("car is bound to {:?}", other),
        }
        Ok(())
    }
}
