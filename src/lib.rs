//! A small interpreter for a Scheme-like expression language: integers,
//! booleans, symbols and pairs, evaluated against a chain of scopes rooted
//! at a table of built-in procedures.
//!
//! ```
//! let interpreter = risp_lite::Interpreter::new();
//! assert_eq!(interpreter.run("(list-tail (list 1 2 3) 1)").unwrap(), "(2 3)");
//! ```

#[macro_use]
mod model;
pub use model::*;

mod expression;
pub use expression::{render, ApplyFn, Expression, Procedure, Value};

mod lexer;
pub use lexer::{Lexer, Tokenizer};

mod parser;
pub use parser::{parse, Parser};

mod scope;
pub use scope::Scope;

mod evaluator;
pub use evaluator::{collect_arguments, evaluate_arguments};

mod builtins;
pub use builtins::Builtins;

mod interpreter;
pub use interpreter::Interpreter;
