use std::fmt;

use super::ToLocated;

#[derive(PartialEq, Debug, Clone)]
pub enum Token {
    Constant(i64),
    Symbol(String),
    Boolean(bool),

    OpenBracket,  // (
    CloseBracket, // )
    Quote,        // '
    Dot,          // .
}

impl ToLocated for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Constant(value) => write!(f, "{}", value),
            Token::Symbol(name) => write!(f, "{}", name),
            Token::Boolean(true) => write!(f, "#t"),
            Token::Boolean(false) => write!(f, "#f"),
            Token::OpenBracket => write!(f, "("),
            Token::CloseBracket => write!(f, ")"),
            Token::Quote => write!(f, "'"),
            Token::Dot => write!(f, "."),
        }
    }
}
