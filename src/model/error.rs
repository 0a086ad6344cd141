use super::{Located, ToLocated, Token};

macro_rules! located_error {
    ($arg:expr, $loc:expr) => {
        Err($arg.with_locate($loc))
    };
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, PartialEq, Debug, Clone)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(#[from] Located<SyntaxError>),
    #[error("name error: {0}")]
    Name(#[from] NameError),
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
    #[error("internal error: {0}")]
    Internal(#[from] InternalError),
}

#[derive(thiserror::Error, PartialEq, Debug, Clone)]
pub enum SyntaxError {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unrecognized character {0:?}")]
    UnrecognizedCharacter(char),
    #[error("integer constant {0} does not fit in 64 bits")]
    ConstantOutOfRange(String),
    #[error("unexpected token `{0}`")]
    UnexpectedToken(Token),
    #[error("dot before the first element of a list")]
    LeadingDot,
    #[error("more than one dot in a list")]
    RepeatedDot,
    #[error("element after the tail of a dotted list")]
    ElementAfterTail,
    #[error("dot without a following element")]
    DanglingDot,
    #[error("unexpected token `{0}` after the expression")]
    TrailingInput(Token),
}

impl ToLocated for SyntaxError {}

#[derive(thiserror::Error, PartialEq, Debug, Clone)]
pub enum NameError {
    #[error("unbound symbol `{0}`")]
    Unbound(String),
}

#[derive(thiserror::Error, PartialEq, Debug, Clone)]
pub enum RuntimeError {
    #[error("cannot evaluate the empty list")]
    EvalEmpty,
    #[error("cannot call the empty list")]
    CallEmpty,
    #[error("head of the expression is not callable")]
    NotCallable,
    #[error("`{0}` is not bound to a procedure")]
    NotAProcedure(String),
    #[error("`{name}` expects {expected} argument(s), got {got}")]
    WrongArity {
        name: &'static str,
        expected: &'static str,
        got: usize,
    },
    #[error("`{name}` expects {expected}")]
    WrongType {
        name: &'static str,
        expected: &'static str,
    },
    #[error("argument list is not a proper list")]
    ImproperArguments,
    #[error("the empty list cannot be used as an argument")]
    EmptyArgument,
    #[error("index {index} is out of range for a list of length {length}")]
    IndexOutOfRange { index: i64, length: usize },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in `{0}`")]
    Overflow(&'static str),
}

#[derive(thiserror::Error, PartialEq, Debug, Clone)]
pub enum InternalError {
    #[error("procedure `{0}` cannot be evaluated")]
    EvalProcedure(&'static str),
    #[error("procedure `{0}` cannot be rendered")]
    RenderProcedure(&'static str),
}
