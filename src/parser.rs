use std::rc::Rc;

use super::{Expression, Located, Pair, SyntaxError, ToLocated, Token, Tokenizer, Value};

type Result<T> = std::result::Result<T, Located<SyntaxError>>;

/// Reads exactly one expression from `text`; anything after it is an error.
pub fn parse(text: &str) -> Result<Value> {
    let mut parser = Parser::new(Tokenizer::new(text.chars())?);
    let expression = parser.read_expression()?;
    match parser.tokens.current() {
        None => Ok(expression),
        Some(Located { data: token, location }) => Err(Located {
            data: SyntaxError::TrailingInput(token.clone()),
            location: *location,
        }),
    }
}

pub struct Parser<CharIter: Iterator<Item = char>> {
    tokens: Tokenizer<CharIter>,
}

impl<CharIter: Iterator<Item = char>> Parser<CharIter> {
    pub fn new(tokens: Tokenizer<CharIter>) -> Self {
        Self { tokens }
    }

    pub fn is_end(&self) -> bool {
        self.tokens.is_end()
    }

    fn advance(&mut self) -> Result<Located<Token>> {
        let location = self.tokens.location();
        self.tokens
            .advance()?
            .ok_or_else(|| SyntaxError::UnexpectedEnd.with_locate(location))
    }

    pub fn read_expression(&mut self) -> Result<Value> {
        let Located { data: token, location } = self.advance()?;

        Ok(match token {
            Token::OpenBracket => return self.read_list(),
            Token::Symbol(name) => Expression::Symbol(name).into_value(),
            Token::Constant(value) => Expression::Integer(value).into_value(),
            Token::Boolean(value) => Expression::Boolean(value).into_value(),
            Token::Quote => {
                let quoted = self.read_expression()?;
                Expression::cons(
                    Expression::symbol("quote").into_value(),
                    Expression::cons(quoted, None).into_value(),
                ).into_value()
            },
            token => return Err(Located {
                data: SyntaxError::UnexpectedToken(token),
                location,
            }),
        })
    }

    /// Reads the rest of a list whose `(` was already consumed.
    pub fn read_list(&mut self) -> Result<Value> {
        let mut elements = vec![];
        let mut tail: Option<Value> = None;
        let mut dotted = false;

        loop {
            let location = self.tokens.location();
            let token = self.tokens.current().map(|t| t.data.clone());
            match token {
                None => return located_error!(SyntaxError::UnexpectedEnd, location),
                Some(Token::CloseBracket) => {
                    if dotted && tail.is_none() {
                        return located_error!(SyntaxError::DanglingDot, location);
                    }
                    self.advance()?;
                    break;
                },
                Some(Token::Dot) => {
                    if tail.is_some() {
                        return located_error!(SyntaxError::ElementAfterTail, location);
                    }
                    if dotted {
                        return located_error!(SyntaxError::RepeatedDot, location);
                    }
                    if elements.is_empty() {
                        return located_error!(SyntaxError::LeadingDot, location);
                    }
                    self.advance()?;
                    dotted = true;
                },
                Some(_) => {
                    if tail.is_some() {
                        return located_error!(SyntaxError::ElementAfterTail, location);
                    }
                    let element = self.read_expression()?;
                    if dotted {
                        tail = Some(element);
                    } else {
                        elements.push(element);
                    }
                },
            }
        }

        Ok(elements.into_iter().rev().fold(tail.flatten(), |second, first| {
            Some(Rc::new(Expression::Pair(Pair::new(first, second))))
        }))
    }
}
