use std::iter::Iterator;
use peekmore::{PeekMore, PeekMoreIterator};

use super::{Token, Located, Location, SyntaxError, ToLocated};

pub struct Lexer<CharIter: Iterator<Item = char>> {
    char_stream: PeekMoreIterator<CharIter>,
    advance_location: Location,
    peek_location: Location,
}

type Result<T> = std::result::Result<T, Located<SyntaxError>>;

impl<CharIter: Iterator<Item = char>> Iterator for Lexer<CharIter> {
    type Item = Result<Located<Token>>;
    fn next(&mut self) -> Option<Self::Item> {
        match self.get_next_token() {
            Ok(None) => None,
            Ok(Some(token)) => Some(Ok(token)),
            Err(e) => Some(Err(e)),
        }
    }
}

impl<CharIter: Iterator<Item = char>> Lexer<CharIter> {
    pub fn new(char_stream: CharIter) -> Self {
        Self {
            char_stream: char_stream.peekmore(),
            advance_location: Location::default(),
            peek_location: Location::default(),
        }
    }

    /// Position of the next unconsumed character.
    pub fn location(&self) -> Location {
        self.advance_location
    }

    fn get_next_token(&mut self) -> Result<Option<Located<Token>>> {
        while let (Some(ch), location) = self.peek_with_location() {
            return Ok(Some(match ch {
                _ if ch.is_ascii_whitespace() => {self.advance(); continue},
                '('  => {self.advance(); Token::OpenBracket},
                ')'  => {self.advance(); Token::CloseBracket},
                '\'' => {self.advance(); Token::Quote},
                '.'  => {self.advance(); Token::Dot},
                '#'  => match self.peek() {
                    Some('t') => {self.advance_n(2); Token::Boolean(true)},
                    Some('f') => {self.advance_n(2); Token::Boolean(false)},
                    _ => {self.reset(); self.get_symbol()},
                },
                '+' | '-' => match self.peek() {
                    Some('0'..='9') => {self.reset(); self.get_constant()?},
                    _ => {self.advance(); self.reset(); Token::Symbol(ch.to_string())},
                },
                '0'..='9' => {self.reset(); self.get_constant()?},
                _ if is_symbol_initial(ch) => {self.reset(); self.get_symbol()},
                _ => return located_error!(SyntaxError::UnrecognizedCharacter(ch), location),
            }.with_locate(location)))
        }

        Ok(None)
    }

    // <constant> -> [+ | -] <digit>+
    fn get_constant(&mut self) -> Result<Token> {
        let location = self.advance_location;
        let mut literal = String::new();
        match self.peek() {
            Some(sign) if sign == '+' || sign == '-' => {
                literal.push(sign);
                self.advance();
            },
            _ => self.reset(),
        }
        self.get_subsequent(&mut literal, |ch| ch.is_ascii_digit());

        match literal.parse() {
            Ok(value) => Ok(Token::Constant(value)),
            Err(_) => located_error!(SyntaxError::ConstantOutOfRange(literal), location),
        }
    }

    fn get_symbol(&mut self) -> Token {
        let mut name = String::new();
        if let Some(ch) = self.advance() {
            debug_assert!(is_symbol_initial(ch));
            name.push(ch);
        }
        self.get_subsequent(&mut name, is_symbol_subsequent);
        Token::Symbol(name)
    }

    fn get_subsequent(&mut self, text: &mut String, accept: impl Fn(char) -> bool) {
        loop {
            match self.peek() {
                Some(ch) if accept(ch) => {
                    text.push(ch);
                    self.advance();
                },
                _ => {self.reset(); break},
            }
        }
    }

    fn peek_with_location(&mut self) -> (Option<char>, Location) {
        let location = self.peek_location;
        let ch = self.char_stream.peek().copied();
        self.char_stream.advance_cursor();
        if let Some(ch) = ch {
            self.peek_location.step(ch);
        }
        (ch, location)
    }

    fn peek(&mut self) -> Option<char> {
        self.peek_with_location().0
    }

    fn reset(&mut self) {
        self.char_stream.reset_cursor();
        self.peek_location = self.advance_location;
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.char_stream.next();
        if let Some(ch) = ch {
            self.advance_location.step(ch);
        }
        self.peek_location = self.advance_location;
        ch
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }
}

fn is_symbol_initial(c: char) -> bool {
    match c {
        'a'..='z'
        | 'A'..='Z'
        | '<'
        | '='
        | '>'
        | '*'
        | '/'
        | '#' => true,
        _ => false,
    }
}

fn is_symbol_subsequent(c: char) -> bool {
    match c {
        c if is_symbol_initial(c) => true,
        '0'..='9' | '?' | '!' | '-' => true,
        _ => false,
    }
}

/// One token of lookahead over a `Lexer`: the cursor the parser reads from.
pub struct Tokenizer<CharIter: Iterator<Item = char>> {
    lexer: Lexer<CharIter>,
    current: Option<Located<Token>>,
}

impl<CharIter: Iterator<Item = char>> Tokenizer<CharIter> {
    pub fn new(char_stream: CharIter) -> Result<Self> {
        let mut tokenizer = Self {
            lexer: Lexer::new(char_stream),
            current: None,
        };
        tokenizer.advance()?;
        Ok(tokenizer)
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn current(&self) -> Option<&Located<Token>> {
        self.current.as_ref()
    }

    /// Moves past the current token and returns it.
    pub fn advance(&mut self) -> Result<Option<Located<Token>>> {
        let next = self.lexer.next().transpose()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Where the current token starts, or the end of input once exhausted.
    pub fn location(&self) -> Location {
        self.current
            .as_ref()
            .and_then(|token| token.location)
            .unwrap_or_else(|| self.lexer.location())
    }
}
