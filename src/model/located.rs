use std::fmt;
use std::ops::Deref;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Located<T> {
    pub data: T,
    pub location: Option<Location>,
}

/// Zero-based position of a character in the source text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub row: u32,
    pub col: u32,
}

impl Location {
    pub fn step(&mut self, ch: char) {
        match ch {
            '\n' => {
                self.row += 1;
                self.col = 0;
            }
            _ => self.col += 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row + 1, self.col + 1)
    }
}

pub trait ToLocated {
    fn with_locate(self, location: Location) -> Located<Self>
    where
        Self: Sized,
    {
        Located::<Self> {
            data: self,
            location: Some(location),
        }
    }
}

impl<T> Located<T> {
    pub fn extract(self) -> T {
        self.data
    }
}

impl<T: fmt::Display> fmt::Display for Located<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(location) => write!(f, "{} at {}", self.data, location),
            None => write!(f, "{}", self.data),
        }
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for Located<T> {}

impl<T> Deref for Located<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
