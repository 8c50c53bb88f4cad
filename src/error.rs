use std::fmt::{self, Debug, Display, Formatter};
use std::result;

use itertools::Itertools;

use crate::basic::BoardError;
use crate::snake::BuilderError;

/// Everything that can stop a game from being set up, once
/// running a game can no longer fail
#[derive(Debug, Display, From)]
pub enum ErrorKind {
    #[display(fmt = "invalid board: {}", _0)]
    Board(BoardError),
    #[display(fmt = "invalid snake: {}", _0)]
    Snake(BuilderError),
}

#[must_use]
pub struct Error {
    kind: ErrorKind,
    /// Innermost step first
    trace: Vec<String>,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind, trace: vec![] }
    }
}

impl From<BoardError> for Error {
    fn from(e: BoardError) -> Self {
        ErrorKind::from(e).into()
    }
}

impl From<BuilderError> for Error {
    fn from(e: BuilderError) -> Self {
        ErrorKind::from(e).into()
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.trace.push(s.to_string());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Outermost step first
    pub fn trace(&self) -> impl Iterator<Item = &str> {
        self.trace.iter().rev().map(String::as_str)
    }
}

// what `fn main() -> Result` prints
impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        for step in self.trace() {
            writeln!(f, "    while {}", step)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.trace.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} ({})", self.kind, self.trace().join(" > "))
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Board(e) => Some(e),
            ErrorKind::Snake(e) => Some(e),
        }
    }
}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s))
    }
}
