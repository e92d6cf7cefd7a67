use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

pub struct Error(Box<ErrorInner>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The exponent was below zero.
    NegativeExponent,

    /// The exact result does not fit in an `i64`.
    Overflow,

    /// The input ended before both numbers were read.
    MissingInput,

    /// A token in the input was not an integer.
    MalformedInput,

    Io,
}

impl Error {
    pub fn new<M>(kind: ErrorKind, message: M, cause: Box<dyn StdError + Send + Sync>) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Error(Box::new(ErrorInner {
            kind,
            message: message.into(),
            cause: Some(cause),
        }))
    }

    pub fn msg<M>(kind: ErrorKind, message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Error(Box::new(ErrorInner {
            kind,
            message: message.into(),
            cause: None,
        }))
    }

    pub fn kind(&self) -> ErrorKind {
        self.0.kind
    }
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    message: Cow<'static, str>,
    cause: Option<Box<dyn StdError + Send + Sync>>,
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <ErrorInner as fmt::Debug>::fmt(&self.0, f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.message)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.cause.as_deref().map(|e| e as &dyn StdError)
    }
}
