use crate::error::{Error, ErrorKind};
use std::io::Read;

/// A base and exponent read from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub base: i64,
    pub exponent: i64,
}

/// The problem parsed from the text, plus the number of tokens left over after
/// the exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed {
    pub problem: Problem,
    pub ignored_tokens: usize,
}

pub fn parse_problem(text: &str) -> Result<Problem, Error> {
    parse(text).map(|parsed| parsed.problem)
}

/// Reads the first two whitespace separated integers, base then exponent.
/// Anything after them is counted but otherwise ignored.
pub fn parse(text: &str) -> Result<Parsed, Error> {
    let mut tokens = text.split_whitespace();
    let base = parse_token(tokens.next(), "base")?;
    let exponent = parse_token(tokens.next(), "exponent")?;

    Ok(Parsed {
        problem: Problem { base, exponent },
        ignored_tokens: tokens.count(),
    })
}

pub fn read_problem<R: Read>(reader: R) -> Result<Problem, Error> {
    read(reader).map(|parsed| parsed.problem)
}

pub fn read<R: Read>(mut reader: R) -> Result<Parsed, Error> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|err| Error::new(ErrorKind::Io, "failed to read input", Box::new(err)))?;
    parse(&text)
}

fn parse_token(token: Option<&str>, what: &'static str) -> Result<i64, Error> {
    let token = token.ok_or_else(|| {
        Error::msg(
            ErrorKind::MissingInput,
            format!("input ended before the {} was read", what),
        )
    })?;

    token.parse::<i64>().map_err(|err| {
        Error::new(
            ErrorKind::MalformedInput,
            format!("`{}` is not a valid {}", token, what),
            Box::new(err),
        )
    })
}
