//! Integer exponentiation by squaring.
//!
//! [`power`] computes `base^exponent` for `i64` values, wrapping on overflow;
//! [`checked_power`] reports overflow instead. The [`input`] module reads the
//! `base exponent` pair the command line tool expects on stdin, and [`cases`]
//! checks recorded input/output pairs against the implementation.

pub mod cases;
pub mod error;
pub mod input;
pub mod power;

pub use self::error::{Error, ErrorKind};
pub use self::power::{checked_power, power, power_with, Overflow};
