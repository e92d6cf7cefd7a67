//! Integer exponentiation by squaring.
//!
//! The exponent is consumed one bit at a time, least significant first. A
//! running square of the base is multiplied into the accumulator for every
//! set bit, so `base^exponent` takes O(log exponent) multiplications and no
//! recursion.

use crate::error::{Error, ErrorKind};

/// What to do when an intermediate product does not fit in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Wrap modulo 2^64, two's complement.
    Wrapping,

    /// Fail with [`ErrorKind::Overflow`].
    Checked,
}

impl Default for Overflow {
    fn default() -> Self {
        Overflow::Wrapping
    }
}

/// Raises `base` to `exponent`, wrapping on overflow.
///
/// `power(b, 0)` is `1` for every `b`, including `0`.
pub fn power(base: i64, exponent: i64) -> Result<i64, Error> {
    power_with(base, exponent, Overflow::Wrapping)
}

/// Raises `base` to `exponent`, failing if the exact result is not an `i64`.
pub fn checked_power(base: i64, exponent: i64) -> Result<i64, Error> {
    power_with(base, exponent, Overflow::Checked)
}

pub fn power_with(base: i64, exponent: i64, overflow: Overflow) -> Result<i64, Error> {
    if exponent < 0 {
        return Err(Error::msg(
            ErrorKind::NegativeExponent,
            format!("exponent must not be negative, got {}", exponent),
        ));
    }

    let mul = |lhs: i64, rhs: i64| -> Result<i64, Error> {
        match overflow {
            Overflow::Wrapping => Ok(lhs.wrapping_mul(rhs)),
            Overflow::Checked => lhs.checked_mul(rhs).ok_or_else(|| {
                Error::msg(
                    ErrorKind::Overflow,
                    format!("{}^{} does not fit in a 64-bit integer", base, exponent),
                )
            }),
        }
    };

    let mut result = 1i64;
    let mut square = base;
    let mut remaining = exponent;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = mul(result, square)?;
        }
        remaining >>= 1;

        // the last square is never used, and may overflow when checked
        if remaining > 0 {
            square = mul(square, square)?;
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenarios() {
        assert_eq!(power(2, 10).unwrap(), 1024);
        assert_eq!(power(3, 0).unwrap(), 1);
        assert_eq!(power(-2, 3).unwrap(), -8);
        assert_eq!(power(5, 1).unwrap(), 5);
        assert_eq!(power(0, 5).unwrap(), 0);
        assert_eq!(power(2, 62).unwrap(), 4611686018427387904);
    }

    #[test]
    fn zero_exponent_is_one() {
        for base in &[0, 1, -1, 7, i64::MIN, i64::MAX] {
            assert_eq!(power(*base, 0).unwrap(), 1);
        }
    }

    #[test]
    fn fixed_bases() {
        for exponent in 1..200 {
            assert_eq!(power(0, exponent).unwrap(), 0);
            assert_eq!(power(1, exponent).unwrap(), 1);
            let sign = if exponent % 2 == 0 { 1 } else { -1 };
            assert_eq!(power(-1, exponent).unwrap(), sign);
        }
    }

    #[test]
    fn matches_wrapping_pow() {
        for base in -12..=12i64 {
            for exponent in 0..80u32 {
                assert_eq!(
                    power(base, exponent as i64).unwrap(),
                    base.wrapping_pow(exponent),
                    "{}^{}",
                    base,
                    exponent
                );
            }
        }
        assert_eq!(power(3, 1_000_000_007).unwrap(), 3i64.wrapping_pow(1_000_000_007));
    }

    #[test]
    fn odd_step_recurrence() {
        for &(base, exponent) in &[(3, 41), (-7, 12), (123_456, 9), (2, 64)] {
            let prev = power(base, exponent - 1).unwrap();
            assert_eq!(power(base, exponent).unwrap(), prev.wrapping_mul(base));
        }
    }

    #[test]
    fn wraps_silently() {
        assert_eq!(power(2, 63).unwrap(), i64::MIN);
        assert_eq!(power(2, 64).unwrap(), 0);
        assert_eq!(power(10, 19).unwrap(), 10i64.wrapping_pow(19));
    }

    #[test]
    fn huge_exponent_terminates() {
        assert_eq!(power(1, i64::MAX).unwrap(), 1);
        assert_eq!(power(-1, i64::MAX).unwrap(), -1);
        assert_eq!(power(2, i64::MAX).unwrap(), 0);
    }

    #[test]
    fn negative_exponent_is_rejected() {
        let err = power(2, -1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NegativeExponent);
        assert_eq!(checked_power(2, i64::MIN).unwrap_err().kind(), ErrorKind::NegativeExponent);
    }

    #[test]
    fn checked_near_the_boundary() {
        assert_eq!(checked_power(2, 62).unwrap(), 1 << 62);
        assert_eq!(checked_power(-2, 63).unwrap(), i64::MIN);
        assert_eq!(checked_power(3, 39).unwrap(), 3i64.pow(39));
        assert_eq!(checked_power(i64::MAX, 1).unwrap(), i64::MAX);
        assert_eq!(checked_power(2, 63).unwrap_err().kind(), ErrorKind::Overflow);
        assert_eq!(checked_power(3, 40).unwrap_err().kind(), ErrorKind::Overflow);
        assert_eq!(checked_power(i64::MIN, 2).unwrap_err().kind(), ErrorKind::Overflow);
    }
}
