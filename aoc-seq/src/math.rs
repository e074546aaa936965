//! Integer helpers with Python-style division semantics
//!
//! Rust's `%` takes the sign of the dividend; puzzle arithmetic (wrapping
//! positions, clock math) almost always wants the sign of the divisor
//! instead, so these helpers mirror Python's `%` and `divmod`.

use crate::error::SequenceError;

/// Remainder with the sign of the divisor, like Python's `%`.
///
/// `modulo(-5, 4)` is `3`, not `-1`.
///
/// # Errors
///
/// Returns [`SequenceError::DivisionByZero`] when `y` is zero.
///
/// # Example
///
/// ```
/// use aoc_seq::modulo;
///
/// assert_eq!(modulo(-5, 4).unwrap(), 3);
/// assert_eq!(modulo(5, -4).unwrap(), -3);
/// ```
pub fn modulo(x: i64, y: i64) -> Result<i64, SequenceError> {
    if y == 0 {
        return Err(SequenceError::DivisionByZero);
    }
    Ok(((x % y) + y) % y)
}

/// Floor quotient and [`modulo`] remainder, like Python's `divmod`.
///
/// The invariant `q * y + r == x` holds, with `r` taking the divisor's sign.
///
/// # Errors
///
/// Returns [`SequenceError::DivisionByZero`] when `y` is zero.
pub fn divmod(x: i64, y: i64) -> Result<(i64, i64), SequenceError> {
    let r = modulo(x, y)?;
    Ok(((x - r) / y, r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulo_takes_divisor_sign() {
        assert_eq!(modulo(-5, 4).unwrap(), 3);
        assert_eq!(modulo(5, 4).unwrap(), 1);
        assert_eq!(modulo(5, -4).unwrap(), -3);
        assert_eq!(modulo(-5, -4).unwrap(), -1);
        assert_eq!(modulo(0, 7).unwrap(), 0);
    }

    #[test]
    fn divmod_floors_the_quotient() {
        assert_eq!(divmod(7, 2).unwrap(), (3, 1));
        assert_eq!(divmod(-7, 2).unwrap(), (-4, 1));
        assert_eq!(divmod(7, -2).unwrap(), (-4, -1));
        assert_eq!(divmod(-7, -2).unwrap(), (3, -1));
    }

    #[test]
    fn divmod_invariant_holds() {
        for x in -20..=20 {
            for y in [-7, -3, -1, 1, 2, 5] {
                let (q, r) = divmod(x, y).unwrap();
                assert_eq!(q * y + r, x, "x={x} y={y}");
            }
        }
    }

    #[test]
    fn zero_divisor_is_an_error() {
        assert_eq!(modulo(3, 0), Err(SequenceError::DivisionByZero));
        assert_eq!(divmod(3, 0), Err(SequenceError::DivisionByZero));
    }
}
