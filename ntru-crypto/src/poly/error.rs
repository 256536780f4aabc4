use thiserror::Error;

use super::Modulus;

/// Errors raised by arithmetic in the polynomial ring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// The divisor is zero, or its leading coefficient has no inverse under the active modulus.
    #[error("division by zero: leading coefficient {leading} has no inverse {modulus}")]
    DivisionByZero { leading: i64, modulus: Modulus },
    /// Without a coefficient modulus, a quotient coefficient was not an integer.
    #[error("inexact division: {dividend} is not divisible by {divisor} over the integers")]
    InexactDivision { dividend: i64, divisor: i64 },
    /// The polynomial shares a non-trivial factor with the reduction polynomial.
    #[error("polynomial is not invertible modulo the reduction polynomial and {modulus}")]
    NonInvertible { modulus: i64 },
    /// The coefficient modulus cannot be used for the requested operation.
    #[error("invalid coefficient modulus {0}")]
    InvalidModulus(i64),
}
