use thiserror::Error;

use crate::poly::RingError;

/// Errors raised by the NTRU cryptosystem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NtruError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(ParamsError),
    #[error("no invertible private key found after {attempts} attempts")]
    KeyGenExhausted { attempts: u32 },
    #[error("public key not set")]
    KeyNotSet,
    #[error("private key not set")]
    PrivateKeyNotSet,
    #[error(transparent)]
    Ring(#[from] RingError),
}

/// Reasons a parameter set or sampling request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("ring dimension {0} is not prime")]
    DimensionNotPrime(usize),
    #[error("small modulus p = {p} must be at least 2 and lower than q = {q}")]
    ModulusOrder { p: i64, q: i64 },
    #[error("gcd({a}, {b}) = {gcd}, expected 1")]
    NotCoprime { a: i64, b: i64, gcd: i64 },
    #[error("modulus {0} is neither a prime nor a prime power")]
    NotPrimePower(i64),
    #[error("cannot place {ones} ones and {minus_ones} minus ones in {slots} coefficients")]
    WeightTooLarge { ones: usize, minus_ones: usize, slots: usize },
}

impl From<ParamsError> for NtruError {
    fn from(err: ParamsError) -> Self {
        NtruError::InvalidParameters(err)
    }
}
