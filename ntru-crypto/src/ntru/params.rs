use super::{NtruError, ParamsError};
use crate::poly::{Polynomial, int};

// PARAMETERS
// ================================================================================================

/// Parameters of an NTRU instance.
///
/// - `n`: dimension of the ring `Z[x]/(x^n - 1)`, prime.
/// - `p`: small modulus in which messages live.
/// - `q`: large modulus in which public keys and ciphertexts live.
/// - `d`: sampling weight of the secret and blinding polynomials.
///
/// Both moduli must be primes or prime powers so that the secret key can be inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NtruParams {
    n: usize,
    p: i64,
    q: i64,
    d: usize,
}

impl NtruParams {
    /// Textbook parameters (N = 7, p = 3, q = 41). Not secure; for tests and examples only.
    pub const TOY: Self = Self { n: 7, p: 3, q: 41, d: 2 };

    /// A mid-sized instance (N = 251, p = 3, q = 257, d = 5). Not a standardized parameter set.
    pub const MEDIUM: Self = Self { n: 251, p: 3, q: 257, d: 5 };

    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Creates a parameter set with the default weight `d = round(n / 3)`.
    ///
    /// # Errors
    /// Returns [NtruError::InvalidParameters] if the parameters violate any of the invariants
    /// checked by [NtruParams::validate].
    pub fn new(n: usize, p: i64, q: i64) -> Result<Self, NtruError> {
        // n / 3 is never a half-integer, so this is round-to-nearest
        Self::with_d(n, p, q, (n + 1) / 3)
    }

    /// Creates a parameter set with an explicit sampling weight `d`.
    pub fn with_d(n: usize, p: i64, q: i64, d: usize) -> Result<Self, NtruError> {
        let params = Self { n, p, q, d };
        params.validate()?;
        Ok(params)
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the ring dimension N.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the small modulus p.
    pub fn p(&self) -> i64 {
        self.p
    }

    /// Returns the large modulus q.
    pub fn q(&self) -> i64 {
        self.q
    }

    /// Returns the sampling weight d.
    pub fn d(&self) -> usize {
        self.d
    }

    // VALIDATION
    // --------------------------------------------------------------------------------------------

    /// Checks the invariants of the parameter set:
    /// N prime, `2 <= p < q`, `gcd(N, q) = 1`, `gcd(p, q) = 1`, p and q prime powers, and enough
    /// coefficients to sample `f` with `d + 1` ones and `d` minus ones.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let n = i64::try_from(self.n).map_err(|_| ParamsError::DimensionNotPrime(self.n))?;
        if !int::is_prime(n) {
            return Err(ParamsError::DimensionNotPrime(self.n));
        }
        if self.p < 2 || self.p >= self.q {
            return Err(ParamsError::ModulusOrder { p: self.p, q: self.q });
        }
        for (a, b) in [(n, self.q), (self.p, self.q)] {
            let gcd = int::gcd(a, b);
            if gcd != 1 {
                return Err(ParamsError::NotCoprime { a, b, gcd });
            }
        }
        for modulus in [self.p, self.q] {
            if int::prime_power(modulus).is_none() {
                return Err(ParamsError::NotPrimePower(modulus));
            }
        }
        if 2 * self.d + 1 > self.n + 1 {
            return Err(ParamsError::WeightTooLarge {
                ones: self.d + 1,
                minus_ones: self.d,
                slots: self.n + 1,
            });
        }
        Ok(())
    }

    /// Returns true if `m` can be encrypted and recovered: degree lower than N and every
    /// coefficient in the centered range `(-p/2, p/2]`.
    pub fn message_fits(&self, m: &Polynomial) -> bool {
        let upper = self.p / 2;
        let lower = upper - self.p;
        (m.is_zero() || m.degree() < self.n)
            && m.coefficients().iter().all(|&c| c > lower && c <= upper)
    }
}
