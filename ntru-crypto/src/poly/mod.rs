//! Dense integer polynomials and their arithmetic, optionally reduced modulo an integer.
//!
//! Every operation takes an explicit [Modulus]. [Modulus::None] means arithmetic over the
//! integers; [Modulus::Int] reduces every coefficient of the result into `[0, n)`. Ring
//! reduction modulo a polynomial (for NTRU, `x^N - 1`) is performed with [Polynomial::rem].

use alloc::vec::Vec;
use core::{fmt, ops::Neg};

use zeroize::Zeroize;

mod error;
pub use error::RingError;

pub mod int;

mod inverse;
pub use inverse::inverse;

#[cfg(test)]
mod tests;

// MODULUS
// ================================================================================================

/// Coefficient modulus applied by a ring operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modulus {
    /// Coefficients are left unreduced (arithmetic over the integers).
    None,
    /// Coefficients are reduced into `[0, n)`; `n` must be at least 2.
    ///
    /// Fallible operations reject smaller moduli with [RingError::InvalidModulus]; the
    /// infallible ones panic on `Int(0)`.
    Int(i64),
}

impl Modulus {
    /// Reduces a single coefficient under this modulus.
    #[inline]
    pub fn reduce(self, value: i64) -> i64 {
        self.reduce_wide(i128::from(value))
    }

    /// Returns `a + b` under this modulus.
    #[inline]
    pub fn add(self, a: i64, b: i64) -> i64 {
        match self {
            Modulus::None => a + b,
            Modulus::Int(_) => self.reduce_wide(i128::from(a) + i128::from(b)),
        }
    }

    /// Returns `a - b` under this modulus.
    #[inline]
    pub fn sub(self, a: i64, b: i64) -> i64 {
        match self {
            Modulus::None => a - b,
            Modulus::Int(_) => self.reduce_wide(i128::from(a) - i128::from(b)),
        }
    }

    /// Returns `a * b` under this modulus.
    #[inline]
    pub fn mul(self, a: i64, b: i64) -> i64 {
        match self {
            Modulus::None => a * b,
            Modulus::Int(_) => self.reduce_wide(i128::from(a) * i128::from(b)),
        }
    }

    /// Returns the inverse of `value` under this modulus.
    ///
    /// Over the integers only `1` and `-1` are invertible.
    pub fn inverse_of(self, value: i64) -> Option<i64> {
        match self {
            Modulus::None => (value == 1 || value == -1).then_some(value),
            Modulus::Int(n) => int::mod_inverse(value, n),
        }
    }

    /// Operands are arbitrary i64, so sums and products are formed in i128 before reduction.
    /// The result lies in `[0, n)` and therefore fits back into i64.
    #[inline]
    fn reduce_wide(self, value: i128) -> i64 {
        match self {
            Modulus::None => value as i64,
            Modulus::Int(n) => value.rem_euclid(i128::from(n)) as i64,
        }
    }

    fn check(self) -> Result<(), RingError> {
        match self {
            Modulus::Int(n) if n < 2 => Err(RingError::InvalidModulus(n)),
            _ => Ok(()),
        }
    }
}

impl From<i64> for Modulus {
    fn from(n: i64) -> Self {
        Modulus::Int(n)
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modulus::None => f.write_str("over the integers"),
            Modulus::Int(n) => write!(f, "modulo {n}"),
        }
    }
}

// POLYNOMIAL
// ================================================================================================

/// A polynomial with integer coefficients, ordered from lowest to highest degree.
///
/// The coefficient vector never carries trailing zeros, except for the zero polynomial which is
/// stored as the single coefficient `0`. Operations borrow their operands and return a new
/// polynomial; only [Polynomial::reduce] mutates in place.
#[derive(Debug, Clone, Eq)]
pub struct Polynomial {
    coefficients: Vec<i64>,
}

impl Polynomial {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Creates a new polynomial from the provided coefficients, trimming trailing zeros.
    pub fn new(coefficients: Vec<i64>) -> Self {
        let mut poly = Self { coefficients };
        poly.trim();
        poly
    }

    /// Returns the zero polynomial.
    pub fn zero() -> Self {
        Self { coefficients: vec![0] }
    }

    /// Returns the constant polynomial `1`.
    pub fn one() -> Self {
        Self::constant(1)
    }

    /// Creates a constant polynomial with a single coefficient.
    pub fn constant(c: i64) -> Self {
        Self::new(vec![c])
    }

    /// Returns `c * x^degree`.
    pub fn monomial(c: i64, degree: usize) -> Self {
        let mut coefficients = vec![0; degree + 1];
        coefficients[degree] = c;
        Self::new(coefficients)
    }

    /// Returns `x^n - 1`, the reduction polynomial of the truncated ring `Z[x]/(x^n - 1)`.
    pub fn cyclic_modulus(n: usize) -> Self {
        let mut coefficients = vec![0; n + 1];
        coefficients[0] = -1;
        coefficients[n] += 1;
        Self::new(coefficients)
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// Returns the coefficient of `x^i`, which is zero past the degree.
    pub fn coefficient(&self, i: usize) -> i64 {
        self.coefficients.get(i).copied().unwrap_or(0)
    }

    /// Returns the degree of the polynomial. The zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.iter().rposition(|&c| c != 0).unwrap_or(0)
    }

    /// Returns the leading coefficient of the polynomial.
    pub fn lc(&self) -> i64 {
        self.coefficient(self.degree())
    }

    /// Returns true if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|&c| c == 0)
    }

    /// Consumes the polynomial and returns its coefficients.
    pub fn into_coefficients(self) -> Vec<i64> {
        self.coefficients
    }

    // RING OPERATIONS
    // --------------------------------------------------------------------------------------------

    /// Adds two polynomials coefficient-wise, the shorter one padded with zeros.
    ///
    /// # Panics
    /// Panics if `modulus` is `Modulus::Int(0)`.
    pub fn add(&self, other: &Self, modulus: Modulus) -> Self {
        self.zip_with(other, |a, b| modulus.add(a, b))
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Panics
    /// Panics if `modulus` is `Modulus::Int(0)`.
    pub fn sub(&self, other: &Self, modulus: Modulus) -> Self {
        self.zip_with(other, |a, b| modulus.sub(a, b))
    }

    /// Multiplies every coefficient by `k`.
    ///
    /// # Panics
    /// Panics if `modulus` is `Modulus::Int(0)`.
    pub fn scalar_mul(&self, k: i64, modulus: Modulus) -> Self {
        Self::new(self.coefficients.iter().map(|&c| modulus.mul(c, k)).collect())
    }

    /// Multiplies two polynomials (plain convolution, without ring reduction).
    ///
    /// Each non-zero coefficient `a[i]` contributes `a[i] * other * x^i`, accumulated through
    /// [Polynomial::add] with the same modulus so that intermediate coefficients stay below the
    /// modulus. Operands need not be reduced.
    ///
    /// # Panics
    /// Panics if `modulus` is `Modulus::Int(0)`.
    pub fn mul(&self, other: &Self, modulus: Modulus) -> Self {
        let mut acc = Self::zero();
        for (i, &a) in self.coefficients.iter().enumerate() {
            if a == 0 {
                continue;
            }
            let term = other.scalar_mul(a, modulus).shift(i);
            acc = acc.add(&term, modulus);
        }
        acc
    }

    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// The remainder is zero or has degree strictly lower than the divisor. Each step cancels
    /// the leading coefficient of the remainder using the inverse of the divisor's leading
    /// coefficient under `modulus`.
    ///
    /// # Errors
    /// - [RingError::InvalidModulus] if `modulus` is `Modulus::Int(n)` with `n < 2`.
    /// - [RingError::DivisionByZero] if the divisor is zero or its leading coefficient is not
    ///   invertible under `modulus`.
    /// - [RingError::InexactDivision] if, with [Modulus::None], a quotient coefficient is not an
    ///   integer.
    pub fn div_rem(&self, divisor: &Self, modulus: Modulus) -> Result<(Self, Self), RingError> {
        modulus.check()?;
        let divisor = divisor.reduce_by(modulus);
        let leading = divisor.lc();
        if divisor.is_zero() {
            return Err(RingError::DivisionByZero { leading, modulus });
        }
        let divisor_degree = divisor.degree();

        // over Z/nZ the leading coefficient must be a unit; over Z only exact quotients are kept
        let leading_inv = match modulus {
            Modulus::Int(_) => Some(
                modulus
                    .inverse_of(leading)
                    .ok_or(RingError::DivisionByZero { leading, modulus })?,
            ),
            Modulus::None => None,
        };

        let mut quotient = Self::zero();
        let mut remainder = self.reduce_by(modulus);
        while !remainder.is_zero() && remainder.degree() >= divisor_degree {
            let shift = remainder.degree() - divisor_degree;
            let c = match leading_inv {
                Some(inv) => modulus.mul(remainder.lc(), inv),
                None => {
                    let dividend = remainder.lc();
                    if dividend % leading != 0 {
                        return Err(RingError::InexactDivision { dividend, divisor: leading });
                    }
                    dividend / leading
                },
            };
            let monomial = Self::monomial(c, shift);
            quotient = quotient.add(&monomial, modulus);
            remainder = remainder.sub(&monomial.mul(&divisor, modulus), modulus);
        }

        Ok((quotient, remainder))
    }

    /// Returns the quotient of `self / divisor`. See [Polynomial::div_rem].
    pub fn div(&self, divisor: &Self, modulus: Modulus) -> Result<Self, RingError> {
        self.div_rem(divisor, modulus).map(|(quotient, _)| quotient)
    }

    /// Returns the remainder of `self / divisor`. See [Polynomial::div_rem].
    pub fn rem(&self, divisor: &Self, modulus: Modulus) -> Result<Self, RingError> {
        self.div_rem(divisor, modulus).map(|(_, remainder)| remainder)
    }

    /// Maps every coefficient into the centered range `(-n/2, n/2]`.
    ///
    /// Coefficients are first reduced into `[0, n)`; those above `n / 2` then have `n`
    /// subtracted.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn center_lift(&self, n: i64) -> Self {
        let half = n / 2;
        Self::new(
            self.coefficients
                .iter()
                .map(|c| {
                    let c = c.rem_euclid(n);
                    if c > half { c - n } else { c }
                })
                .collect(),
        )
    }

    /// Reduces every coefficient into `[0, n)` in place.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn reduce(&mut self, n: i64) {
        for c in self.coefficients.iter_mut() {
            *c = c.rem_euclid(n);
        }
        self.trim();
    }

    /// Shifts the polynomial by the specified amount (multiplies by `x^shamt`).
    pub fn shift(&self, shamt: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        Self {
            coefficients: [vec![0; shamt], self.coefficients.clone()].concat(),
        }
    }

    // HELPERS
    // --------------------------------------------------------------------------------------------

    fn zip_with(&self, other: &Self, op: impl Fn(i64, i64) -> i64) -> Self {
        let len = self.coefficients.len().max(other.coefficients.len());
        Self::new((0..len).map(|i| op(self.coefficient(i), other.coefficient(i))).collect())
    }

    fn reduce_by(&self, modulus: Modulus) -> Self {
        Self::new(self.coefficients.iter().map(|&c| modulus.reduce(c)).collect())
    }

    fn trim(&mut self) {
        let len = self.coefficients.iter().rposition(|&c| c != 0).map_or(1, |i| i + 1);
        self.coefficients.truncate(len);
        if self.coefficients.is_empty() {
            self.coefficients.push(0);
        }
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        let self_len = self.coefficients.iter().rposition(|&c| c != 0).map_or(0, |i| i + 1);
        let other_len = other.coefficients.iter().rposition(|&c| c != 0).map_or(0, |i| i + 1);
        self.coefficients[..self_len] == other.coefficients[..other_len]
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Vec<i64>> for Polynomial {
    fn from(coefficients: Vec<i64>) -> Self {
        Self::new(coefficients)
    }
}

impl From<&[i64]> for Polynomial {
    fn from(coefficients: &[i64]) -> Self {
        Self::new(coefficients.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for Polynomial {
    fn from(coefficients: [i64; N]) -> Self {
        Self::new(coefficients.to_vec())
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial {
            coefficients: self.coefficients.iter().map(|c| -c).collect(),
        }
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        -&self
    }
}

// ZEROIZE IMPLEMENTATIONS
// ================================================================================================

impl Zeroize for Polynomial {
    fn zeroize(&mut self) {
        self.coefficients.zeroize();
        self.coefficients.push(0);
    }
}
