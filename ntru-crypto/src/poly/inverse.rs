//! Inversion in `(Z/nZ)[x] / (m)` for a prime or prime-power coefficient modulus `n`.

use log::trace;

use super::{Modulus, Polynomial, RingError, int};

/// Computes `f^-1` such that `f * f^-1 = 1` modulo the reduction polynomial `m` and the
/// coefficient modulus `n`. The result has coefficients in `[0, n)` and degree lower than `m`.
///
/// For a prime `n` this runs the extended Euclidean algorithm over the field `Z/nZ`. For
/// `n = p^k` with `k > 1`, `f` is first inverted modulo `p` and the inverse is then lifted with
/// Newton iteration `b <- b * (2 - f * b)`, which doubles the p-adic precision at each step.
///
/// # Errors
/// - [RingError::NonInvertible] if `f` shares a non-trivial factor with `m` modulo the prime
///   base of `n`.
/// - [RingError::InvalidModulus] if `n` is not a prime power.
/// - [RingError::DivisionByZero] if `m` is zero or its leading coefficient is not a unit.
pub fn inverse(f: &Polynomial, m: &Polynomial, n: i64) -> Result<Polynomial, RingError> {
    let (base, exponent) = int::prime_power(n).ok_or(RingError::InvalidModulus(n))?;
    let mut inv = inverse_mod_prime(f, m, base)?;
    if exponent == 1 {
        return Ok(inv);
    }

    let two = Polynomial::constant(2);
    let mut precision = base;
    while precision < n {
        precision = precision.saturating_mul(precision).min(n);
        let modulus = Modulus::Int(precision);
        let f_inv = f.mul(&inv, modulus).rem(m, modulus)?;
        let correction = two.sub(&f_inv, modulus);
        inv = inv.mul(&correction, modulus).rem(m, modulus)?;
        trace!("lifted polynomial inverse to precision {precision}");
    }

    Ok(inv)
}

/// Extended Euclidean algorithm over `Z/pZ` for a prime `p`.
///
/// Keeps the pairs `(r0, s0)`, `(r1, s1)` with `s_i * f = r_i (mod m, p)`. When `r1` reaches
/// zero, `r0` is the gcd of `f` and `m`; `f` is invertible exactly when that gcd is a non-zero
/// constant `c`, in which case `s0 * c^-1` is the inverse.
fn inverse_mod_prime(f: &Polynomial, m: &Polynomial, p: i64) -> Result<Polynomial, RingError> {
    let modulus = Modulus::Int(p);

    let mut r0 = m.clone();
    let mut s0 = Polynomial::zero();
    let mut r1 = f.scalar_mul(1, modulus);
    let mut s1 = Polynomial::one();

    while !r1.is_zero() {
        let (quotient, r2) = r0.div_rem(&r1, modulus)?;
        let s2 = s0.sub(&quotient.mul(&s1, modulus), modulus);
        r0 = core::mem::replace(&mut r1, r2);
        s0 = core::mem::replace(&mut s1, s2);
    }

    if r0.degree() > 0 || r0.is_zero() {
        return Err(RingError::NonInvertible { modulus: p });
    }
    let c_inv = modulus.inverse_of(r0.lc()).ok_or(RingError::NonInvertible { modulus: p })?;

    s0.scalar_mul(c_inv, modulus).rem(m, modulus)
}

// TESTS
// ================================================================================================
