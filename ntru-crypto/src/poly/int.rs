//! Integer helpers used by the polynomial ring: modular inverses and primality checks.

use num::Integer;

/// Returns the inverse of `a` modulo `n` in `[0, n)`, or `None` if `gcd(a, n) != 1`.
///
/// Works for any modulus `n >= 2`; the coefficient is first brought into `[0, n)`.
pub fn mod_inverse(a: i64, n: i64) -> Option<i64> {
    if n < 2 {
        return None;
    }
    let a = a.rem_euclid(n);
    let egcd = a.extended_gcd(&n);
    if egcd.gcd.abs() != 1 {
        return None;
    }
    // a*x + n*y = g with g = +-1, so a*(x*g) = 1 (mod n)
    let x = i128::from(egcd.x) * i128::from(egcd.gcd);
    Some(x.rem_euclid(i128::from(n)) as i64)
}

/// Greatest common divisor, always non-negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    num::integer::gcd(a, b)
}

/// Deterministic primality test by trial division.
///
/// The ring dimension N and the NTRU moduli are small enough that trial division up to the
/// square root is instantaneous.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// If `n = p^k` for a prime `p` and `k >= 1`, returns `(p, k)`.
pub fn prime_power(n: i64) -> Option<(i64, u32)> {
    if n < 2 {
        return None;
    }
    let base = smallest_prime_factor(n);
    let mut rest = n;
    let mut exponent = 0;
    while rest % base == 0 {
        rest /= base;
        exponent += 1;
    }
    (rest == 1).then_some((base, exponent))
}

fn smallest_prime_factor(n: i64) -> i64 {
    if n % 2 == 0 {
        return 2;
    }
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return i;
        }
        i += 2;
    }
    n
}

// TESTS
// ================================================================================================
