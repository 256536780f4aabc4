use alloc::vec::Vec;

use rand::{CryptoRng, Rng};

use super::{NtruError, ParamsError};
use crate::poly::Polynomial;

/// Samples a ternary polynomial with `n + 1` coefficient slots, exactly `ones` of which are
/// `1` and `minus_ones` of which are `-1`.
///
/// Positions are drawn uniformly without replacement: each draw removes its index from the pool
/// of unused positions, first for the ones and then for the minus ones.
///
/// # Errors
/// Returns [NtruError::InvalidParameters] if `ones + minus_ones > n + 1`.
pub fn sample_ternary<R: Rng + CryptoRng>(
    rng: &mut R,
    n: usize,
    ones: usize,
    minus_ones: usize,
) -> Result<Polynomial, NtruError> {
    let slots = n + 1;
    if ones + minus_ones > slots {
        return Err(ParamsError::WeightTooLarge { ones, minus_ones, slots }.into());
    }

    let mut coefficients = vec![0_i64; slots];
    let mut pool: Vec<usize> = (0..slots).collect();
    for value in core::iter::repeat_n(1, ones).chain(core::iter::repeat_n(-1, minus_ones)) {
        let idx = rng.random_range(0..pool.len());
        coefficients[pool.swap_remove(idx)] = value;
    }

    Ok(Polynomial::new(coefficients))
}

// TESTS
// ================================================================================================
