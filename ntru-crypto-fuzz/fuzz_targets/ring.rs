#![no_main]

use libfuzzer_sys::fuzz_target;
use ntru_crypto::{Modulus, Polynomial, poly::inverse};

const N: usize = 11;
const MODULI: [i64; 5] = [2, 3, 41, 257, 2048];

fn polynomial(bytes: &[u8]) -> Polynomial {
    Polynomial::new(bytes.iter().map(|&b| i64::from(b as i8)).collect())
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let n = MODULI[data[0] as usize % MODULI.len()];
    let modulus = Modulus::Int(n);
    let (a, b) = data[1..].split_at((data.len() - 1) / 2);
    let (a, b) = (polynomial(a), polynomial(&b[..b.len().min(N)]));

    // division must either fail cleanly or reconstruct the dividend
    if let Ok((q, r)) = a.div_rem(&b, modulus) {
        let mut expected = a.clone();
        expected.reduce(n);
        assert_eq!(q.mul(&b, modulus).add(&r, modulus), expected);
    }

    // inversion modulo x^N - 1 must either fail cleanly or produce a ring inverse
    let poly_mod = Polynomial::cyclic_modulus(N);
    if let Ok(b_inv) = inverse(&b, &poly_mod, n) {
        let product = b.mul(&b_inv, modulus).rem(&poly_mod, modulus).expect("x^N - 1 is monic");
        assert_eq!(product, Polynomial::one());
    }
});
