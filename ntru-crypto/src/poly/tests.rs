use alloc::vec::Vec;

use assert_matches::assert_matches;
use proptest::prelude::*;

use super::{Modulus, Polynomial, RingError, inverse};

// UNIT TESTS
// ================================================================================================

#[test]
fn trailing_zeros_are_trimmed() {
    let p = Polynomial::new(vec![1, 2, 0, 0]);
    assert_eq!(p.coefficients(), &[1, 2]);
    assert_eq!(p.degree(), 1);

    let zero = Polynomial::new(vec![0, 0, 0]);
    assert_eq!(zero.coefficients(), &[0]);
    assert_eq!(zero.degree(), 0);
    assert!(zero.is_zero());
    assert_eq!(Polynomial::new(Vec::new()), Polynomial::zero());
}

#[test]
fn add_pads_the_shorter_operand() {
    let a = Polynomial::from([1, 2, 3]);
    let b = Polynomial::from([4, 5]);
    assert_eq!(a.add(&b, Modulus::None), Polynomial::from([5, 7, 3]));
    assert_eq!(b.add(&a, Modulus::Int(5)), Polynomial::from([0, 2, 3]));
}

#[test]
fn add_cancelling_leading_terms_trims() {
    let a = Polynomial::from([1, 2, 3]);
    let b = Polynomial::from([1, 1, -3]);
    let sum = a.add(&b, Modulus::None);
    assert_eq!(sum.coefficients(), &[2, 3]);
    assert!(a.sub(&a, Modulus::Int(7)).is_zero());
}

#[test]
fn sub_reduces_into_non_negative_range() {
    let a = Polynomial::from([1, 0, 2]);
    let b = Polynomial::from([2, 1]);
    assert_eq!(a.sub(&b, Modulus::Int(41)), Polynomial::from([40, 40, 2]));
    assert_eq!(a.sub(&b, Modulus::None), Polynomial::from([-1, -1, 2]));
}

#[test]
fn scalar_mul_reduces() {
    let a = Polynomial::from([1, -1, 2]);
    assert_eq!(a.scalar_mul(3, Modulus::Int(41)), Polynomial::from([3, 38, 6]));
    assert_eq!(a.scalar_mul(3, Modulus::Int(3)), Polynomial::zero());
    assert_eq!(a.scalar_mul(-2, Modulus::None), Polynomial::from([-2, 2, -4]));
}

#[test]
fn mul_is_convolution() {
    // (1 + x)(1 - x + x^2) = 1 + x^3
    let a = Polynomial::from([1, 1]);
    let b = Polynomial::from([1, -1, 1]);
    assert_eq!(a.mul(&b, Modulus::None), Polynomial::from([1, 0, 0, 1]));
    assert_eq!(a.mul(&Polynomial::zero(), Modulus::None), Polynomial::zero());

    // (2 + 3x)^2 = 4 + 12x + 9x^2 = 4 + 2x + 4x^2 (mod 5)
    let c = Polynomial::from([2, 3]);
    assert_eq!(c.mul(&c, Modulus::Int(5)), Polynomial::from([4, 2, 4]));
}

#[test]
fn rem_by_cyclic_modulus_wraps_exponents() {
    let m = Polynomial::cyclic_modulus(7);
    assert_eq!(m.coefficients(), &[-1, 0, 0, 0, 0, 0, 0, 1]);

    // x^6 * x = x^7 = 1 in Z[x]/(x^7 - 1)
    let x6 = Polynomial::monomial(1, 6);
    let x = Polynomial::monomial(1, 1);
    let product = x6.mul(&x, Modulus::None).rem(&m, Modulus::None).unwrap();
    assert_eq!(product, Polynomial::one());

    // x^9 + 2x^8 = x^2 + 2x
    let p = Polynomial::from([0, 0, 0, 0, 0, 0, 0, 0, 2, 1]);
    assert_eq!(p.rem(&m, Modulus::Int(41)).unwrap(), Polynomial::from([0, 2, 1]));
}

#[test]
fn div_rem_over_a_prime_field() {
    // x^2 + 1 = (x + 1)(x + 2) + 2 over Z/3Z
    let a = Polynomial::from([1, 0, 1]);
    let b = Polynomial::from([1, 1]);
    let (q, r) = a.div_rem(&b, Modulus::Int(3)).unwrap();
    assert_eq!(q, Polynomial::from([2, 1]));
    assert_eq!(r, Polynomial::constant(2));
    assert_eq!(a.div(&b, Modulus::Int(3)).unwrap(), q);

    // non-monic divisor: 2x + 1 divides 2x^2 + 3x + 1 over Z/5Z
    let a = Polynomial::from([1, 3, 2]);
    let b = Polynomial::from([1, 2]);
    let (q, r) = a.div_rem(&b, Modulus::Int(5)).unwrap();
    assert_eq!(q, Polynomial::from([1, 1]));
    assert!(r.is_zero());
}

#[test]
fn div_rem_of_lower_degree_dividend() {
    let a = Polynomial::from([3, 1]);
    let b = Polynomial::from([1, 0, 1]);
    let (q, r) = a.div_rem(&b, Modulus::None).unwrap();
    assert!(q.is_zero());
    assert_eq!(r, a);
}

#[test]
fn div_rem_over_the_integers() {
    // x^3 - 1 = (x - 1)(x^2 + x + 1)
    let a = Polynomial::from([-1, 0, 0, 1]);
    let b = Polynomial::from([-1, 1]);
    let (q, r) = a.div_rem(&b, Modulus::None).unwrap();
    assert_eq!(q, Polynomial::from([1, 1, 1]));
    assert!(r.is_zero());

    // exact non-unit leading coefficient
    let a = Polynomial::from([0, 4, 6]);
    let b = Polynomial::from([2, 3]);
    assert_eq!(a.div(&b, Modulus::None).unwrap(), Polynomial::from([0, 2]));

    let a = Polynomial::from([0, 1]);
    let b = Polynomial::from([0, 2]);
    assert_matches!(
        a.div_rem(&b, Modulus::None),
        Err(RingError::InexactDivision { dividend: 1, divisor: 2 })
    );
}

#[test]
fn division_by_zero_is_reported() {
    let a = Polynomial::from([1, 2, 3]);
    assert_matches!(
        a.div_rem(&Polynomial::zero(), Modulus::None),
        Err(RingError::DivisionByZero { leading: 0, modulus: Modulus::None })
    );
    // 41 vanishes modulo 41
    assert_matches!(
        a.div_rem(&Polynomial::constant(41), Modulus::Int(41)),
        Err(RingError::DivisionByZero { .. })
    );
    // 2 has no inverse modulo 2048
    assert_matches!(
        a.div_rem(&Polynomial::from([1, 2]), Modulus::Int(2048)),
        Err(RingError::DivisionByZero { leading: 2, modulus: Modulus::Int(2048) })
    );
}

#[test]
fn center_lift_maps_into_symmetric_range() {
    let a = Polynomial::from([0, 1, 20, 21, 40]);
    assert_eq!(a.center_lift(41), Polynomial::from([0, 1, 20, -20, -1]));

    // for an even modulus n/2 stays positive
    let b = Polynomial::from([1023, 1024, 1025, 2047]);
    assert_eq!(b.center_lift(2048), Polynomial::from([1023, 1024, -1023, -1]));

    let c = Polynomial::from([0, 1, 2]);
    assert_eq!(c.center_lift(3), Polynomial::from([0, 1, -1]));
}

#[test]
fn reduce_in_place_trims() {
    let mut a = Polynomial::from([-1, 4, -2, 3]);
    a.reduce(3);
    assert_eq!(a.coefficients(), &[2, 1, 1]);

    let mut b = Polynomial::from([3, -6]);
    b.reduce(3);
    assert_eq!(b.coefficients(), &[0]);
}

#[test]
fn equality_ignores_representation() {
    assert_eq!(Polynomial::from([1, 2]), Polynomial::new(vec![1, 2, 0, 0]));
    assert_ne!(Polynomial::from([1, 2]), Polynomial::from([1, 2, 1]));
    assert_eq!(-Polynomial::from([1, -2]), Polynomial::from([-1, 2]));
}

#[test]
fn coefficient_accessors() {
    let a = Polynomial::from([5, 0, 7]);
    assert_eq!(a.coefficient(2), 7);
    assert_eq!(a.coefficient(10), 0);
    assert_eq!(a.lc(), 7);
    assert_eq!(a.shift(2), Polynomial::from([0, 0, 5, 0, 7]));
    assert_eq!(a.clone().into_coefficients(), vec![5, 0, 7]);
}

#[test]
fn modulus_display() {
    assert_eq!(format!("{}", Modulus::Int(41)), "modulo 41");
    assert_eq!(format!("{}", Modulus::None), "over the integers");
    assert_eq!(Modulus::from(3), Modulus::Int(3));
}

#[test]
fn wide_moduli_do_not_overflow() {
    let n = 1_i64 << 40;
    let m = Modulus::Int(n);
    // (n - 1)^2 = 1 (mod n)
    let last = Polynomial::constant(n - 1);
    assert_eq!(last.mul(&last, m), Polynomial::one());
    assert_eq!(Polynomial::from([n - 1, 3]).scalar_mul(n - 1, m), Polynomial::from([1, n - 3]));

    let max = Modulus::Int(i64::MAX);
    let a = Polynomial::constant(i64::MAX - 1);
    assert_eq!(a.add(&a, max), Polynomial::constant(i64::MAX - 2));
    assert_eq!(Modulus::Int(i64::MAX).mul(i64::MAX - 1, i64::MAX - 1), 1);
}

#[test]
fn unreduced_operands_are_accepted() {
    let m = Modulus::Int(41);
    let big = Polynomial::from([i64::MIN, 5, i64::MAX]);
    let mut small = big.clone();
    small.reduce(41);

    let f = Polynomial::from([-1, 0, 1, 1, -1, 0, 1]);
    assert_eq!(f.mul(&big, m), f.mul(&small, m));
    assert_eq!(big.mul(&f, m), small.mul(&f, m));
    assert_eq!(big.add(&big, m), small.add(&small, m));

    // 2^63 = 8 (mod 41)
    let negated = Polynomial::zero().sub(&Polynomial::constant(i64::MIN), m);
    assert_eq!(negated, Polynomial::constant(8));
    assert_eq!(Modulus::Int(41).reduce(i64::MIN), 33);
}

#[test]
fn division_rejects_degenerate_moduli() {
    let a = Polynomial::from([1, 2, 3]);
    let b = Polynomial::from([1, 1]);
    for n in [-3, 0, 1] {
        assert_matches!(
            a.div_rem(&b, Modulus::Int(n)),
            Err(RingError::InvalidModulus(got)) if got == n
        );
    }
}

#[test]
#[should_panic]
fn zero_modulus_panics_in_infallible_ops() {
    let a = Polynomial::from([1, 2, 3]);
    let _ = a.add(&a, Modulus::Int(0));
}

// PROPERTY TESTS
// ================================================================================================

const PRIMES: [i64; 5] = [2, 3, 7, 41, 257];

fn polynomial(max_len: usize, bound: i64) -> impl Strategy<Value = Polynomial> {
    prop::collection::vec(-bound..=bound, 0..=max_len).prop_map(Polynomial::new)
}

fn prime() -> impl Strategy<Value = i64> {
    prop::sample::select(PRIMES.to_vec())
}

proptest! {
    #[test]
    fn adding_zero_is_identity(a in polynomial(16, 1000), n in prime()) {
        let modulus = Modulus::Int(n);
        let mut expected = a.clone();
        expected.reduce(n);
        prop_assert_eq!(a.add(&Polynomial::zero(), modulus), expected);
        prop_assert_eq!(a.add(&Polynomial::zero(), Modulus::None), a);
    }

    #[test]
    fn mul_is_commutative(a in polynomial(12, 50), b in polynomial(12, 50), n in prime()) {
        prop_assert_eq!(a.mul(&b, Modulus::None), b.mul(&a, Modulus::None));
        prop_assert_eq!(a.mul(&b, Modulus::Int(n)), b.mul(&a, Modulus::Int(n)));
    }

    #[test]
    fn div_rem_reconstructs_dividend(
        a in polynomial(20, 1000),
        b in polynomial(8, 1000),
        n in prime(),
    ) {
        let modulus = Modulus::Int(n);
        let mut b_reduced = b.clone();
        b_reduced.reduce(n);
        prop_assume!(!b_reduced.is_zero());

        let (q, r) = a.div_rem(&b, modulus).unwrap();
        prop_assert!(r.is_zero() || r.degree() < b_reduced.degree());

        let mut expected = a.clone();
        expected.reduce(n);
        prop_assert_eq!(q.mul(&b, modulus).add(&r, modulus), expected);
    }

    #[test]
    fn div_rem_by_monic_over_the_integers(
        a in polynomial(12, 1000),
        mut b in prop::collection::vec(-2i64..=2, 0..4),
    ) {
        b.push(1);
        let b = Polynomial::new(b);
        let (q, r) = a.div_rem(&b, Modulus::None).unwrap();
        prop_assert!(r.is_zero() || r.degree() < b.degree());
        prop_assert_eq!(q.mul(&b, Modulus::None).add(&r, Modulus::None), a);
    }

    #[test]
    fn inverse_is_a_ring_inverse(
        f in polynomial(7, 5),
        n in prop::sample::select(vec![2i64, 3, 41, 257, 2048]),
    ) {
        let m = Polynomial::cyclic_modulus(7);
        let modulus = Modulus::Int(n);
        if let Ok(f_inv) = inverse(&f, &m, n) {
            prop_assert!(f_inv.degree() < 7);
            let product = f.mul(&f_inv, modulus).rem(&m, modulus).unwrap();
            prop_assert_eq!(product, Polynomial::one());
        }
    }

    #[test]
    fn center_lift_is_congruent_and_bounded(a in polynomial(16, 10_000), n in 2i64..5000) {
        let lifted = a.center_lift(n);
        for i in 0..=a.degree().max(lifted.degree()) {
            let c = lifted.coefficient(i);
            prop_assert!(c > n / 2 - n && c <= n / 2);
            prop_assert_eq!((c - a.coefficient(i)).rem_euclid(n), 0);
        }
    }
}
