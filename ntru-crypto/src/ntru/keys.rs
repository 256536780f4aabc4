use ntru_crypto_derive::{SilentDebug, SilentDisplay};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::poly::Polynomial;

// PUBLIC KEY
// ================================================================================================

/// NTRU public key `h = f_q * g (mod x^N - 1, q)`, coefficients in `[0, q)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    h: Polynomial,
}

impl PublicKey {
    /// Wraps the polynomial `h` as a public key.
    pub fn new(h: Polynomial) -> Self {
        Self { h }
    }

    /// Returns the public polynomial `h`.
    pub fn h(&self) -> &Polynomial {
        &self.h
    }

    /// Consumes the key and returns `h`.
    pub fn into_polynomial(self) -> Polynomial {
        self.h
    }
}

impl From<Polynomial> for PublicKey {
    fn from(h: Polynomial) -> Self {
        Self::new(h)
    }
}

// SECRET KEY
// ================================================================================================

/// NTRU secret key material: the ternary polynomials `f` and `g` together with the inverses of
/// `f` modulo `(x^N - 1, p)` and `(x^N - 1, q)`.
///
/// The coefficients are wiped when the key is dropped and are never printed.
#[derive(Clone, SilentDebug, SilentDisplay)]
pub struct SecretKey {
    f: Polynomial,
    g: Polynomial,
    f_inv_p: Polynomial,
    f_inv_q: Polynomial,
}

impl SecretKey {
    pub(super) fn new(
        f: Polynomial,
        g: Polynomial,
        f_inv_p: Polynomial,
        f_inv_q: Polynomial,
    ) -> Self {
        Self { f, g, f_inv_p, f_inv_q }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the private polynomial `f`.
    pub fn f(&self) -> &Polynomial {
        &self.f
    }

    /// Returns the private polynomial `g`.
    pub fn g(&self) -> &Polynomial {
        &self.g
    }

    /// Returns `f^-1 (mod x^N - 1, p)`.
    pub fn f_inv_p(&self) -> &Polynomial {
        &self.f_inv_p
    }

    /// Returns `f^-1 (mod x^N - 1, q)`.
    pub fn f_inv_q(&self) -> &Polynomial {
        &self.f_inv_q
    }
}

impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        self.f.zeroize();
        self.g.zeroize();
        self.f_inv_p.zeroize();
        self.f_inv_q.zeroize();
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

// KEY PAIR
// ================================================================================================

/// A secret key together with the public key derived from it.
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub(super) secret: SecretKey,
    pub(super) public: PublicKey,
}

impl KeyPair {
    /// Returns the secret half of the pair.
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    /// Returns the public half of the pair.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }
}
