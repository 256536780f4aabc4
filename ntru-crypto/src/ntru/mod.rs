//! NTRU public-key encryption over the truncated ring `Z[x]/(x^N - 1)`.
//!
//! Key generation draws ternary polynomials `f` and `g`, inverts `f` modulo `p` and modulo `q`
//! and publishes `h = f_q * g (mod q)`. A message `m` with small coefficients is encrypted as
//! `e = p * h * r + m (mod q)` for a random ternary blinding polynomial `r`. Decryption computes
//! `a = f * e (mod q)`, lifted to centered coefficients, which equals `p * r * g + f * m` over
//! the integers when the parameters are well chosen, and recovers `m = f_p * a (mod p)`.
//!
//! ## Roles
//!
//! An [NtruEncrypt] instance is created without keys. [NtruEncrypt::key_gen_with_rng] turns it
//! into a key-pair holder which can both encrypt and decrypt. [NtruEncrypt::set_public_key]
//! turns it into an encrypt-only holder of `h`.

use log::{debug, warn};
use rand::{CryptoRng, Rng};

use crate::poly::{self, Modulus, Polynomial, RingError};

mod error;
pub use error::{NtruError, ParamsError};

mod keys;
pub use keys::{KeyPair, PublicKey, SecretKey};

mod params;
pub use params::NtruParams;

mod sampler;
pub use sampler::sample_ternary;


// KEY GENERATION CONFIG
// ================================================================================================

/// Default bound on the number of candidate `f` tried by key generation.
pub const DEFAULT_MAX_KEYGEN_ATTEMPTS: u32 = 100;

/// Tunables of key generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyGenConfig {
    /// Number of candidate secret polynomials `f` tried before giving up with
    /// [NtruError::KeyGenExhausted].
    pub max_attempts: u32,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self { max_attempts: DEFAULT_MAX_KEYGEN_ATTEMPTS }
    }
}

// NTRU ENCRYPT
// ================================================================================================

#[derive(Debug, Clone)]
enum KeyState {
    Empty,
    PublicOnly(PublicKey),
    KeyPair(KeyPair),
}

/// An NTRU instance: fixed parameters plus the key material of one party.
#[derive(Debug, Clone)]
pub struct NtruEncrypt {
    params: NtruParams,
    poly_mod: Polynomial,
    config: KeyGenConfig,
    keys: KeyState,
}

impl NtruEncrypt {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Creates an instance without keys, using the default [KeyGenConfig].
    ///
    /// # Errors
    /// Returns [NtruError::InvalidParameters] if `params` violates its invariants.
    pub fn new(params: NtruParams) -> Result<Self, NtruError> {
        Self::with_config(params, KeyGenConfig::default())
    }

    /// Creates an instance without keys, using the provided key generation config.
    pub fn with_config(params: NtruParams, config: KeyGenConfig) -> Result<Self, NtruError> {
        params.validate()?;
        Ok(Self {
            params,
            poly_mod: Polynomial::cyclic_modulus(params.n()),
            config,
            keys: KeyState::Empty,
        })
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the parameters of this instance.
    pub fn params(&self) -> &NtruParams {
        &self.params
    }

    /// Returns the reduction polynomial `x^N - 1`.
    pub fn reduction_polynomial(&self) -> &Polynomial {
        &self.poly_mod
    }

    /// Returns the public key `h`.
    ///
    /// # Errors
    /// Returns [NtruError::KeyNotSet] if neither a key pair was generated nor a public key set.
    pub fn public_key(&self) -> Result<&PublicKey, NtruError> {
        match &self.keys {
            KeyState::Empty => Err(NtruError::KeyNotSet),
            KeyState::PublicOnly(public) => Ok(public),
            KeyState::KeyPair(pair) => Ok(pair.public_key()),
        }
    }

    /// Returns the key pair, if one was generated.
    pub fn key_pair(&self) -> Option<&KeyPair> {
        match &self.keys {
            KeyState::KeyPair(pair) => Some(pair),
            _ => None,
        }
    }

    /// Returns true if this instance holds a secret key and can decrypt.
    pub fn can_decrypt(&self) -> bool {
        self.key_pair().is_some()
    }

    // KEY MANAGEMENT
    // --------------------------------------------------------------------------------------------

    /// Generates a key pair from OS-provided randomness. See [NtruEncrypt::key_gen_with_rng].
    #[cfg(feature = "std")]
    pub fn key_gen(
        &mut self,
        f: Option<Polynomial>,
        g: Option<Polynomial>,
    ) -> Result<(), NtruError> {
        let mut rng = rand::rng();
        self.key_gen_with_rng(&mut rng, f, g)
    }

    /// Generates a key pair using the provided random number generator.
    ///
    /// `f` and `g` are sampled when omitted, with `d + 1` ones and `d` minus ones for `f` and `d`
    /// of each for `g`. If `f` is not invertible modulo `p` or `q`, it is discarded (`g` is
    /// kept) and a fresh `f` is sampled, up to [KeyGenConfig::max_attempts] candidates in
    /// total. The stored keys are replaced only once a full key pair has been computed.
    ///
    /// # Errors
    /// - [NtruError::KeyGenExhausted] if no invertible `f` was found within the attempt budget.
    /// - [NtruError::Ring] if ring arithmetic fails for another reason.
    pub fn key_gen_with_rng<R: Rng + CryptoRng>(
        &mut self,
        rng: &mut R,
        f: Option<Polynomial>,
        g: Option<Polynomial>,
    ) -> Result<(), NtruError> {
        let (n, d) = (self.params.n(), self.params.d());
        let g = match g {
            Some(g) => g,
            None => sample_ternary(rng, n, d, d)?,
        };

        let mut candidate = f;
        for attempt in 1..=self.config.max_attempts {
            let f = match candidate.take() {
                Some(f) => f,
                None => sample_ternary(rng, n, d + 1, d)?,
            };
            match self.invert(&f) {
                Ok((f_inv_p, f_inv_q)) => {
                    let q = Modulus::Int(self.params.q());
                    let h = f_inv_q.mul(&g, q).rem(&self.poly_mod, q)?;
                    debug!("generated NTRU key pair (N = {n}) after {attempt} attempt(s)");

                    let pair = KeyPair {
                        secret: SecretKey::new(f, g, f_inv_p, f_inv_q),
                        public: PublicKey::new(h),
                    };
                    self.keys = KeyState::KeyPair(pair);
                    return Ok(());
                },
                Err(RingError::NonInvertible { modulus }) => {
                    debug!("attempt {attempt}: f is not invertible modulo {modulus}, resampling");
                },
                Err(err) => return Err(err.into()),
            }
        }

        warn!("key generation gave up after {} attempts", self.config.max_attempts);
        Err(NtruError::KeyGenExhausted { attempts: self.config.max_attempts })
    }

    /// Stores `h` as the public key of this instance, making it an encrypt-only holder.
    ///
    /// Any previously generated secret key is dropped.
    pub fn set_public_key(&mut self, h: impl Into<PublicKey>) {
        self.keys = KeyState::PublicOnly(h.into());
    }

    // ENCRYPTION
    // --------------------------------------------------------------------------------------------

    /// Encrypts `m` using OS-provided randomness. See [NtruEncrypt::encrypt_with_rng].
    #[cfg(feature = "std")]
    pub fn encrypt(&self, m: &Polynomial, r: Option<&Polynomial>) -> Result<Polynomial, NtruError> {
        let mut rng = rand::rng();
        self.encrypt_with_rng(&mut rng, m, r)
    }

    /// Encrypts `m`, sampling the blinding polynomial `r` with `d` ones and `d` minus ones when
    /// it is omitted.
    ///
    /// `m` is not checked; it is recovered by decryption only if it satisfies
    /// [NtruParams::message_fits].
    ///
    /// # Errors
    /// Returns [NtruError::KeyNotSet] if no public key is available.
    pub fn encrypt_with_rng<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        m: &Polynomial,
        r: Option<&Polynomial>,
    ) -> Result<Polynomial, NtruError> {
        match r {
            Some(r) => self.encrypt_with_blinding(m, r),
            None => {
                // fail before drawing randomness
                self.public_key()?;
                let d = self.params.d();
                let r = sample_ternary(rng, self.params.n(), d, d)?;
                self.encrypt_with_blinding(m, &r)
            },
        }
    }

    /// Encrypts `m` with the given blinding polynomial: `e = (p * (h * r) + m) mod (x^N - 1, q)`.
    ///
    /// # Errors
    /// Returns [NtruError::KeyNotSet] if no public key is available.
    pub fn encrypt_with_blinding(
        &self,
        m: &Polynomial,
        r: &Polynomial,
    ) -> Result<Polynomial, NtruError> {
        let h = self.public_key()?.h();
        let q = Modulus::Int(self.params.q());

        let blind = h.mul(r, q).scalar_mul(self.params.p(), q);
        Ok(blind.add(m, q).rem(&self.poly_mod, q)?)
    }

    // DECRYPTION
    // --------------------------------------------------------------------------------------------

    /// Decrypts a ciphertext produced by encryption under the matching public key.
    ///
    /// # Errors
    /// Returns [NtruError::PrivateKeyNotSet] if this instance holds no secret key.
    pub fn decrypt(&self, e: &Polynomial) -> Result<Polynomial, NtruError> {
        let secret = self.key_pair().ok_or(NtruError::PrivateKeyNotSet)?.secret_key();
        let (p, q) = (self.params.p(), self.params.q());

        let mut a = secret
            .f()
            .mul(e, Modulus::Int(q))
            .rem(&self.poly_mod, Modulus::Int(q))?
            .center_lift(q);
        a.reduce(p);

        let m = secret
            .f_inv_p()
            .mul(&a, Modulus::Int(p))
            .rem(&self.poly_mod, Modulus::Int(p))?
            .center_lift(p);
        Ok(m)
    }

    // HELPERS
    // --------------------------------------------------------------------------------------------

    /// Inverts `f` modulo `(x^N - 1, p)` and `(x^N - 1, q)`.
    fn invert(&self, f: &Polynomial) -> Result<(Polynomial, Polynomial), RingError> {
        let f_inv_p = poly::inverse(f, &self.poly_mod, self.params.p())?;
        let f_inv_q = poly::inverse(f, &self.poly_mod, self.params.q())?;
        Ok((f_inv_p, f_inv_q))
    }
}
