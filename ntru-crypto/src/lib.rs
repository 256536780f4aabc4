#![no_std]

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod ntru;
pub mod poly;

// RE-EXPORTS
// ================================================================================================

pub use ntru::{
    KeyGenConfig, KeyPair, NtruEncrypt, NtruError, NtruParams, ParamsError, PublicKey, SecretKey,
};
pub use poly::{Modulus, Polynomial, RingError};

// TESTS
// ================================================================================================
