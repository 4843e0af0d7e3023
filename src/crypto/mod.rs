// src/crypto/mod.rs
//! Value cipher capability
//!
//! The protocol only needs something that turns text into field-safe
//! ciphertext and back. Cipher errors are handed to the caller untouched.

pub mod aescrypt;

pub use aescrypt::AescryptCipher;

use crate::aliases::Passkey;
use crate::error::Result;

pub trait Cipher {
    /// Must round-trip with [`Cipher::decrypt`] under the same key.
    fn encrypt(&self, key: &Passkey, plaintext: &str) -> Result<String>;

    /// Fails with `RiderError::Decryption` on malformed ciphertext or a wrong key.
    fn decrypt(&self, key: &Passkey, ciphertext: &str) -> Result<String>;
}

impl<C: Cipher + ?Sized> Cipher for &C {
    fn encrypt(&self, key: &Passkey, plaintext: &str) -> Result<String> {
        (**self).encrypt(key, plaintext)
    }

    fn decrypt(&self, key: &Passkey, ciphertext: &str) -> Result<String> {
        (**self).decrypt(key, ciphertext)
    }
}

impl<C: Cipher + ?Sized> Cipher for Box<C> {
    fn encrypt(&self, key: &Passkey, plaintext: &str) -> Result<String> {
        (**self).encrypt(key, plaintext)
    }

    fn decrypt(&self, key: &Passkey, ciphertext: &str) -> Result<String> {
        (**self).decrypt(key, ciphertext)
    }
}

/// Adapts a pair of closures to [`Cipher`].
pub struct FnCipher<E, D> {
    encrypt: E,
    decrypt: D,
}

impl<E, D> FnCipher<E, D>
where
    E: Fn(&Passkey, &str) -> Result<String>,
    D: Fn(&Passkey, &str) -> Result<String>,
{
    pub fn new(encrypt: E, decrypt: D) -> Self {
        Self { encrypt, decrypt }
    }
}

impl<E, D> Cipher for FnCipher<E, D>
where
    E: Fn(&Passkey, &str) -> Result<String>,
    D: Fn(&Passkey, &str) -> Result<String>,
{
    fn encrypt(&self, key: &Passkey, plaintext: &str) -> Result<String> {
        (self.encrypt)(key, plaintext)
    }

    fn decrypt(&self, key: &Passkey, ciphertext: &str) -> Result<String> {
        (self.decrypt)(key, ciphertext)
    }
}
