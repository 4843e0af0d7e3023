// src/crypto/aescrypt.rs
//! Bundled cipher: AES-Crypt v3 containers carried as base64 text
//!
//! Everything works on in-memory buffers. The ciphertext is randomised, so
//! encrypting the same value twice yields different field text.

use std::io::Cursor;

use aescrypt_rs::aliases::Password;
use aescrypt_rs::{decrypt, encrypt};
use log::trace;

use crate::aliases::Passkey;
use crate::config::CipherSettings;
use crate::consts::{AESCRYPT_V3_HEADER, DEFAULT_KDF_ITERATIONS};
use crate::crypto::Cipher;
use crate::error::{Result, RiderError};
use crate::transport::{Base64Transport, TransportCodec};

#[derive(Debug, Clone)]
pub struct AescryptCipher<T = Base64Transport> {
    kdf_iterations: u32,
    transport: T,
}

impl AescryptCipher {
    pub fn new() -> Self {
        Self::with_kdf_iterations(DEFAULT_KDF_ITERATIONS)
    }

    pub fn with_kdf_iterations(kdf_iterations: u32) -> Self {
        Self {
            kdf_iterations,
            transport: Base64Transport,
        }
    }

    pub fn from_settings(settings: &CipherSettings) -> Self {
        Self::with_kdf_iterations(settings.kdf_iterations)
    }
}

impl Default for AescryptCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TransportCodec> AescryptCipher<T> {
    /// Swaps the text encoding applied to the raw container bytes.
    pub fn with_transport<U: TransportCodec>(self, transport: U) -> AescryptCipher<U> {
        AescryptCipher {
            kdf_iterations: self.kdf_iterations,
            transport,
        }
    }

    pub fn kdf_iterations(&self) -> u32 {
        self.kdf_iterations
    }

    fn password(key: &Passkey) -> Password {
        Password::new(key.expose_secret().clone())
    }
}

impl<T: TransportCodec> Cipher for AescryptCipher<T> {
    fn encrypt(&self, key: &Passkey, plaintext: &str) -> Result<String> {
        let mut out = Vec::new();
        encrypt(
            Cursor::new(plaintext.as_bytes()),
            &mut out,
            &Self::password(key),
            self.kdf_iterations,
        )
        .map_err(|e| RiderError::Encryption(e.to_string()))?;

        trace!("Encrypted {} byte(s) into {} byte container", plaintext.len(), out.len());
        Ok(self.transport.encode(&out))
    }

    fn decrypt(&self, key: &Passkey, ciphertext: &str) -> Result<String> {
        // A value that is not even valid transport text is malformed ciphertext
        let container = self
            .transport
            .decode(ciphertext)
            .map_err(|e| RiderError::Decryption(e.to_string()))?;

        if container.get(..AESCRYPT_V3_HEADER.len()) != Some(AESCRYPT_V3_HEADER.as_slice()) {
            return Err(RiderError::Decryption(
                "value is not an AES-Crypt v3 container".into(),
            ));
        }

        let mut out = Vec::new();
        decrypt(Cursor::new(container), &mut out, &Self::password(key))
            .map_err(|e| RiderError::Decryption(e.to_string()))?;

        String::from_utf8(out).map_err(|e| RiderError::Decryption(e.to_string()))
    }
}
