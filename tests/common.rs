// tests/common.rs
//! Shared test utilities: logging setup and a toy cipher

#![allow(dead_code)] // each test binary uses a different subset

use field_rider::{transport_decode, transport_encode, Cipher, Passkey, Result, RiderError};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    env_logger::builder()
        .is_test(true) // captured by `cargo test`
        .parse_default_env() // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent, safe to call multiple times
}

pub fn passkey(key: &str) -> Passkey {
    Passkey::new(key.to_string())
}

/// Repeating-key XOR behind a key fingerprint, base64 on the outside.
///
/// Not a real cipher; it only has to honour the capability contract:
/// round-trips under one key, rejects a wrong key and garbage input.
pub struct XorCipher;

impl XorCipher {
    fn fingerprint(key: &str) -> [u8; 4] {
        let sum = key
            .bytes()
            .fold(0x811c_9dc5u32, |h, b| (h ^ b as u32).wrapping_mul(0x0100_0193));
        sum.to_be_bytes()
    }

    fn xor(data: &[u8], key: &str) -> Vec<u8> {
        let key = key.as_bytes();
        data.iter()
            .enumerate()
            .map(|(i, b)| b ^ key[i % key.len()])
            .collect()
    }
}

impl Cipher for XorCipher {
    fn encrypt(&self, key: &Passkey, plaintext: &str) -> Result<String> {
        let key = key.expose_secret();
        if key.is_empty() {
            return Err(RiderError::Encryption("empty key".into()));
        }
        let mut out = Self::fingerprint(key).to_vec();
        out.extend(Self::xor(plaintext.as_bytes(), key));
        Ok(transport_encode(&out))
    }

    fn decrypt(&self, key: &Passkey, ciphertext: &str) -> Result<String> {
        let key = key.expose_secret();
        let raw =
            transport_decode(ciphertext).map_err(|e| RiderError::Decryption(e.to_string()))?;
        if raw.len() < 4 || raw[..4] != Self::fingerprint(key) {
            return Err(RiderError::Decryption("wrong key or malformed value".into()));
        }
        String::from_utf8(Self::xor(&raw[4..], key))
            .map_err(|e| RiderError::Decryption(e.to_string()))
    }
}
