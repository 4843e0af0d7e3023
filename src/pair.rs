// src/pair.rs
//! A single piggybacked `key=value` entry
//!
//! No validation happens at construction. A key containing `=` or the
//! indicator, or a value containing the indicator, still renders, but will
//! not survive the next parse intact.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::aliases::Passkey;
use crate::consts::KEY_VALUE_SEPARATOR;
use crate::crypto::Cipher;
use crate::error::{Result, RiderError};

/// Ordered key/value record. Identity is the key alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyValuePair {
    key: String,
    value: Option<String>,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// A pair whose value is absent
    pub fn keyed(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn clear_value(&mut self) {
        self.value = None;
    }

    /// `indicator + key + "=" + value + indicator`; an absent value renders empty.
    pub fn render(&self, indicator: &str) -> String {
        let value = self.value.as_deref().unwrap_or_default();
        let mut out =
            String::with_capacity(indicator.len() * 2 + self.key.len() + 1 + value.len());
        out.push_str(indicator);
        out.push_str(&self.key);
        out.push(KEY_VALUE_SEPARATOR);
        out.push_str(value);
        out.push_str(indicator);
        out
    }

    /// Replaces the value with `cipher.encrypt(key, plaintext)`.
    ///
    /// On failure the stored value is left as it was.
    pub fn set_value_encrypted<C: Cipher + ?Sized>(
        &mut self,
        cipher: &C,
        key: &Passkey,
        plaintext: &str,
    ) -> Result<()> {
        let ciphertext = cipher.encrypt(key, plaintext)?;
        self.value = Some(ciphertext);
        Ok(())
    }

    /// Runs the stored value through `cipher.decrypt`; never mutates the pair.
    pub fn value_decrypted<C: Cipher + ?Sized>(&self, cipher: &C, key: &Passkey) -> Result<String> {
        let ciphertext = self
            .value
            .as_deref()
            .ok_or_else(|| RiderError::MissingValue(self.key.clone()))?;
        cipher.decrypt(key, ciphertext)
    }
}

impl PartialEq for KeyValuePair {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for KeyValuePair {}

impl Hash for KeyValuePair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for KeyValuePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {}",
            self.key,
            self.value.as_deref().unwrap_or("null")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_wraps_in_indicator() {
        let pair = KeyValuePair::new("riderkey", "some value");
        assert_eq!(pair.render("¤"), "¤riderkey=some value¤");
        assert_eq!(pair.render("##"), "##riderkey=some value##");
    }

    #[test]
    fn render_absent_value_as_empty() {
        assert_eq!(KeyValuePair::keyed("k").render("¤"), "¤k=¤");
    }

    #[test]
    fn equality_ignores_value() {
        assert_eq!(KeyValuePair::new("a", "1"), KeyValuePair::new("a", "2"));
        assert_ne!(KeyValuePair::new("a", "1"), KeyValuePair::new("A", "1"));
    }

    #[test]
    fn display_shows_null_for_absent() {
        assert_eq!(KeyValuePair::new("a", "1").to_string(), "a = 1");
        assert_eq!(KeyValuePair::keyed("a").to_string(), "a = null");
    }
}
