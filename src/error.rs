// src/error.rs
//! Public error type for the entire crate
//!
//! Parsing and rendering never fail; only the injected capabilities
//! (cipher, transport codec) and configuration surface errors here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiderError {
    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Decryption failed: {0}")]
    Decryption(String),

    #[error("Transport decoding failed: {0}")]
    TransportDecode(String),

    #[error("Invalid field indicator: {0}")]
    InvalidIndicator(String),

    #[error("Pair `{0}` has no value to decrypt")]
    MissingValue(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for RiderError {
    fn from(err: toml::de::Error) -> Self {
        RiderError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RiderError>;
