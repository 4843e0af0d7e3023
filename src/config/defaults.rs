// src/config/defaults.rs
use crate::config::app::{CipherSettings, RiderConfig};
use crate::consts::{DEFAULT_INDICATOR, DEFAULT_KDF_ITERATIONS};
use crate::rider::MalformedTokenPolicy;

pub fn default_indicator() -> String {
    DEFAULT_INDICATOR.into()
}

pub fn default_cipher() -> CipherSettings {
    CipherSettings {
        kdf_iterations: DEFAULT_KDF_ITERATIONS,
    }
}

pub fn default_config() -> RiderConfig {
    RiderConfig {
        indicator: default_indicator(),
        malformed_tokens: MalformedTokenPolicy::default(),
        cipher: default_cipher(),
    }
}
