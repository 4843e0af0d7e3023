// src/config/app.rs
use std::path::Path;
use std::sync::OnceLock;

use log::{debug, warn};
use serde::Deserialize;

use super::defaults::*;
use crate::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, INDICATOR_ENV};
use crate::error::{Result, RiderError};
use crate::indicator::Indicator;
use crate::rider::MalformedTokenPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RiderConfig {
    pub indicator: String,
    pub malformed_tokens: MalformedTokenPolicy,
    pub cipher: CipherSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CipherSettings {
    pub kdf_iterations: u32,
}

impl Default for RiderConfig {
    fn default() -> Self {
        default_config()
    }
}

impl Default for CipherSettings {
    fn default() -> Self {
        default_cipher()
    }
}

impl RiderConfig {
    /// Parses and validates a TOML document; missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let conf: Self = toml::from_str(content)?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// The validated indicator this config names.
    pub fn indicator(&self) -> Result<Indicator> {
        Indicator::new(self.indicator.as_str())
    }

    fn validate(&self) -> Result<()> {
        self.indicator()?;
        if self.cipher.kdf_iterations == 0 {
            return Err(RiderError::Config(
                "cipher.kdf_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }

    fn apply_env(&mut self) {
        if let Ok(indicator) = std::env::var(INDICATOR_ENV) {
            match Indicator::new(indicator.as_str()) {
                Ok(_) => self.indicator = indicator,
                Err(e) => warn!("Ignoring {INDICATOR_ENV}: {e}"),
            }
        }
    }
}

static CONFIG: OnceLock<RiderConfig> = OnceLock::new();

/// Global config, loaded once; falls back to defaults if the file is missing or bad.
pub fn load() -> &'static RiderConfig {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut conf = if Path::new(&config_path).exists() {
            RiderConfig::from_path(&config_path).unwrap_or_else(|e| {
                warn!("Invalid config in {config_path}: {e}; using built-in defaults");
                default_config()
            })
        } else {
            debug!("{config_path} not found; using built-in defaults");
            default_config()
        };

        conf.apply_env();
        conf
    })
}
