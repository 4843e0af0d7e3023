// src/config/mod.rs
//! Configuration system for field-rider
//!
//! Lazy-loaded global config from TOML with env overrides, plus explicit
//! loaders for callers that manage their own configuration.

pub use app::{load, CipherSettings, RiderConfig};

mod app;
mod defaults;
