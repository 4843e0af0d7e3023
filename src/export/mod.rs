// src/export/mod.rs
//! Export utilities for field-rider
//!
//! Snapshots of a pair sequence for hosts that want the metadata outside
//! the field it rides in.

pub use json::{pairs_to_json, settings_to_json};

pub mod json;
