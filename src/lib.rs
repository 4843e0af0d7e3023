// src/lib.rs
//! field-rider: piggyback key=value metadata inside free-text fields
//!
//! Features:
//! - Delimiter-bounded `key=value` tokens embedded in notes and comments
//! - Surrounding human text survives parse/render cycles
//! - Pluggable value cipher (AES-Crypt v3 bundled) and base64 transport
//! - TOML configuration with env overrides

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod export;
pub mod indicator;
pub mod pair;
pub mod rider;
pub mod transport;
pub mod warning;

// Re-export everything users need at the crate root
pub use aliases::Passkey;
pub use config::{load as load_config, CipherSettings, RiderConfig};
pub use crypto::{AescryptCipher, Cipher, FnCipher};
pub use error::{Result, RiderError};
pub use export::{pairs_to_json, settings_to_json};
pub use indicator::Indicator;
pub use pair::KeyValuePair;
pub use rider::{
    parse, parse_with_warnings, render, render_with_policy, FieldRider, MalformedTokenPolicy,
    PairSequence,
};
pub use transport::{
    transport_decode, transport_decode_text, transport_encode, transport_encode_text,
    Base64Transport, TransportCodec,
};
pub use warning::RiderWarning;
