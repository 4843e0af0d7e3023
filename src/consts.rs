// src/consts.rs
//! Shared constants: protocol markers and cipher defaults

/// Default marker bounding each embedded token.
// Currency sign: multi-byte in UTF-8 and rare in ordinary prose
pub const DEFAULT_INDICATOR: &str = "¤";

/// Separates a key from its value inside a token
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Joins rendered pairs (and the unrelated block) in regenerated content
pub const PAIR_SEPARATOR: char = '\n';

/// Characters ignored by the transport decoder
pub const TRANSPORT_WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

/// PBKDF2 iterations for passphrase-derived AES-Crypt v3 keys
pub const DEFAULT_KDF_ITERATIONS: u32 = 16_384;

/// Header magic for AES-Crypt v3 containers
pub const AESCRYPT_V3_HEADER: &[u8; 5] = b"AES\x03\x00";

/// Default location of the TOML configuration file
pub const DEFAULT_CONFIG_PATH: &str = "field-rider.toml";

/// Env var naming an alternative configuration file
pub const CONFIG_PATH_ENV: &str = "FIELD_RIDER_CONFIG";

/// Env var overriding the configured indicator
pub const INDICATOR_ENV: &str = "FIELD_RIDER_INDICATOR";
