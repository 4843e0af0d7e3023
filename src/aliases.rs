// src/aliases.rs
//! Secret wrapper types built on secure-gate
//!
//! Cipher keys are handed around as `Passkey` so they are zeroized on drop
//! and never show up in `Debug` output.

pub use secure_gate::dynamic_alias;

dynamic_alias!(Passkey, String); // passphrase handed to a `Cipher`
