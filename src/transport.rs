// src/transport.rs
//! Transport-safe text encoding of arbitrary bytes
//!
//! Decoding is whitespace tolerant: spaces, tabs, CR and LF are stripped
//! before the payload is decoded, so wrapped or indented values still work.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::consts::TRANSPORT_WHITESPACE;
use crate::error::{Result, RiderError};

pub trait TransportCodec {
    fn encode(&self, bytes: &[u8]) -> String;

    fn decode(&self, text: &str) -> Result<Vec<u8>>;

    fn encode_text(&self, text: &str) -> String {
        self.encode(text.as_bytes())
    }

    /// Decodes and requires the result to be UTF-8.
    fn decode_text(&self, text: &str) -> Result<String> {
        String::from_utf8(self.decode(text)?)
            .map_err(|e| RiderError::TransportDecode(e.to_string()))
    }
}

/// Standard-alphabet, padded base64.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64Transport;

impl TransportCodec for Base64Transport {
    fn encode(&self, bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        let compact: String = text
            .chars()
            .filter(|c| !TRANSPORT_WHITESPACE.contains(c))
            .collect();
        STANDARD
            .decode(compact)
            .map_err(|e| RiderError::TransportDecode(e.to_string()))
    }
}

pub fn transport_encode(bytes: &[u8]) -> String {
    Base64Transport.encode(bytes)
}

pub fn transport_decode(text: &str) -> Result<Vec<u8>> {
    Base64Transport.decode(text)
}

pub fn transport_encode_text(text: &str) -> String {
    Base64Transport.encode_text(text)
}

pub fn transport_decode_text(text: &str) -> Result<String> {
    Base64Transport.decode_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_strips_whitespace() {
        let encoded = transport_encode_text("piggyback");
        let (head, tail) = encoded.split_at(4);
        let wrapped = format!(" {head}\r\n\t{tail} \n");
        assert_eq!(transport_decode_text(&wrapped).unwrap(), "piggyback");
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            transport_decode("not*base64"),
            Err(RiderError::TransportDecode(_))
        ));
    }

    #[test]
    fn decode_text_rejects_non_utf8() {
        let encoded = transport_encode(&[0xff, 0xfe, 0xfd]);
        assert!(transport_decode(&encoded).is_ok());
        assert!(matches!(
            transport_decode_text(&encoded),
            Err(RiderError::TransportDecode(_))
        ));
    }
}
