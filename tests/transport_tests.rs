// tests/transport_tests.rs
use field_rider::{
    transport_decode, transport_decode_text, transport_encode, transport_encode_text,
    Base64Transport, RiderError, TransportCodec,
};

#[test]
fn test_text_roundtrip() {
    for text in ["", "a", "piggyback", "räksmörgås ¤ 漢字", "line1\nline2\r\n"] {
        assert_eq!(transport_decode_text(&transport_encode_text(text)).unwrap(), text);
    }
}

#[test]
fn test_bytes_roundtrip() {
    let bytes: Vec<u8> = (0..=255).collect();
    assert_eq!(transport_decode(&transport_encode(&bytes)).unwrap(), bytes);
}

#[test]
fn test_decode_ignores_inserted_whitespace() {
    let text = "The quick brown fox jumps over the lazy dog";
    let encoded = transport_encode_text(text);

    let spaced: String = encoded
        .chars()
        .enumerate()
        .flat_map(|(i, c)| match i % 4 {
            0 => vec![' ', c],
            1 => vec!['\n', c],
            2 => vec!['\t', c],
            _ => vec!['\r', c],
        })
        .collect();

    assert_eq!(transport_decode_text(&spaced).unwrap(), text);
}

#[test]
fn test_known_vector() {
    assert_eq!(transport_encode_text("Man"), "TWFu");
    assert_eq!(transport_encode_text("Ma"), "TWE=");
    assert_eq!(transport_decode_text("TW E=\n").unwrap(), "Ma");
}

#[test]
fn test_invalid_input_is_reported() {
    assert!(matches!(
        transport_decode("TWE"),
        Err(RiderError::TransportDecode(_))
    ));
    assert!(matches!(
        transport_decode("T*E="),
        Err(RiderError::TransportDecode(_))
    ));
}

#[test]
fn test_trait_object_usage() {
    let codec: &dyn TransportCodec = &Base64Transport;
    let encoded = codec.encode_text("dyn");
    assert_eq!(codec.decode_text(&encoded).unwrap(), "dyn");
}
