//! Codec Tests
//!
//! Tests for message encoding/decoding and the stream helpers.

use std::io::Cursor;

use uuid::Uuid;
use wirecall::protocol::{
    decode_message, encode_message, read_message, write_message, Message, Value,
};
use wirecall::WireError;

fn sample_message() -> Message {
    Message::new(
        Uuid::new_v4(),
        "example",
        vec![
            Value::Str("Hello, World!".to_string()),
            Value::Bool(true),
            Value::Int(-42),
        ],
    )
}

// =============================================================================
// Round-trip Tests
// =============================================================================

#[test]
fn test_round_trip_all_value_kinds() {
    let msg = sample_message();
    let encoded = encode_message(&msg).unwrap();
    let decoded = decode_message(&encoded).unwrap();
    assert_eq!(decoded, msg);
}

#[test]
fn test_round_trip_empty_function_name() {
    let msg = Message::new(Uuid::new_v4(), "", vec![Value::Int(7)]);
    let encoded = encode_message(&msg).unwrap();
    let decoded = decode_message(&encoded).unwrap();
    assert_eq!(decoded, msg);
}

#[test]
fn test_round_trip_no_parameters() {
    let msg = Message::new(Uuid::new_v4(), "ping", vec![]);
    let encoded = encode_message(&msg).unwrap();
    let decoded = decode_message(&encoded).unwrap();
    assert_eq!(decoded, msg);
    // id (16) + name len (1) + "ping" (4) + param count (1)
    assert_eq!(encoded.len(), 22);
}

#[test]
fn test_round_trip_int_extremes() {
    let msg = Message::new(
        Uuid::new_v4(),
        "extremes",
        vec![Value::Int(i32::MIN), Value::Int(i32::MAX), Value::Int(0)],
    );
    let encoded = encode_message(&msg).unwrap();
    let decoded = decode_message(&encoded).unwrap();
    assert_eq!(decoded, msg);
}

#[test]
fn test_round_trip_max_length_fields() {
    let name = "n".repeat(255);
    let value = "v".repeat(255);
    let msg = Message::new(Uuid::new_v4(), name, vec![Value::Str(value)]);
    let encoded = encode_message(&msg).unwrap();
    let decoded = decode_message(&encoded).unwrap();
    assert_eq!(decoded, msg);
}

#[test]
fn test_round_trip_max_parameter_count() {
    let params: Vec<Value> = (0..255).map(|i| Value::Bool(i % 2 == 0)).collect();
    let msg = Message::new(Uuid::new_v4(), "many", params);
    let encoded = encode_message(&msg).unwrap();
    let decoded = decode_message(&encoded).unwrap();
    assert_eq!(decoded, msg);
}

#[test]
fn test_wire_layout_is_stable() {
    let id = Uuid::from_bytes([0xAB; 16]);
    let msg = Message::new(id, "ab", vec![Value::Bool(true), Value::Int(258)]);
    let encoded = encode_message(&msg).unwrap();

    let mut expected = vec![0xAB; 16];
    expected.push(2); // name length
    expected.extend_from_slice(b"ab");
    expected.push(2); // parameter count
    expected.extend_from_slice(&[0x02, 0x01]); // bool true
    expected.extend_from_slice(&[0x03, 0x00, 0x00, 0x01, 0x02]); // int 258 BE
    assert_eq!(encoded, expected);
}

// =============================================================================
// Truncation Tests
// =============================================================================

#[test]
fn test_truncation_at_every_prefix() {
    let encoded = encode_message(&sample_message()).unwrap();

    for cut in 0..encoded.len() {
        match decode_message(&encoded[..cut]) {
            Err(WireError::InvalidMessageLength(_)) => {}
            other => panic!("prefix of {} bytes: expected length error, got {:?}", cut, other),
        }
    }
}

#[test]
fn test_truncated_id_names_the_field() {
    let err = decode_message(&[0u8; 5]).unwrap_err();
    match err {
        WireError::InvalidMessageLength(ctx) => assert!(ctx.contains("id")),
        other => panic!("expected length error, got {:?}", other),
    }
}

#[test]
fn test_empty_input_is_rejected() {
    assert!(matches!(
        decode_message(&[]),
        Err(WireError::InvalidMessageLength(_))
    ));
}

// =============================================================================
// Tag Validation Tests
// =============================================================================

#[test]
fn test_unknown_tag_is_rejected() {
    // id + empty name + one parameter with tag 0x07
    let mut frame = vec![0u8; 16];
    frame.push(0); // name length
    frame.push(1); // parameter count
    frame.push(0x07); // unknown tag

    match decode_message(&frame) {
        Err(WireError::InvalidParameterType(tag)) => assert_eq!(tag, 0x07),
        other => panic!("expected tag error, got {:?}", other),
    }
}

#[test]
fn test_zero_tag_is_rejected() {
    let mut frame = vec![0u8; 16];
    frame.push(0);
    frame.push(1);
    frame.push(0x00);

    assert!(matches!(
        decode_message(&frame),
        Err(WireError::InvalidParameterType(0x00))
    ));
}

#[test]
fn test_unknown_tag_after_valid_parameter() {
    let mut frame = vec![0u8; 16];
    frame.push(0); // name length
    frame.push(2); // parameter count
    frame.extend_from_slice(&[0x02, 0x01]); // bool true
    frame.push(0xFF); // unknown tag in second position

    assert!(matches!(
        decode_message(&frame),
        Err(WireError::InvalidParameterType(0xFF))
    ));
}

// =============================================================================
// Edge Case Tests
// =============================================================================

#[test]
fn test_bool_nonzero_byte_decodes_as_false() {
    // Only the byte 1 means true on the wire
    let mut frame = vec![0u8; 16];
    frame.push(0);
    frame.push(1);
    frame.extend_from_slice(&[0x02, 0x02]);

    let decoded = decode_message(&frame).unwrap();
    assert_eq!(decoded.parameters, vec![Value::Bool(false)]);
}

#[test]
fn test_trailing_bytes_are_ignored() {
    let msg = sample_message();
    let mut encoded = encode_message(&msg).unwrap();
    encoded.extend_from_slice(&[0xDE, 0xAD]);

    let decoded = decode_message(&encoded).unwrap();
    assert_eq!(decoded, msg);
}

#[test]
fn test_oversize_function_name_is_rejected() {
    let msg = Message::new(Uuid::new_v4(), "n".repeat(256), vec![]);
    assert!(matches!(
        encode_message(&msg),
        Err(WireError::FieldTooLong(_))
    ));
}

#[test]
fn test_oversize_string_value_is_rejected() {
    let msg = Message::new(Uuid::new_v4(), "f", vec![Value::Str("v".repeat(256))]);
    assert!(matches!(
        encode_message(&msg),
        Err(WireError::FieldTooLong(_))
    ));
}

#[test]
fn test_oversize_parameter_count_is_rejected() {
    let params = vec![Value::Bool(false); 256];
    let msg = Message::new(Uuid::new_v4(), "f", params);
    assert!(matches!(
        encode_message(&msg),
        Err(WireError::FieldTooLong(_))
    ));
}

#[test]
fn test_invalid_utf8_function_name_is_rejected() {
    let mut frame = vec![0u8; 16];
    frame.push(2); // name length
    frame.extend_from_slice(&[0xC3, 0x28]); // invalid UTF-8 sequence
    frame.push(0); // parameter count

    assert!(matches!(
        decode_message(&frame),
        Err(WireError::InvalidUtf8(_))
    ));
}

// =============================================================================
// Stream Helper Tests
// =============================================================================

#[test]
fn test_stream_round_trip() {
    let msg = sample_message();
    let mut buf = Vec::new();
    write_message(&mut buf, &msg).unwrap();

    let mut cursor = Cursor::new(buf);
    let decoded = read_message(&mut cursor).unwrap();
    assert_eq!(decoded, msg);
}

#[test]
fn test_stream_back_to_back_frames() {
    let first = Message::new(Uuid::new_v4(), "first", vec![Value::Int(1)]);
    let second = Message::new(Uuid::new_v4(), "second", vec![Value::Bool(true)]);

    let mut buf = Vec::new();
    write_message(&mut buf, &first).unwrap();
    write_message(&mut buf, &second).unwrap();

    let mut cursor = Cursor::new(buf);
    assert_eq!(read_message(&mut cursor).unwrap(), first);
    assert_eq!(read_message(&mut cursor).unwrap(), second);
}

#[test]
fn test_stream_truncated_frame_is_io_error() {
    let encoded = encode_message(&sample_message()).unwrap();
    let mut cursor = Cursor::new(&encoded[..encoded.len() - 1]);

    assert!(matches!(
        read_message(&mut cursor),
        Err(WireError::Io(_))
    ));
}

#[test]
fn test_stream_unknown_tag_is_rejected() {
    let mut frame = vec![0u8; 16];
    frame.push(0);
    frame.push(1);
    frame.push(0x09);

    let mut cursor = Cursor::new(frame);
    assert!(matches!(
        read_message(&mut cursor),
        Err(WireError::InvalidParameterType(0x09))
    ));
}
