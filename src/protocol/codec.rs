//! Protocol codec
//!
//! Encoding and decoding functions for the wire format.
//!
//! ## Frame Layout
//!
//! ```text
//! ┌──────────┬──────────┬──────────────┬──────────┬─────────────────┐
//! │ id (16)  │ nameLen  │ functionName │ count(1) │   parameters    │
//! └──────────┴──────────┴──────────────┴──────────┴─────────────────┘
//! ```
//!
//! ### Parameter Layout
//! - String: tag 0x01 + 1-byte length + raw bytes
//! - Bool:   tag 0x02 + 1 byte (1 or 0)
//! - Int:    tag 0x03 + 4 bytes big-endian i32
//!
//! Decoding is strictly sequential: every field read is preceded by a
//! remaining-length check, so a truncated frame fails at the exact field
//! that starved and the decoder never reads past the buffer end. The result
//! is all-or-nothing - a complete [`Message`] or an error, never a partially
//! populated value.

use std::io::{Read, Write};

use uuid::Uuid;

use crate::error::{Result, WireError};
use super::{Message, TypeTag, Value};

/// Correlation id size in bytes
pub const ID_SIZE: usize = 16;

/// Hard cap imposed by the one-byte length prefixes
pub const MAX_FIELD_LEN: usize = 255;

// =============================================================================
// Encoding
// =============================================================================

/// Encode a message to bytes
///
/// Validates the one-byte-prefix caps up front, before emitting anything:
/// function name and every string value at most 255 bytes, at most 255
/// parameters. Oversize input is rejected with [`WireError::FieldTooLong`]
/// rather than silently truncated.
pub fn encode_message(msg: &Message) -> Result<Vec<u8>> {
    if msg.function.len() > MAX_FIELD_LEN {
        return Err(WireError::FieldTooLong(format!(
            "function name is {} bytes (max {})",
            msg.function.len(),
            MAX_FIELD_LEN
        )));
    }
    if msg.parameters.len() > MAX_FIELD_LEN {
        return Err(WireError::FieldTooLong(format!(
            "{} parameters (max {})",
            msg.parameters.len(),
            MAX_FIELD_LEN
        )));
    }
    for (i, param) in msg.parameters.iter().enumerate() {
        if let Value::Str(s) = param {
            if s.len() > MAX_FIELD_LEN {
                return Err(WireError::FieldTooLong(format!(
                    "string parameter {} is {} bytes (max {})",
                    i,
                    s.len(),
                    MAX_FIELD_LEN
                )));
            }
        }
    }

    let mut frame = Vec::with_capacity(encoded_len(msg));

    // Id: 16 raw bytes, fixed width, no prefix
    frame.extend_from_slice(msg.id.as_bytes());

    // Function name: 1-byte length + raw bytes
    frame.push(msg.function.len() as u8);
    frame.extend_from_slice(msg.function.as_bytes());

    // Parameters: 1-byte count, then tag + value each
    frame.push(msg.parameters.len() as u8);
    for param in &msg.parameters {
        frame.push(param.tag() as u8);
        match param {
            Value::Str(s) => {
                frame.push(s.len() as u8);
                frame.extend_from_slice(s.as_bytes());
            }
            Value::Bool(b) => frame.push(u8::from(*b)),
            Value::Int(n) => frame.extend_from_slice(&n.to_be_bytes()),
        }
    }

    Ok(frame)
}

/// Exact wire size of a message, assuming it passes the cap checks
fn encoded_len(msg: &Message) -> usize {
    let params: usize = msg
        .parameters
        .iter()
        .map(|p| match p {
            Value::Str(s) => 1 + 1 + s.len(),
            Value::Bool(_) => 1 + 1,
            Value::Int(_) => 1 + 4,
        })
        .sum();
    ID_SIZE + 1 + msg.function.len() + 1 + params
}

// =============================================================================
// Decoding
// =============================================================================

/// Sequential reader over a frame
///
/// Checks the remaining length before every read and reports the field that
/// starved, so truncation errors point at the exact failure position.
struct FrameReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> FrameReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Take the next `n` bytes, or fail naming the starved field
    fn take(&mut self, n: usize, field: &str) -> Result<&'a [u8]> {
        let remaining = self.buf.len() - self.pos;
        if remaining < n {
            return Err(WireError::InvalidMessageLength(format!(
                "{}: expected {} bytes, got {}",
                field, n, remaining
            )));
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn take_byte(&mut self, field: &str) -> Result<u8> {
        Ok(self.take(1, field)?[0])
    }
}

/// Decode a message from bytes
///
/// Trusts the length fields it reads: parameter count and string lengths are
/// bounded only by their single stored byte. Trailing bytes after a complete
/// frame are ignored.
pub fn decode_message(bytes: &[u8]) -> Result<Message> {
    let mut reader = FrameReader::new(bytes);

    let id_bytes = reader.take(ID_SIZE, "id")?;
    let mut id = [0u8; ID_SIZE];
    id.copy_from_slice(id_bytes);
    let id = Uuid::from_bytes(id);

    let name_len = reader.take_byte("function name length")? as usize;
    let name_bytes = reader.take(name_len, "function name")?;
    let function = String::from_utf8(name_bytes.to_vec())
        .map_err(|_| WireError::InvalidUtf8("function name"))?;

    let param_count = reader.take_byte("parameter count")? as usize;
    let mut parameters = Vec::with_capacity(param_count);

    for i in 0..param_count {
        let tag_byte = reader.take_byte(&format!("parameter {} tag", i))?;
        let tag = TypeTag::from_byte(tag_byte)
            .ok_or(WireError::InvalidParameterType(tag_byte))?;

        let value = match tag {
            TypeTag::String => {
                let len = reader.take_byte(&format!("parameter {} string length", i))? as usize;
                let bytes = reader.take(len, &format!("parameter {} string value", i))?;
                let s = String::from_utf8(bytes.to_vec())
                    .map_err(|_| WireError::InvalidUtf8("string parameter"))?;
                Value::Str(s)
            }
            TypeTag::Bool => {
                // 1 is true, anything else decodes as false
                let byte = reader.take_byte(&format!("parameter {} bool value", i))?;
                Value::Bool(byte == 1)
            }
            TypeTag::Int => {
                let bytes = reader.take(4, &format!("parameter {} int value", i))?;
                Value::Int(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
            }
        };

        parameters.push(value);
    }

    Ok(Message {
        id,
        function,
        parameters,
    })
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read one complete message frame from a stream
///
/// The frame is self-delimiting, so the reader consumes it field by field:
/// each length prefix tells it how many bytes the next field needs. The raw
/// bytes are accumulated and decoded in one pass at the end.
///
/// Blocks until a complete frame is received or an error occurs.
pub fn read_message<R: Read>(reader: &mut R) -> Result<Message> {
    let mut frame = Vec::with_capacity(ID_SIZE + 2);

    read_into(reader, &mut frame, ID_SIZE)?;

    let name_len = read_into(reader, &mut frame, 1)?;
    read_into(reader, &mut frame, name_len as usize)?;

    let param_count = read_into(reader, &mut frame, 1)?;
    for _ in 0..param_count {
        let tag_byte = read_into(reader, &mut frame, 1)?;
        match TypeTag::from_byte(tag_byte) {
            Some(TypeTag::String) => {
                let len = read_into(reader, &mut frame, 1)?;
                read_into(reader, &mut frame, len as usize)?;
            }
            Some(TypeTag::Bool) => {
                read_into(reader, &mut frame, 1)?;
            }
            Some(TypeTag::Int) => {
                read_into(reader, &mut frame, 4)?;
            }
            None => return Err(WireError::InvalidParameterType(tag_byte)),
        }
    }

    decode_message(&frame)
}

/// Read exactly `n` bytes from the stream, appending them to `frame`
///
/// Returns the last byte read (the value of a one-byte field when n == 1).
fn read_into<R: Read>(reader: &mut R, frame: &mut Vec<u8>, n: usize) -> Result<u8> {
    if n == 0 {
        return Ok(0);
    }
    let start = frame.len();
    frame.resize(start + n, 0);
    reader.read_exact(&mut frame[start..])?;
    Ok(frame[frame.len() - 1])
}

/// Write a message frame to a stream
pub fn write_message<W: Write>(writer: &mut W, msg: &Message) -> Result<()> {
    let bytes = encode_message(msg)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
