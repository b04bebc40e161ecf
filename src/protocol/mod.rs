//! Protocol Module
//!
//! Defines the wire format for framed remote function calls.
//!
//! ## Wire Format (V1 - Simple Binary)
//!
//! All integers are big-endian; all length prefixes are single unsigned bytes.
//!
//! ```text
//! ┌──────────┬──────────┬──────────────┬──────────┬─────────────────┐
//! │ id (16)  │ nameLen  │ functionName │ count(1) │   parameters    │
//! └──────────┴──────────┴──────────────┴──────────┴─────────────────┘
//! ```
//!
//! ### Parameter Encoding
//! Each parameter is a 1-byte tag followed by its value:
//! - 0x01 String - 1-byte length + raw bytes
//! - 0x02 Bool   - 1 byte, 1 or 0
//! - 0x03 Int    - 4 bytes, big-endian two's-complement i32
//!
//! A request and its response share the same 16-byte correlation id.
//! The one-byte length prefixes hard-cap function names and string values at
//! 255 bytes; the codec rejects oversize fields rather than truncating.

mod message;
mod codec;

pub use message::{Message, TypeTag, Value};
pub use codec::{encode_message, decode_message, read_message, write_message};
