//! Message definitions
//!
//! Represents call requests and responses.

use uuid::Uuid;

/// One-byte wire discriminator for parameter values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TypeTag {
    String = 0x01,
    Bool = 0x02,
    Int = 0x03,
}

impl TypeTag {
    /// Parse a tag byte read off the wire
    ///
    /// Returns `None` for bytes outside the known set.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(TypeTag::String),
            0x02 => Some(TypeTag::Bool),
            0x03 => Some(TypeTag::Int),
            _ => None,
        }
    }
}

/// A parameter value
///
/// Closed tagged variant: every value a message can carry has exactly one
/// encoding, selected by [`TypeTag`]. Handlers consume and produce this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// UTF-8 string, at most 255 bytes on the wire
    Str(String),

    /// Boolean, one byte on the wire
    Bool(bool),

    /// 32-bit signed integer, big-endian on the wire
    Int(i32),
}

impl Value {
    /// Get the wire tag for this value
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Str(_) => TypeTag::String,
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
        }
    }
}

/// The protocol unit: a call request or its response
///
/// Transient value object - created by a caller or by dispatch, consumed by
/// the codec, never persisted. A request and its response carry the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Opaque 128-bit correlation identifier
    pub id: Uuid,

    /// Function name (at most 255 bytes)
    pub function: String,

    /// Ordered parameter sequence (at most 255 entries)
    pub parameters: Vec<Value>,
}

impl Message {
    /// Create a new message
    pub fn new(id: Uuid, function: impl Into<String>, parameters: Vec<Value>) -> Self {
        Self {
            id,
            function: function.into(),
            parameters,
        }
    }

    /// Build a uniform error response for the given correlation id
    ///
    /// The function name is left empty and the single parameter carries the
    /// error text. Both dispatch failure paths use this shape, so callers
    /// branch on one form of error message.
    pub fn error_response(id: Uuid, text: impl Into<String>) -> Self {
        Self {
            id,
            function: String::new(),
            parameters: vec![Value::Str(text.into())],
        }
    }
}
