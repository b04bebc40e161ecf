//! # wirecall
//!
//! A minimal binary message framing format for remote function calls:
//! - Compact hand-rolled wire codec (big-endian, one-byte length prefixes)
//! - Typed parameters: String, Bool, 32-bit Int
//! - Synchronous dispatch of decoded requests to registered handlers
//! - Uniform error responses that preserve request/response symmetry
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐  encode   ┌──────────────┐  decode   ┌──────────────┐
//! │    Caller    │──────────▶│  Wire bytes  │──────────▶│   Dispatch   │
//! │  (Message)   │           │ (transport   │           │    Table     │
//! └──────────────┘           │ out of scope)│           └──────┬───────┘
//!                            └──────────────┘                  │
//!                                                              ▼
//!                            ┌──────────────┐  encode   ┌──────────────┐
//!                            │  Wire bytes  │◀──────────│   Response   │
//!                            └──────────────┘           │  (Message)   │
//!                                                       └──────────────┘
//! ```
//!
//! The core is synchronous and holds no shared mutable state: encode,
//! decode, and dispatch are pure given their inputs, and a
//! [`HandlerRegistry`] may serve concurrent dispatches without locking.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod protocol;
pub mod dispatch;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, WireError};
pub use protocol::{decode_message, encode_message, Message, TypeTag, Value};
pub use dispatch::{call_function, Handler, HandlerRegistry, HandlerResult};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of wirecall
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
