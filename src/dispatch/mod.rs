//! Dispatch Module
//!
//! Routes decoded requests to registered handlers.
//!
//! The registry is built by the caller and only borrowed here: dispatch
//! never mutates it, so one registry may serve concurrent calls without
//! synchronization. Every request produces a well-formed response message -
//! lookup and handler failures become error responses, never error values.

mod registry;
mod table;

pub use registry::{Handler, HandlerRegistry, HandlerResult};
pub use table::call_function;
