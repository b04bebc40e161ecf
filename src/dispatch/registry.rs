//! Handler registry
//!
//! Maps function names to caller-supplied handlers.

use std::collections::HashMap;

use crate::protocol::Value;

/// What a handler returns: one optional value, or descriptive failure text
pub type HandlerResult = std::result::Result<Option<Value>, String>;

/// A registered function
///
/// Receives the request's parameter values in order. `Send + Sync` so a
/// registry can be shared across threads; the handler itself may perform
/// arbitrary side effects.
pub type Handler = Box<dyn Fn(&[Value]) -> HandlerResult + Send + Sync>;

/// Read-only mapping from function name to handler
///
/// Built once by the caller, then only looked up by dispatch.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Handler>,
}

impl HandlerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under a function name
    ///
    /// Registering the same name twice replaces the earlier handler.
    pub fn register<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&[Value]) -> HandlerResult + Send + Sync + 'static,
    {
        self.handlers.insert(name.into(), Box::new(handler));
        self
    }

    /// Look up a handler by function name
    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.handlers.get(name)
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry has no handlers
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("HandlerRegistry")
            .field("functions", &names)
            .finish()
    }
}
