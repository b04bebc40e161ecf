//! Dispatch table
//!
//! Resolves a request against a registry and produces a response.

use crate::error::WireError;
use crate::protocol::Message;
use super::HandlerRegistry;

/// Error text for a function name absent from the registry
const UNKNOWN_FUNCTION: &str = "Unknown function";

/// Dispatch a request to its handler and build the response
///
/// Total: always returns a well-formed message, preserving request/response
/// symmetry. Lookup and handler failures become error responses (empty
/// function name, single string parameter with the error text) rather than
/// error values, so a dispatch failure is always transportable.
///
/// On success the response copies the request's id and function name and
/// carries the handler's result as its only parameter, or no parameters at
/// all when the handler returned nothing.
pub fn call_function(request: &Message, registry: &HandlerRegistry) -> Message {
    match invoke(request, registry) {
        Ok(response) => response,
        Err(WireError::HandlerNotFound(name)) => {
            tracing::warn!("No handler registered for function '{}'", name);
            Message::error_response(request.id, UNKNOWN_FUNCTION)
        }
        Err(WireError::HandlerError(text)) => {
            tracing::debug!("Handler for '{}' failed: {}", request.function, text);
            Message::error_response(request.id, text)
        }
        // invoke only produces the two dispatch variants
        Err(other) => Message::error_response(request.id, other.to_string()),
    }
}

/// Resolve and run the handler, surfacing dispatch failures as errors
fn invoke(request: &Message, registry: &HandlerRegistry) -> Result<Message, WireError> {
    let handler = registry
        .get(&request.function)
        .ok_or_else(|| WireError::HandlerNotFound(request.function.clone()))?;

    tracing::trace!(
        "Dispatching '{}' with {} parameter(s)",
        request.function,
        request.parameters.len()
    );

    let result = handler(&request.parameters).map_err(WireError::HandlerError)?;

    let parameters = match result {
        Some(value) => vec![value],
        None => Vec::new(),
    };

    Ok(Message {
        id: request.id,
        function: request.function.clone(),
        parameters,
    })
}
