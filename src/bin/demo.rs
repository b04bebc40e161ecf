//! wirecall Demo Binary
//!
//! Builds a small handler registry (length, add, print), then round-trips
//! sample requests and their responses through the wire codec.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

use wirecall::{call_function, decode_message, encode_message, HandlerRegistry, Message, Value};

/// wirecall demo driver
#[derive(Parser, Debug)]
#[command(name = "wirecall-demo")]
#[command(about = "Round-trip sample remote calls through the wire codec")]
#[command(version)]
struct Args {
    /// String passed to the length and print functions
    #[arg(short, long, default_value = "Hello, World!")]
    text: String,

    /// First operand for the add function
    #[arg(long, default_value = "10")]
    lhs: i32,

    /// Second operand for the add function
    #[arg(long, default_value = "20")]
    rhs: i32,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wirecall=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("wirecall Demo v{}", wirecall::VERSION);

    let registry = HandlerRegistry::new()
        .register("length", length_handler)
        .register("add", add_handler)
        .register("print", print_handler);

    let calls = [
        Message::new(Uuid::new_v4(), "print", vec![Value::Str(args.text.clone())]),
        Message::new(Uuid::new_v4(), "length", vec![Value::Str(args.text)]),
        Message::new(
            Uuid::new_v4(),
            "add",
            vec![Value::Int(args.lhs), Value::Int(args.rhs)],
        ),
    ];

    for request in calls {
        if let Err(e) = round_trip(request, &registry) {
            tracing::error!("Round trip failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Encode, decode, dispatch, and encode/decode the response
fn round_trip(request: Message, registry: &HandlerRegistry) -> wirecall::Result<()> {
    let encoded = encode_message(&request)?;
    tracing::info!("Serialized {}: {:?}", request.function, encoded);

    let decoded = decode_message(&encoded)?;
    tracing::info!(
        "Decoded request: id={} function={} parameters={:?}",
        decoded.id,
        decoded.function,
        decoded.parameters
    );

    let response = call_function(&decoded, registry);

    let encoded_response = encode_message(&response)?;
    tracing::info!("Serialized response: {:?}", encoded_response);

    let decoded_response = decode_message(&encoded_response)?;
    tracing::info!(
        "Decoded response: id={} function={} parameters={:?}",
        decoded_response.id,
        decoded_response.function,
        decoded_response.parameters
    );

    Ok(())
}

/// Return the byte length of a single string parameter
fn length_handler(params: &[Value]) -> wirecall::HandlerResult {
    if params.len() != 1 {
        return Err("Invalid number of parameters".to_string());
    }
    match &params[0] {
        Value::Str(s) => Ok(Some(Value::Int(s.len() as i32))),
        _ => Err("Invalid parameter type".to_string()),
    }
}

/// Sum two integer parameters
fn add_handler(params: &[Value]) -> wirecall::HandlerResult {
    if params.len() != 2 {
        return Err("Invalid number of parameters".to_string());
    }
    match (&params[0], &params[1]) {
        (Value::Int(a), Value::Int(b)) => Ok(Some(Value::Int(a.wrapping_add(*b)))),
        _ => Err("Invalid parameter type".to_string()),
    }
}

/// Log a single string parameter, returning no value
fn print_handler(params: &[Value]) -> wirecall::HandlerResult {
    if params.len() != 1 {
        return Err("Invalid number of parameters".to_string());
    }
    match &params[0] {
        Value::Str(s) => {
            tracing::info!("{}", s);
            Ok(None)
        }
        _ => Err("Invalid parameter type".to_string()),
    }
}
