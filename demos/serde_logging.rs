//! Example: Structured Logging with Serde
//!
//! Shows the JSON shapes produced for a trail: the compact per-frame records
//! and the full frames with their `loc` and `args` fields.

use error_trail::{arg, prefix, Const};

const TIMEOUT: Const = Const("database connection timeout");

fn query() -> Result<(), error_trail::Trail> {
    Err(arg("host", "db-primary-01").arg("retry_count", 3).wrap(TIMEOUT))
}

fn handler() -> Result<(), error_trail::Trail> {
    query().map_err(|e| prefix("GET /users").arg("status", 503).wrap(e))
}

fn main() {
    let Err(error) = handler() else {
        return;
    };

    println!("Message: {error}");

    match serde_json::to_string_pretty(&error.records()) {
        Ok(json) => println!("Records:\n{json}"),
        Err(e) => eprintln!("Failed to serialize records: {e}"),
    }

    match serde_json::to_string_pretty(error.frames()) {
        Ok(json) => println!("Frames:\n{json}"),
        Err(e) => eprintln!("Failed to serialize frames: {e}"),
    }

    match serde_json::to_string(&error.attr()) {
        Ok(json) => println!("Attribute: {json}"),
        Err(e) => eprintln!("Failed to serialize attribute: {e}"),
    }
}
