use serde_json::Value;

/// Pretty-print JSON to stdout. Monetary and rate fields arrive as
/// decimal strings rather than floats, so wealth figures round-trip
/// into Node or spreadsheets without precision loss.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}
