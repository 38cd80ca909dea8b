//! Response-envelope builders.
//!
//! Every response, on every path, carries the same cross-origin headers so
//! browser-based callers can reach the function directly.

use serde_json::{Value, json};

/// The fixed CORS header set attached to every response.
#[must_use]
pub fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Headers": "Content-Type",
        "Access-Control-Allow-Methods": "POST, OPTIONS",
        "Content-Type": "application/json"
    })
}

/// Returns the 200 response for a CORS preflight check: empty body, headers
/// only.
#[must_use]
pub fn preflight() -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(),
        "body": ""
    })
}

/// Returns a 200 response carrying the generated summary and the original
/// URL.
#[must_use]
pub fn ok_summary(summary: &str, url: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(),
        "body": json!({ "summary": summary, "url": url }).to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": cors_headers(),
        "body": json!({ "error": message }).to_string()
    })
}
