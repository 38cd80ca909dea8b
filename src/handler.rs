//! Request handler: parses the inbound Lambda proxy event, validates it, and
//! runs the extract → summarize pipeline.
//!
//! Exactly one response envelope is produced per event, whichever stage
//! fails; every envelope carries the fixed CORS headers.

use lambda_runtime::{Error, LambdaEvent};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

use crate::errors::SummarizeError;
use crate::extractor::PageExtractor;
use crate::response;
use crate::summarizer::Summarizer;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Lambda entrypoint wrapper around [`handle_request`].
///
/// Never returns `Err`: all failures are mapped to error envelopes so the
/// caller always receives a response.
#[tracing::instrument(level = "info", skip_all)]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    extractor: &PageExtractor,
    summarizer: &dyn Summarizer,
) -> Result<Value, Error> {
    Ok(handle_request(&event.payload, extractor, summarizer).await)
}

/// Handle one proxy event and produce its response envelope.
pub async fn handle_request(
    payload: &Value,
    extractor: &PageExtractor,
    summarizer: &dyn Summarizer,
) -> Value {
    // Preflight requests get headers only, no downstream work.
    if request_method(payload) == Some("OPTIONS") {
        return response::preflight();
    }

    let body = payload
        .get("body")
        .and_then(|b| b.as_str())
        .unwrap_or("{}");

    let request: SummarizeRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            error!("Malformed request body: {}", e);
            return response::err_response(500, &e.to_string());
        }
    };

    let Some(url) = request.url.filter(|u| !u.is_empty()) else {
        let err = SummarizeError::MissingUrl;
        return response::err_response(err.status_code(), &err.to_string());
    };

    info!("Received URL: {}", url);

    let article_text = match extractor.extract(&url).await {
        Ok(text) => text,
        Err(e) => {
            error!("Extraction failed: {}", e);
            return response::err_response(e.status_code(), &e.to_string());
        }
    };

    let summary = match summarizer.summarize(&article_text).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Summarization failed: {}", e);
            return response::err_response(e.status_code(), &e.to_string());
        }
    };

    info!("Generated summary: {} characters", summary.len());

    response::ok_summary(&summary, &url)
}

/// Read the HTTP method from either proxy-event format (REST `httpMethod` or
/// HTTP API v2 `requestContext.http.method`).
fn request_method(payload: &Value) -> Option<&str> {
    payload
        .get("httpMethod")
        .and_then(|m| m.as_str())
        .or_else(|| {
            payload
                .get("requestContext")
                .and_then(|c| c.get("http"))
                .and_then(|h| h.get("method"))
                .and_then(|m| m.as_str())
        })
}
