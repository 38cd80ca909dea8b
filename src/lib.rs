/// Pagebrief - a Lambda function that summarizes web articles on demand.
///
/// Given a URL in a JSON-body POST, the function fetches the page, extracts
/// readable article text, and asks a hosted language model for a concise
/// summary, returning `{"summary", "url"}` with CORS headers suitable for
/// browser callers.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - reqwest for the page fetch and the inference call
/// - scraper for HTML noise stripping and container selection
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use pagebrief::config::AppConfig;
/// use pagebrief::extractor::PageExtractor;
/// use pagebrief::summarizer::{InferenceClient, Summarizer};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     pagebrief::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let extractor = PageExtractor::new();
///     let summarizer = InferenceClient::new(&config);
///
///     let text = extractor.extract("https://example.com/article").await?;
///     let summary = summarizer.summarize(&text).await?;
///     println!("Summary: {}", summary);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod config;
pub mod errors;
pub mod extractor;
pub mod handler;
pub mod prompt;
pub mod response;
pub mod summarizer;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration. Call once at process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
