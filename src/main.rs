use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use std::sync::Arc;

use pagebrief::config::AppConfig;
use pagebrief::extractor::PageExtractor;
use pagebrief::handler;
use pagebrief::summarizer::InferenceClient;

#[tokio::main]
async fn main() -> Result<(), Error> {
    pagebrief::setup_logging();

    let config = AppConfig::from_env().map_err(Error::from)?;

    // Long-lived clients, constructed once per process and injected into the
    // handler so tests can substitute their own.
    let extractor = Arc::new(PageExtractor::new());
    let summarizer = Arc::new(InferenceClient::new(&config));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let extractor = Arc::clone(&extractor);
        let summarizer = Arc::clone(&summarizer);
        async move { handler::function_handler(event, &extractor, summarizer.as_ref()).await }
    }))
    .await
}
