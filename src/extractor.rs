//! Content extractor: fetches a web page and reduces it to readable article
//! text.
//!
//! Extraction is heuristic: strip the usual noise elements, then probe an
//! ordered list of likely article containers and take the first that matches.

use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::info;

use crate::errors::SummarizeError;

/// Upper bound on extracted text, chosen to stay inside the model's input
/// token budget.
pub const MAX_EXTRACT_CHARS: usize = 8000;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Some sites reject requests carrying a default library user-agent.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// Compiled once; the selector strings are literals.
static NOISE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("script, style, nav, footer, header")
        .expect("Failed to parse noise selector")
});

// Probed in order; first match wins.
static CONTAINER_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        "article",
        "main",
        "div[class*=\"content\"]",
        "div[class*=\"article\"]",
    ]
    .iter()
    .map(|s| Selector::parse(s).expect("Failed to parse container selector"))
    .collect()
});

/// Fetches pages over HTTP and extracts their article text.
///
/// Holds a reusable `reqwest::Client`; construct once per process and share
/// across requests.
pub struct PageExtractor {
    http: Client,
}

impl PageExtractor {
    #[must_use]
    pub fn new() -> Self {
        let http = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { http }
    }

    /// Fetch `url` and return its cleaned article text, capped at
    /// [`MAX_EXTRACT_CHARS`] characters.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::Fetch`] when the request errors, times out,
    /// or the server answers with a non-success status.
    pub async fn extract(&self, url: &str) -> Result<String, SummarizeError> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;

        let text = extract_from_html(&html);
        info!("Extracted {} characters from {}", text.len(), url);

        Ok(text)
    }
}

impl Default for PageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce an HTML document to whitespace-normalized article text.
///
/// Noise elements (`script`, `style`, `nav`, `footer`, `header`) are detached
/// before extraction. The ordered container probes fall back to the whole
/// document when none match.
#[must_use]
pub fn extract_from_html(html: &str) -> String {
    let mut document = Html::parse_document(html);

    let noise_ids: Vec<_> = document.select(&NOISE_SELECTOR).map(|el| el.id()).collect();
    for id in noise_ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }

    let container = CONTAINER_SELECTORS
        .iter()
        .find_map(|selector| document.select(selector).next())
        .unwrap_or_else(|| document.root_element());

    // Join text nodes with newlines so adjacent elements don't run together;
    // normalization collapses them back into single spaces.
    let raw = container.text().collect::<Vec<_>>().join("\n");

    let text = normalize_whitespace(&raw);
    text.chars().take(MAX_EXTRACT_CHARS).collect()
}

/// Collapse layout whitespace into readable prose: trim each line, split on
/// two-space runs, drop empty fragments, join with single spaces.
#[must_use]
pub fn normalize_whitespace(raw: &str) -> String {
    raw.lines()
        .flat_map(|line| line.trim().split("  "))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
