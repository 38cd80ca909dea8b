use pagebrief::errors::SummarizeError;
use pagebrief::extractor::{
    MAX_EXTRACT_CHARS, PageExtractor, extract_from_html, normalize_whitespace,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Pure HTML extraction
// ============================================================================

#[test]
fn test_article_container_preferred_over_noise() {
    let html = r#"
        <html><body>
            <nav>Site navigation links</nav>
            <article>Hello   world
                example content</article>
            <footer>Copyright footer text</footer>
        </body></html>
    "#;

    let text = extract_from_html(html);
    assert_eq!(text, "Hello world example content");
}

#[test]
fn test_main_container_used_when_no_article() {
    let html = r#"
        <html><body>
            <header>Masthead</header>
            <main>The story itself.</main>
        </body></html>
    "#;

    assert_eq!(extract_from_html(html), "The story itself.");
}

#[test]
fn test_class_substring_container_selection() {
    let html = r#"
        <html><body>
            <div class="sidebar">Related links</div>
            <div class="post-content">Body of the post.</div>
        </body></html>
    "#;

    assert_eq!(extract_from_html(html), "Body of the post.");
}

#[test]
fn test_whole_document_fallback() {
    let html = "<html><body><p>Just a paragraph.</p><p>And another.</p></body></html>";

    assert_eq!(extract_from_html(html), "Just a paragraph. And another.");
}

#[test]
fn test_script_and_style_stripped() {
    let html = r#"
        <html><head><style>body { color: red; }</style></head>
        <body>
            <script>var tracking = true;</script>
            <article>Readable text only.</article>
        </body></html>
    "#;

    let text = extract_from_html(html);
    assert_eq!(text, "Readable text only.");
    assert!(!text.contains("tracking"), "Script content should be stripped");
}

#[test]
fn test_extracted_text_is_capped() {
    let long_paragraph = "word ".repeat(5000);
    let html = format!("<html><body><article>{long_paragraph}</article></body></html>");

    let text = extract_from_html(&html);
    assert_eq!(
        text.chars().count(),
        MAX_EXTRACT_CHARS,
        "Extracted text should be truncated to the cap"
    );
}

// ============================================================================
// Whitespace normalization
// ============================================================================

#[test]
fn test_normalize_whitespace_collapses_layout() {
    let raw = "  Title  \n\n\n   First sentence.    Second   sentence.  \n";
    assert_eq!(
        normalize_whitespace(raw),
        "Title First sentence. Second sentence."
    );
}

#[test]
fn test_normalize_whitespace_empty_input() {
    assert_eq!(normalize_whitespace(""), "");
    assert_eq!(normalize_whitespace("   \n  \n "), "");
}

// ============================================================================
// Fetch behavior (mocked server)
// ============================================================================

#[tokio::test]
async fn test_extract_fetches_and_cleans_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><body><nav>Menu</nav><article>Hello world example content</article></body></html>",
        ))
        .mount(&server)
        .await;

    let extractor = PageExtractor::new();
    let text = extractor
        .extract(&format!("{}/article", server.uri()))
        .await
        .expect("Extraction should succeed");

    assert_eq!(text, "Hello world example content");
}

#[tokio::test]
async fn test_extract_fails_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let extractor = PageExtractor::new();
    let result = extractor.extract(&format!("{}/missing", server.uri())).await;

    match result {
        Err(SummarizeError::Fetch(msg)) => {
            assert!(msg.contains("404"), "Fetch error should mention the status: {msg}");
        }
        other => panic!("Expected a Fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_extract_fails_on_unreachable_host() {
    // Nothing listens on this port.
    let extractor = PageExtractor::new();
    let result = extractor.extract("http://127.0.0.1:1/article").await;

    assert!(matches!(result, Err(SummarizeError::Fetch(_))));
}
