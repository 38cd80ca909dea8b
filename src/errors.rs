use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("URL is required")]
    MissingUrl,

    #[error("Failed to fetch article: {0}")]
    Fetch(String),

    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),
}

impl SummarizeError {
    /// HTTP status the handler reports for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            SummarizeError::MissingUrl => 400,
            SummarizeError::Fetch(_) | SummarizeError::ModelInvocation(_) => 500,
        }
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::Fetch(error.to_string())
    }
}
