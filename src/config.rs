use std::env;

pub const DEFAULT_INFERENCE_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL_ID: &str = "claude-3-haiku-20240307";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub inference_url: String,
    pub model_id: String,
    pub api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            inference_url: env::var("INFERENCE_URL")
                .unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string()),
            model_id: env::var("MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            api_key: env::var("INFERENCE_API_KEY")
                .map_err(|e| format!("INFERENCE_API_KEY: {}", e))?,
        })
    }
}
