use std::env;

use tracing::error;

/// Model-service configuration resolved from the environment once at startup.
#[derive(Clone)]
pub struct AiConfig {
    pub api_key: String,
    /// Model for structured quote and validation requests.
    pub text_model: String,
    /// Model for room renderings and schematics.
    pub image_model: String,
    /// Lightweight model for search-grounded product lookups.
    pub lookup_model: String,
    /// Override for the service base URL, mainly for tests.
    pub base_url: Option<String>,
}

impl AiConfig {
    /// Resolve the configuration, or `None` when the API key is absent.
    /// A missing key is logged but does not halt startup; the caller decides
    /// whether to run without AI features.
    pub fn from_env() -> Option<Self> {
        let api_key = match env::var("GEMINI_API_KEY") {
            Ok(k) if !k.trim().is_empty() => k,
            _ => {
                error!("GEMINI_API_KEY is not set; quote generation is unavailable");
                return None;
            }
        };
        Some(Self {
            api_key,
            text_model: env::var("AVQUOTE_TEXT_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            image_model: env::var("AVQUOTE_IMAGE_MODEL")
                .unwrap_or_else(|_| "imagen-3.0-generate-002".to_string()),
            lookup_model: env::var("AVQUOTE_LOOKUP_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash-lite".to_string()),
            base_url: env::var("AVQUOTE_BASE_URL").ok(),
        })
    }
}
