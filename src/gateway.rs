use anyhow::{anyhow, Result};
use base64::Engine as _;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, instrument, trace, warn};

use crate::config::AiConfig;
use crate::quote::GroundingSource;

/// Default base URL of the hosted model service.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Temperature for structured quote and validation requests.
const TEXT_TEMPERATURE: f64 = 0.2;

/// Fixed parameters for image generation.
const IMAGE_ASPECT_RATIO: &str = "16:9";
const IMAGE_SAMPLE_COUNT: u32 = 1;

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: CandidateContent,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebSource>,
}

#[derive(Deserialize)]
struct WebSource {
    uri: String,
    title: String,
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: String,
}

/// Thin client for the hosted model service.
///
/// Every method performs exactly one network round-trip. There is no retry,
/// timeout or backoff; transport and service errors are logged and
/// propagated unchanged.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, base_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.unwrap_or_else(|| GEMINI_BASE_URL.to_string()),
        }
    }

    pub fn from_config(cfg: &AiConfig) -> Self {
        Self::new(cfg.api_key.clone(), cfg.base_url.clone())
    }

    async fn post(&self, path: &str, body: &Value) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url, "sending model request");

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let err_text = resp.text().await.unwrap_or_default();
            warn!(%status, "model service error");
            return Err(anyhow!("model service error {status}: {err_text}"));
        }

        let raw = resp.text().await?;
        trace!(raw = %raw, "model response");
        Ok(raw)
    }

    fn parse_body<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T> {
        serde_json::from_str(raw).map_err(|err| {
            warn!(%err, "model response body failed to parse");
            anyhow!("unparseable model response: {err}")
        })
    }

    /// Request structured JSON output constrained by `schema`, returning the
    /// raw response text for the normalizer to parse.
    #[instrument(level = "trace", skip(self, instructions, schema))]
    pub async fn generate_json(
        &self,
        model: &str,
        instructions: &str,
        schema: Value,
    ) -> Result<String> {
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": instructions }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
                "temperature": TEXT_TEMPERATURE,
            }
        });
        let raw = self
            .post(&format!("/v1beta/models/{model}:generateContent"), &body)
            .await?;
        let parsed: GenerateResponse = Self::parse_body(&raw)?;
        candidate_text(&parsed)
    }

    /// Request free text with the web-search tool enabled, returning the text
    /// plus whatever web citations the service attached.
    #[instrument(level = "trace", skip(self, instructions))]
    pub async fn generate_grounded(
        &self,
        model: &str,
        instructions: &str,
    ) -> Result<(String, Vec<GroundingSource>)> {
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": instructions }] }],
            "tools": [{ "google_search": {} }],
        });
        let raw = self
            .post(&format!("/v1beta/models/{model}:generateContent"), &body)
            .await?;
        let parsed: GenerateResponse = Self::parse_body(&raw)?;
        let text = candidate_text(&parsed)?;

        let sources = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.grounding_metadata)
            .map(|meta| {
                meta.grounding_chunks
                    .into_iter()
                    // Chunks without a web citation carry nothing to show.
                    .filter_map(|chunk| chunk.web)
                    .map(|web| GroundingSource {
                        uri: web.uri,
                        title: web.title,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok((text, sources))
    }

    /// Generate one image and return its decoded bytes. A response with zero
    /// images is an explicit error, never a placeholder.
    #[instrument(level = "trace", skip(self, prompt))]
    pub async fn generate_image(&self, model: &str, prompt: &str) -> Result<Vec<u8>> {
        let body = json!({
            "instances": [{ "prompt": prompt }],
            "parameters": {
                "sampleCount": IMAGE_SAMPLE_COUNT,
                "aspectRatio": IMAGE_ASPECT_RATIO,
            }
        });
        let raw = self
            .post(&format!("/v1beta/models/{model}:predict"), &body)
            .await?;
        let parsed: PredictResponse = Self::parse_body(&raw)?;

        let first = parsed
            .predictions
            .first()
            .ok_or_else(|| anyhow!("image generation returned no images"))?;
        let bytes =
            base64::engine::general_purpose::STANDARD.decode(&first.bytes_base64_encoded)?;
        Ok(bytes)
    }
}

fn candidate_text(resp: &GenerateResponse) -> Result<String> {
    let candidate = resp
        .candidates
        .first()
        .ok_or_else(|| anyhow!("missing response candidate"))?;
    let text: String = candidate
        .content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();
    Ok(text.trim().to_string())
}
