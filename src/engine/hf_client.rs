use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::config::AppConfig;

const API_BASE: &str = "https://api-inference.huggingface.co/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Sampling parameters for one generation request.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: SamplingParameters,
}

#[derive(Serialize)]
struct SamplingParameters {
    max_new_tokens: u32,
    do_sample: bool,
    temperature: f32,
    top_p: f32,
    return_full_text: bool,
}

/// The endpoint answers in one of two shapes depending on the model
/// family; anything else falls through as raw JSON.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerateResponse {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("No API token is configured. Set HUGGINGFACEHUB_API_TOKEN.")]
    MissingToken,
    #[error("The model is still warming up. Please try again shortly. (HF 503)")]
    ModelLoading,
    #[error("Too many requests. Please try again shortly. (HF 429)")]
    RateLimited,
    #[error("Generation endpoint error: {status} - {body}")]
    Remote { status: u16, body: String },
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Anything that can turn a prompt into text. The story engine only sees
/// this trait, so tests can script responses.
pub trait TextGenerator {
    fn generate(&self, prompt: &str, opts: GenerateOptions) -> Result<String, GenerateError>;
}

/// Blocking client for the Hugging Face Inference API. Calls are strictly
/// sequential per session; the 120-second timeout is the only bound.
pub struct HfClient {
    http: Client,
    token: Option<String>,
    url: String,
}

impl HfClient {
    pub fn new(config: &AppConfig) -> Result<Self, GenerateError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            token: config.api_token.clone(),
            url: format!("{}/{}", API_BASE, config.model_name()),
        })
    }
}

impl TextGenerator for HfClient {
    fn generate(&self, prompt: &str, opts: GenerateOptions) -> Result<String, GenerateError> {
        let token = self.token.as_deref().ok_or(GenerateError::MissingToken)?;

        let request = GenerateRequest {
            inputs: prompt,
            parameters: SamplingParameters {
                max_new_tokens: opts.max_new_tokens,
                do_sample: true,
                temperature: opts.temperature,
                top_p: opts.top_p,
                return_full_text: false,
            },
        };

        debug!("POST {} ({} prompt chars)", self.url, prompt.chars().count());
        let resp = self
            .http
            .post(&self.url)
            .bearer_auth(token)
            .json(&request)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(status_error(status, body));
        }

        let parsed = resp.json::<GenerateResponse>()?;
        Ok(extract_text(parsed))
    }
}

/// Map a non-success status to the matching error kind. 503 means the
/// model is still loading; 429 is rate limiting. Both are transient.
fn status_error(status: StatusCode, body: String) -> GenerateError {
    match status {
        StatusCode::SERVICE_UNAVAILABLE => GenerateError::ModelLoading,
        StatusCode::TOO_MANY_REQUESTS => GenerateError::RateLimited,
        _ => GenerateError::Remote {
            status: status.as_u16(),
            body,
        },
    }
}

/// Pull the generated text out of whichever shape the endpoint used.
fn extract_text(response: GenerateResponse) -> String {
    match response {
        GenerateResponse::Batch(items) => items
            .into_iter()
            .next()
            .map(|item| item.generated_text.trim().to_string())
            .unwrap_or_default(),
        GenerateResponse::Single(item) => item.generated_text.trim().to_string(),
        GenerateResponse::Other(value) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn status_503_maps_to_model_loading() {
        let err = status_error(StatusCode::SERVICE_UNAVAILABLE, "busy".to_string());
        assert!(matches!(err, GenerateError::ModelLoading));
    }

    #[test]
    fn status_429_maps_to_rate_limited() {
        let err = status_error(StatusCode::TOO_MANY_REQUESTS, "slow down".to_string());
        assert!(matches!(err, GenerateError::RateLimited));
    }

    #[test]
    fn other_statuses_keep_status_and_body() {
        let err = status_error(StatusCode::BAD_GATEWAY, "upstream died".to_string());
        match err {
            GenerateError::Remote { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "upstream died");
            }
            other => panic!("expected Remote, got {:?}", other),
        }
    }

    #[test]
    fn batch_shape_yields_trimmed_text() {
        let resp = parse(r#"[{"generated_text": " X "}]"#);
        assert_eq!(extract_text(resp), "X");
    }

    #[test]
    fn single_shape_yields_trimmed_text() {
        let resp = parse(r#"{"generated_text": "  once upon a time\n"}"#);
        assert_eq!(extract_text(resp), "once upon a time");
    }

    #[test]
    fn unknown_shape_falls_back_to_raw_rendering() {
        let resp = parse(r#"{"error": "boom"}"#);
        assert_eq!(extract_text(resp), r#"{"error":"boom"}"#);
    }

    #[test]
    fn missing_token_fails_before_any_request() {
        let client = HfClient::new(&AppConfig::default()).unwrap();
        let opts = GenerateOptions {
            max_new_tokens: 10,
            temperature: 0.7,
            top_p: 0.9,
        };
        let err = client.generate("hello", opts).unwrap_err();
        assert!(matches!(err, GenerateError::MissingToken));
    }
}
