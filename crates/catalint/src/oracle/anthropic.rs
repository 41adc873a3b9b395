//! Anthropic Claude API oracle implementation.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::json;

use crate::error::{CatalintError, Result};

use super::prompts;
use super::provider::{
    ArtistVerdict, ArtistVerification, Oracle, OracleConfig, OracleRequest, SpellcheckVerdict,
};

/// Anthropic API endpoint.
const API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Anthropic API version.
const API_VERSION: &str = "2023-06-01";

/// Anthropic Claude oracle.
pub struct AnthropicOracle {
    client: Client,
    api_key: String,
    config: OracleConfig,
}

impl AnthropicOracle {
    /// Create a new Anthropic oracle with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, OracleConfig::default())
    }

    /// Create a new Anthropic oracle with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: OracleConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CatalintError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// Create from environment variables.
    ///
    /// Reads `ANTHROPIC_API_KEY`; `CATALINT_MODEL` optionally overrides the model.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            CatalintError::Config("ANTHROPIC_API_KEY environment variable not set".to_string())
        })?;
        let mut config = OracleConfig::default();
        if let Ok(model) = std::env::var("CATALINT_MODEL") {
            config.model = model;
        }
        Self::with_config(api_key, config)
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| CatalintError::Config(format!("Invalid API key: {}", e)))?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));
        Ok(headers)
    }

    /// Send a message to the Claude API.
    fn send_message(&self, user_prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "system": prompts::system_prompt(),
            "messages": [
                {
                    "role": "user",
                    "content": user_prompt
                }
            ]
        });

        let response = self
            .client
            .post(API_URL)
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .map_err(|e| CatalintError::OracleTransport(format!("API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(CatalintError::OracleTransport(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let api_response: ApiResponse = response.json().map_err(|e| {
            CatalintError::OracleMalformedResponse(format!("Failed to parse API response: {}", e))
        })?;

        api_response
            .content
            .into_iter()
            .find_map(|block| (block.content_type == "text").then_some(block.text))
            .ok_or_else(|| {
                CatalintError::OracleMalformedResponse("No text in API response".to_string())
            })
    }
}

/// Parse JSON from a model response, handling markdown code blocks.
pub(crate) fn parse_json_response<T: for<'de> Deserialize<'de>>(response: &str) -> Result<T> {
    let json_str = if response.contains("```json") {
        response
            .split("```json")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .map(|s| s.trim())
            .unwrap_or(response)
    } else if response.contains("```") {
        response
            .split("```")
            .nth(1)
            .map(|s| s.trim())
            .unwrap_or(response)
    } else {
        response.trim()
    };

    serde_json::from_str(json_str).map_err(|e| {
        CatalintError::OracleMalformedResponse(format!("Failed to parse oracle JSON: {}", e))
    })
}

impl Oracle for AnthropicOracle {
    fn detect_artist(&self, request: &OracleRequest) -> Result<ArtistVerdict> {
        let response = self.send_message(&prompts::detect_artist_prompt(request))?;
        parse_json_response(&response)
    }

    fn spellcheck(&self, request: &OracleRequest) -> Result<SpellcheckVerdict> {
        let response = self.send_message(&prompts::spellcheck_prompt(request))?;
        parse_json_response(&response)
    }

    fn verify_artist(&self, request: &OracleRequest) -> Result<ArtistVerification> {
        let response = self.send_message(&prompts::verify_artist_prompt(request))?;
        parse_json_response(&response)
    }

    fn config(&self) -> &OracleConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "anthropic"
    }
}

/// Anthropic API response structure.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

/// Content block in API response.
#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_from_markdown() {
        let response = r#"```json
{
    "hasArtist": true,
    "artistName": "Lisa Larson",
    "confidence": 0.9
}
```"#;

        let parsed: ArtistVerdict = parse_json_response(response).unwrap();
        assert!(parsed.has_artist);
        assert_eq!(parsed.artist_name.as_deref(), Some("Lisa Larson"));
        assert_eq!(parsed.confidence, Some(0.9));
    }

    #[test]
    fn test_parse_plain_json() {
        let response = r#"{"issues": [{"original": "porsling", "corrected": "porslin", "confidence": 0.9}]}"#;

        let parsed: SpellcheckVerdict = parse_json_response(response).unwrap();
        assert_eq!(parsed.issues.len(), 1);
        assert_eq!(parsed.issues[0].corrected, "porslin");
    }

    #[test]
    fn test_unparsable_response_is_malformed() {
        let err = parse_json_response::<ArtistVerdict>("I think so, yes.").unwrap_err();
        assert!(matches!(err, CatalintError::OracleMalformedResponse(_)));
    }
}
