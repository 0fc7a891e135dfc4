//! Google Gemini provider implementation
//!
//! Supports Google's Gemini API

use crate::error::{NameForgeError, Result};
use crate::llm::TextGenerator;
use crate::types::LlmConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{http_client, status_error, MAX_OUTPUT_TOKENS};

/// Google Gemini provider implementation
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
}

impl GeminiProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(NameForgeError::config("Gemini API key is required"));
        }

        Ok(Self {
            client: http_client()?,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string()),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: self.temperature,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                NameForgeError::network(
                    format!("Failed to connect to Gemini API: {}", e),
                    None,
                    Some(url.clone()),
                )
            })?;

        if !response.status().is_success() {
            return Err(status_error("Gemini", response, url).await);
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| NameForgeError::parse(e.to_string(), None))?;

        // Blocked prompts come back with no candidates at all.
        let text: String = gemini_response
            .candidates
            .first()
            .map(|c| c.content.parts.iter().map(|p| p.text.as_str()).collect())
            .ok_or_else(|| NameForgeError::llm_provider("gemini", "No candidates in Gemini response", None))?;

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_ready(&self) -> bool {
        !self.api_key.is_empty()
    }
}

// Gemini API structures
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiResponseContent,
}

#[derive(Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shapes() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"['Acme',"},{"text":" 'Zenith']"}],"role":"model"}}]}"#;
        let parsed: GeminiResponse = serde_json::from_str(json).unwrap();
        let text: String = parsed.candidates[0].content.parts.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(text, "['Acme', 'Zenith']");

        let blocked: GeminiResponse = serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(blocked.candidates.is_empty());
    }

    #[test]
    fn test_request_uses_camel_case_config() {
        let request = GeminiRequest {
            contents: vec![GeminiContent { parts: vec![GeminiPart { text: "hi".into() }] }],
            generation_config: GeminiGenerationConfig { temperature: 0.7, max_output_tokens: 1000 },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1000);
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
    }
}
