//! Ollama provider implementation
//!
//! Supports local Ollama API for running LLMs locally

use crate::error::{NameForgeError, Result};
use crate::llm::TextGenerator;
use crate::types::LlmConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::http_client;

/// Ollama provider implementation for local LLM inference
pub struct OllamaProvider {
    client: Client,
    model: String,
    base_url: String,
    temperature: f32,
}

impl OllamaProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            model: config.model.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| "http://localhost:11434".to_string()),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl TextGenerator for OllamaProvider {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let request = OllamaRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            options: OllamaOptions {
                temperature: self.temperature,
            },
        };

        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                NameForgeError::network(
                    format!("Failed to connect to Ollama: {}", e),
                    None,
                    Some(url.clone()),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            let error_msg = match status.as_u16() {
                404 => format!(
                    "Model '{}' not found. Please pull the model first: ollama pull {}",
                    self.model, self.model
                ),
                500..=599 => format!("Ollama server error ({}). Make sure Ollama is running", status),
                _ => format!("Ollama API request failed ({}): {}", status, error_text),
            };

            return Err(NameForgeError::network(error_msg, Some(status.as_u16()), Some(url)));
        }

        let ollama_response: OllamaResponse = response
            .json()
            .await
            .map_err(|e| NameForgeError::parse(e.to_string(), None))?;

        Ok(ollama_response.response)
    }

    fn name(&self) -> &'static str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_ready(&self) -> bool {
        true // Ollama doesn't need API key
    }
}

// Ollama API structures
#[derive(Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
}
