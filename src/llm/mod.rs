//! LLM (Large Language Model) integration module
//!
//! Turns a prompt into free-form text, and free-form text into candidate names.

pub mod extract;
pub mod generator;
pub mod prompt;
pub mod providers;

// Re-export main functionality
pub use extract::extract_list;
pub use generator::CandidateGenerator;
pub use prompt::build_prompt;

use crate::error::Result;
use crate::types::LlmConfig;
use async_trait::async_trait;

/// Core trait for all text-generation backends
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one instruction and return the model's raw reply
    async fn generate_text(&self, prompt: &str) -> Result<String>;

    /// Get provider name
    fn name(&self) -> &'static str;

    /// Get model name being used
    fn model(&self) -> &str;

    /// Check if provider is configured and ready
    fn is_ready(&self) -> bool;
}

/// Get available LLM providers
pub fn available_providers() -> Vec<&'static str> {
    vec!["gemini", "openai", "anthropic", "ollama"]
}

/// Create an LLM provider from configuration
pub fn create_provider(config: &LlmConfig) -> Result<Box<dyn TextGenerator>> {
    match config.provider.as_str() {
        "gemini" => Ok(Box::new(providers::GeminiProvider::new(config)?)),
        "openai" => Ok(Box::new(providers::OpenAiProvider::new(config)?)),
        "anthropic" => Ok(Box::new(providers::AnthropicProvider::new(config)?)),
        "ollama" => Ok(Box::new(providers::OllamaProvider::new(config)?)),
        _ => Err(crate::config_error!(
            "Unsupported LLM provider: {}. Supported providers: {}",
            config.provider,
            available_providers().join(", ")
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider_rejected() {
        let config = LlmConfig {
            provider: "palm".to_string(),
            ..Default::default()
        };
        let err = create_provider(&config).err().unwrap();
        assert!(err.to_string().contains("Unsupported LLM provider: palm"));
    }

    #[test]
    fn test_keyed_provider_requires_key() {
        for provider in ["gemini", "openai", "anthropic"] {
            let config = LlmConfig {
                provider: provider.to_string(),
                ..Default::default()
            };
            assert!(create_provider(&config).is_err(), "{} accepted an empty key", provider);
        }
    }

    #[test]
    fn test_ollama_needs_no_key() {
        let config = LlmConfig {
            provider: "ollama".to_string(),
            model: "llama3".to_string(),
            ..Default::default()
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.name(), "ollama");
        assert_eq!(provider.model(), "llama3");
        assert!(provider.is_ready());
    }
}
