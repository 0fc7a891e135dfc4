//! LLM provider implementations
//!
//! Each provider is implemented in its own module for better organization and maintainability.

pub mod anthropic;
pub mod gemini;
pub mod ollama;
pub mod openai;

// Re-export providers for easy access
pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

use crate::error::{NameForgeError, Result};
use reqwest::Client;

/// System instruction for chat-style APIs
pub(crate) const SYSTEM_PROMPT: &str =
    "You are a company naming assistant. Reply with the requested names as one bracketed list.";

/// Output token budget; a list of ten names fits comfortably
pub(crate) const MAX_OUTPUT_TOKENS: u32 = 1000;

/// Shared client; the generator's per-call timeout bounds every request
pub(crate) fn http_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!("name-forge/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| NameForgeError::network(e.to_string(), None, None))
}

/// Human-readable message for a failed HTTP status
pub(crate) fn describe_status(provider: &str, status: u16, body: &str) -> String {
    match status {
        401 => format!("Authentication failed (401). Please check your {} API key", provider),
        403 => "Access forbidden (403). Your API key may not have permission".to_string(),
        429 => "Rate limit exceeded (429). Please try again later".to_string(),
        500..=599 => format!("{} server error ({}). The API service is experiencing issues", provider, status),
        _ => format!("{} API request failed ({}): {}", provider, status, body),
    }
}

/// Turn a non-success response into a `Network` error
pub(crate) async fn status_error(provider: &str, response: reqwest::Response, url: String) -> NameForgeError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    NameForgeError::network(describe_status(provider, status, &body), Some(status), Some(url))
}
