//! Candidate generator: prompt construction plus a call to a text provider

use crate::error::{NameForgeError, Result};
use crate::language::Catalog;
use crate::llm::{build_prompt, create_provider, TextGenerator};
use crate::types::{Attributes, GenerationRequest, Language, LlmConfig, MetricsSnapshot, PerformanceMetrics};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default per-call timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds prompts and sends them to the configured text providers.
///
/// Returns the raw reply untouched; parsing is the extractor's job.
#[derive(Clone)]
pub struct CandidateGenerator {
    providers: Arc<RwLock<HashMap<String, Arc<dyn TextGenerator>>>>,
    default_provider: Arc<RwLock<Option<String>>>,
    catalog: Arc<Catalog>,
    timeout: Duration,
    metrics: Arc<PerformanceMetrics>,
}

impl CandidateGenerator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            providers: Arc::new(RwLock::new(HashMap::new())),
            default_provider: Arc::new(RwLock::new(None)),
            catalog: Arc::new(catalog),
            timeout: DEFAULT_TIMEOUT,
            metrics: Arc::new(PerformanceMetrics::new()),
        }
    }

    /// Bound every provider call by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add an LLM provider built from configuration
    pub fn add_provider(&self, config: &LlmConfig) -> Result<()> {
        let provider = create_provider(config)?;
        self.add_generator(config.provider.clone(), Arc::from(provider));
        Ok(())
    }

    /// Register any text generator under `name`. The first one registered
    /// becomes the default.
    pub fn add_generator(&self, name: impl Into<String>, generator: Arc<dyn TextGenerator>) {
        let name = name.into();
        self.providers.write().insert(name.clone(), generator);

        let mut default = self.default_provider.write();
        if default.is_none() {
            *default = Some(name);
        }
    }

    /// Set default provider; ignored if no such provider is registered
    pub fn set_default_provider(&self, provider: &str) {
        if self.has_provider(provider) {
            *self.default_provider.write() = Some(provider.to_string());
        }
    }

    pub fn default_provider(&self) -> Option<String> {
        self.default_provider.read().clone()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Fresh names from company attributes
    pub async fn generate_from_attributes(&self, attributes: &Attributes, language: Language) -> Result<String> {
        let request = GenerationRequest::from_attributes(attributes.clone(), language);
        self.generate(&request).await
    }

    /// Distinct but recognizable variants of an existing name
    pub async fn generate_from_similar_name(&self, source: &str, language: Language) -> Result<String> {
        let request = GenerationRequest::similar_to(source, language);
        self.generate(&request).await
    }

    /// Build the prompt for `request` and return the raw model reply
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let prompt = build_prompt(&self.catalog, request)?;
        tracing::debug!(language = %request.language.code(), prompt_chars = prompt.chars().count(), "Prompt built");
        self.generate_with_fallback(&prompt).await
    }

    /// Send `prompt` to one named provider
    pub async fn generate_with_provider(&self, prompt: &str, provider_name: &str) -> Result<String> {
        let start_time = Instant::now();

        // Clone the Arc so no lock is held across the await
        let provider = {
            let providers = self.providers.read();
            providers
                .get(provider_name)
                .ok_or_else(|| NameForgeError::config(format!("Provider not configured: {}", provider_name)))?
                .clone()
        };

        self.metrics.increment_api_calls();
        let result = match tokio::time::timeout(self.timeout, provider.generate_text(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(NameForgeError::timeout(
                format!("{} generation", provider_name),
                self.timeout.as_secs(),
            )),
        };

        let elapsed = start_time.elapsed();
        self.metrics.add_generation_time(elapsed.as_millis() as u64);

        match &result {
            Ok(text) => {
                tracing::info!(
                    provider = %provider_name,
                    model = %provider.model(),
                    response_chars = text.chars().count(),
                    duration_ms = %elapsed.as_millis(),
                    "Text generation completed"
                );
            }
            Err(e) => {
                self.metrics.increment_errors();
                tracing::warn!(
                    provider = %provider_name,
                    error = %e,
                    retryable = e.is_retryable(),
                    duration_ms = %elapsed.as_millis(),
                    "Text generation failed"
                );
            }
        }

        result
    }

    /// Try the default provider, then every other one in name order
    pub async fn generate_with_fallback(&self, prompt: &str) -> Result<String> {
        let default_provider = self.default_provider();
        let mut order: Vec<String> = {
            let providers = self.providers.read();
            let mut others: Vec<String> = providers
                .keys()
                .filter(|name| Some(*name) != default_provider.as_ref())
                .cloned()
                .collect();
            others.sort();
            others
        };
        if let Some(default) = default_provider.filter(|name| self.has_provider(name)) {
            order.insert(0, default);
        }

        let mut last_error = None;
        for (attempt, provider_name) in order.iter().enumerate() {
            match self.generate_with_provider(prompt, provider_name).await {
                Ok(text) => {
                    if attempt > 0 {
                        tracing::info!(provider = %provider_name, "Fallback provider succeeded");
                    }
                    return Ok(text);
                }
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or_else(|| NameForgeError::config("No LLM providers configured")))
    }

    /// Get available providers
    pub fn available_providers(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if provider is available
    pub fn has_provider(&self, provider: &str) -> bool {
        self.providers.read().contains_key(provider)
    }

    /// Check if any providers are configured
    pub fn is_ready(&self) -> bool {
        !self.providers.read().is_empty()
    }

    /// Shared counters, also fed by the pipeline
    pub fn metrics(&self) -> Arc<PerformanceMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn get_metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.get_stats()
    }
}
