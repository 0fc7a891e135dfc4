//! Configuration from environment variables (and `.env`)

use crate::error::Result;
use crate::language::Catalog;
use crate::llm::CandidateGenerator;
use crate::matching::{Matcher, Registry, DEFAULT_THRESHOLD};
use crate::pipeline::Pipeline;
use crate::types::LlmConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Environment keys
pub mod keys {
    pub const REGISTRY: &str = "NAME_FORGE_REGISTRY";
    pub const THRESHOLD: &str = "NAME_FORGE_THRESHOLD";
    pub const TIMEOUT_SECS: &str = "NAME_FORGE_TIMEOUT_SECS";
    pub const PROVIDER: &str = "NAME_FORGE_PROVIDER";
}

/// Provider env layout: (provider, api key var, model var, default model, base url var)
const PROVIDER_ENV: &[(&str, Option<&str>, &str, &str, &str)] = &[
    ("gemini", Some("GEMINI_API_KEY"), "GEMINI_MODEL", "gemini-2.5-flash", "GEMINI_BASE_URL"),
    ("openai", Some("OPENAI_API_KEY"), "OPENAI_MODEL", "gpt-4.1-mini", "OPENAI_BASE_URL"),
    ("anthropic", Some("ANTHROPIC_API_KEY"), "ANTHROPIC_MODEL", "claude-sonnet-4-5", "ANTHROPIC_BASE_URL"),
    ("ollama", None, "OLLAMA_MODEL", "llama3.1", "OLLAMA_BASE_URL"),
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub registry_path: Option<PathBuf>,
    pub threshold: f64,
    pub timeout: Duration,
    /// Preferred provider; defaults to the first configured one
    pub default_provider: Option<String>,
    pub providers: Vec<LlmConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            registry_path: None,
            threshold: DEFAULT_THRESHOLD,
            timeout: crate::llm::generator::DEFAULT_TIMEOUT,
            default_provider: None,
            providers: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let threshold = match get(keys::THRESHOLD) {
            Some(raw) => raw
                .parse::<f64>()
                .map_err(|_| crate::config_error!("{} must be a number, got '{}'", keys::THRESHOLD, raw))?,
            None => DEFAULT_THRESHOLD,
        };
        // Range is checked here so a bad value fails at startup
        Matcher::new(threshold)?;

        let timeout = match get(keys::TIMEOUT_SECS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(crate::config_error!(
                        "{} must be a positive whole number of seconds, got '{}'",
                        keys::TIMEOUT_SECS,
                        raw
                    ))
                }
            },
            None => crate::llm::generator::DEFAULT_TIMEOUT,
        };

        let mut providers = Vec::new();
        for &(provider, key_var, model_var, default_model, base_url_var) in PROVIDER_ENV {
            let api_key = match key_var {
                Some(var) => match get(var) {
                    Some(key) => key,
                    None => continue,
                },
                // Keyless local providers are opt-in through their model variable
                None => match get(model_var) {
                    Some(_) => String::new(),
                    None => continue,
                },
            };

            providers.push(LlmConfig {
                provider: provider.to_string(),
                model: get(model_var).unwrap_or_else(|| default_model.to_string()),
                api_key,
                base_url: get(base_url_var),
                temperature: 0.7,
            });
        }

        Ok(Self {
            registry_path: get(keys::REGISTRY).map(PathBuf::from),
            threshold,
            timeout,
            default_provider: get(keys::PROVIDER),
            providers,
        })
    }

    /// Load the configured registry file, or the built-in sample
    pub fn load_registry(&self) -> Result<Registry> {
        match &self.registry_path {
            Some(path) => Registry::load(path),
            None => {
                tracing::debug!("No registry file configured, using built-in sample");
                Ok(Registry::sample())
            }
        }
    }

    /// Candidate generator with every configured provider registered
    pub fn build_generator(&self) -> Result<CandidateGenerator> {
        let generator = CandidateGenerator::new(Catalog::builtin()?).with_timeout(self.timeout);
        for provider in &self.providers {
            generator.add_provider(provider)?;
            tracing::debug!(provider = %provider.provider, model = %provider.model, "Provider configured");
        }
        if let Some(name) = &self.default_provider {
            if !generator.has_provider(name) {
                return Err(crate::config_error!(
                    "{} is '{}' but that provider has no credentials configured",
                    keys::PROVIDER,
                    name
                ));
            }
            generator.set_default_provider(name);
        }
        Ok(generator)
    }

    /// Wire registry, matcher and generator together
    pub fn build_pipeline(&self) -> Result<Pipeline> {
        let registry = self.load_registry()?;
        let matcher = Matcher::new(self.threshold)?;
        let generator = self.build_generator()?;
        Ok(Pipeline::new(registry, matcher, generator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let env: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.threshold, 0.8);
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert!(cfg.registry_path.is_none());
        assert!(cfg.providers.is_empty());
    }

    #[test]
    fn test_threshold_and_timeout() {
        let cfg = config(&[(keys::THRESHOLD, "0.75"), (keys::TIMEOUT_SECS, "12")]).unwrap();
        assert_eq!(cfg.threshold, 0.75);
        assert_eq!(cfg.timeout, Duration::from_secs(12));

        assert!(config(&[(keys::THRESHOLD, "high")]).is_err());
        assert!(config(&[(keys::THRESHOLD, "1.5")]).is_err());
        assert!(config(&[(keys::TIMEOUT_SECS, "0")]).is_err());
    }

    #[test]
    fn test_provider_detection() {
        let cfg = config(&[
            ("GEMINI_API_KEY", "g-key"),
            ("OPENAI_API_KEY", "  "),
            ("ANTHROPIC_API_KEY", "a-key"),
            ("ANTHROPIC_MODEL", "claude-test"),
            ("OLLAMA_MODEL", "llama3"),
        ])
        .unwrap();

        let names: Vec<&str> = cfg.providers.iter().map(|p| p.provider.as_str()).collect();
        assert_eq!(names, vec!["gemini", "anthropic", "ollama"]);
        assert_eq!(cfg.providers[0].model, "gemini-2.5-flash");
        assert_eq!(cfg.providers[1].model, "claude-test");
        assert!(cfg.providers[2].api_key.is_empty());
    }

    #[test]
    fn test_default_provider_must_be_configured() {
        let cfg = config(&[("GEMINI_API_KEY", "g-key"), (keys::PROVIDER, "openai")]).unwrap();
        assert!(cfg.build_generator().is_err());

        let cfg = config(&[
            ("GEMINI_API_KEY", "g-key"),
            ("OPENAI_API_KEY", "o-key"),
            (keys::PROVIDER, "openai"),
        ])
        .unwrap();
        let generator = cfg.build_generator().unwrap();
        assert_eq!(generator.default_provider().as_deref(), Some("openai"));
    }

    #[test]
    fn test_sample_registry_when_unset() {
        let registry = AppConfig::default().load_registry().unwrap();
        assert_eq!(registry, Registry::sample());
    }
}
