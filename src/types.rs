//! Core types and structures for name-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Language tag used to pick prompt templates and UI strings.
///
/// `English` is the default script; `Arabic` covers right-to-left input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Arabic];

    /// Short language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Parse a language code or display label
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "ar" | "arabic" | "العربية" => Some(Language::Arabic),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Arabic => write!(f, "العربية"),
        }
    }
}

/// Free-text attributes describing the company a name is wanted for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub industry: String,
    pub unique_feature: String,
}

impl Attributes {
    pub fn new(industry: impl Into<String>, unique_feature: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            unique_feature: unique_feature.into(),
        }
    }

    /// Both fields carry non-blank text
    pub fn is_complete(&self) -> bool {
        !self.industry.trim().is_empty() && !self.unique_feature.trim().is_empty()
    }
}

/// What a generation request riffs on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationSubject {
    /// Fresh names from company attributes
    Attributes(Attributes),
    /// Distinct but recognizable variants of an existing name
    SimilarTo(String),
}

/// One request to the candidate generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub subject: GenerationSubject,
    pub language: Language,
}

impl GenerationRequest {
    pub fn from_attributes(attributes: Attributes, language: Language) -> Self {
        Self {
            subject: GenerationSubject::Attributes(attributes),
            language,
        }
    }

    pub fn similar_to(name: impl Into<String>, language: Language) -> Self {
        Self {
            subject: GenerationSubject::SimilarTo(name.into()),
            language,
        }
    }
}

/// Result of the registry lookup alone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Availability {
    Available,
    Taken { similar_names: Vec<String> },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

/// Filtered alternatives generated for one colliding registry name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateGroup {
    pub similar_to: String,
    pub candidates: Vec<String>,
}

/// Outcome of checking a proposed name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum NameCheckOutcome {
    Available {
        name: String,
        language: Language,
        checked_at: DateTime<Utc>,
    },
    Taken {
        name: String,
        language: Language,
        similar_names: Vec<String>,
        groups: Vec<CandidateGroup>,
        warnings: Vec<String>,
        checked_at: DateTime<Utc>,
    },
}

impl NameCheckOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, NameCheckOutcome::Available { .. })
    }

    pub fn language(&self) -> Language {
        match self {
            NameCheckOutcome::Available { language, .. }
            | NameCheckOutcome::Taken { language, .. } => *language,
        }
    }

    pub fn similar_names(&self) -> &[String] {
        match self {
            NameCheckOutcome::Available { .. } => &[],
            NameCheckOutcome::Taken { similar_names, .. } => similar_names,
        }
    }
}

/// Attribute-based suggestions after registry filtering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestions {
    pub names: Vec<String>,
    pub language: Language,
    pub warnings: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// LLM configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: String,
    pub model: String,
    pub api_key: String,
    pub base_url: Option<String>,
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key: String::new(),
            base_url: None,
            temperature: 0.7,
        }
    }
}

/// Counters shared by the generator and the pipeline
#[derive(Debug, Default)]
pub struct PerformanceMetrics {
    api_calls: AtomicU64,
    errors: AtomicU64,
    candidates_extracted: AtomicU64,
    candidates_rejected: AtomicU64,
    total_generation_ms: AtomicU64,
}

impl PerformanceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_api_calls(&self) {
        self.api_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_errors(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_candidates_extracted(&self, count: usize) {
        self.candidates_extracted
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn add_candidates_rejected(&self, count: usize) {
        self.candidates_rejected
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn add_generation_time(&self, millis: u64) {
        self.total_generation_ms.fetch_add(millis, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            api_calls: self.api_calls.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            candidates_extracted: self.candidates_extracted.load(Ordering::Relaxed),
            candidates_rejected: self.candidates_rejected.load(Ordering::Relaxed),
            total_generation_ms: self.total_generation_ms.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`PerformanceMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub api_calls: u64,
    pub errors: u64,
    pub candidates_extracted: u64,
    pub candidates_rejected: u64,
    pub total_generation_ms: u64,
}

impl MetricsSnapshot {
    pub fn avg_generation_time_ms(&self) -> f64 {
        if self.api_calls == 0 {
            0.0
        } else {
            self.total_generation_ms as f64 / self.api_calls as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("AR"), Some(Language::Arabic));
        assert_eq!(Language::from_code(" en "), Some(Language::English));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::Arabic.code(), "ar");
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_attributes_completeness() {
        assert!(Attributes::new("fintech", "instant payouts").is_complete());
        assert!(!Attributes::new("fintech", "  ").is_complete());
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = NameCheckOutcome::Taken {
            name: "ADNOC".to_string(),
            language: Language::English,
            similar_names: vec!["ADNOC".to_string()],
            groups: Vec::new(),
            warnings: Vec::new(),
            checked_at: Utc::now(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "taken");
        assert_eq!(json["language"], "english");
        assert_eq!(json["similar_names"][0], "ADNOC");
    }

    #[test]
    fn test_metrics_snapshot() {
        let metrics = PerformanceMetrics::new();
        metrics.increment_api_calls();
        metrics.increment_api_calls();
        metrics.add_generation_time(300);
        metrics.add_candidates_extracted(9);

        let stats = metrics.get_stats();
        assert_eq!(stats.api_calls, 2);
        assert_eq!(stats.candidates_extracted, 9);
        assert_eq!(stats.avg_generation_time_ms(), 150.0);
    }
}
