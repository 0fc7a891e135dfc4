//! Name Forge - company name collision checking and AI-powered alternatives
//!
//! Scores a proposed name against a registry of taken names, and when it
//! collides, asks a text-generation model for alternatives that are then
//! filtered against the same registry.

pub mod config;
pub mod error;
pub mod language;
pub mod llm;
pub mod matching;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use error::{NameForgeError, Result};
pub use types::{
    Attributes, Availability, CandidateGroup, GenerationRequest, GenerationSubject, Language,
    LlmConfig, MetricsSnapshot, NameCheckOutcome, PerformanceMetrics, Suggestions,
};

// Re-export main functionality
pub use config::AppConfig;
pub use language::{classify, Catalog, Messages};
pub use llm::{extract_list, CandidateGenerator, TextGenerator};
pub use matching::{similarity, Matcher, Registry};
pub use pipeline::Pipeline;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
