//! Name check pipeline
//!
//! classify → match → (taken) one generation per colliding name → filter,
//! and on request, attribute-based suggestions → filter. Generation calls run
//! one after another. A failed call yields an empty group plus a warning and
//! never stops the remaining names.

use crate::error::Result;
use crate::language::classify;
use crate::llm::{extract_list, CandidateGenerator};
use crate::matching::{Matcher, Registry};
use crate::types::{
    Attributes, Availability, CandidateGroup, GenerationRequest, Language, NameCheckOutcome, Suggestions,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

pub struct Pipeline {
    registry: Arc<Registry>,
    matcher: Matcher,
    generator: CandidateGenerator,
}

impl Pipeline {
    pub fn new(registry: Registry, matcher: Matcher, generator: CandidateGenerator) -> Self {
        Self {
            registry: Arc::new(registry),
            matcher,
            generator,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn matcher(&self) -> Matcher {
        self.matcher
    }

    pub fn generator(&self) -> &CandidateGenerator {
        &self.generator
    }

    /// Registry lookup only; no model calls
    pub fn check(&self, proposed: &str) -> Result<Availability> {
        let proposed = validate_name(proposed)?;
        let similar_names = self.matcher.find_similar(proposed, &self.registry);

        tracing::info!(
            name = %proposed,
            similar_count = similar_names.len(),
            threshold = self.matcher.threshold(),
            "Registry lookup completed"
        );

        if similar_names.is_empty() {
            Ok(Availability::Available)
        } else {
            Ok(Availability::Taken { similar_names })
        }
    }

    /// Check a proposed name and, if taken, generate alternatives for every
    /// colliding registry name
    pub async fn resolve(&self, proposed: &str) -> Result<NameCheckOutcome> {
        let proposed = validate_name(proposed)?;
        let language = classify(proposed);

        let similar_names = match self.check(proposed)? {
            Availability::Available => {
                return Ok(NameCheckOutcome::Available {
                    name: proposed.to_string(),
                    language,
                    checked_at: Utc::now(),
                });
            }
            Availability::Taken { similar_names } => similar_names,
        };

        let mut groups = Vec::new();
        let mut warnings = Vec::new();
        for similar in &similar_names {
            let request = GenerationRequest::similar_to(similar.as_str(), language);
            match self.candidates_for(&request).await {
                Ok(candidates) if !candidates.is_empty() => groups.push(CandidateGroup {
                    similar_to: similar.clone(),
                    candidates,
                }),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(similar_to = %similar, error = %e, "Skipping alternatives for colliding name");
                    warnings.push(format!("{}: {}", similar, e));
                }
            }
        }

        Ok(NameCheckOutcome::Taken {
            name: proposed.to_string(),
            language,
            similar_names,
            groups,
            warnings,
            checked_at: Utc::now(),
        })
    }

    /// Fresh names from attributes, filtered against the registry
    pub async fn suggest(&self, language: Language, attributes: &Attributes) -> Result<Suggestions> {
        if !attributes.is_complete() {
            return Err(crate::validation_error!("Industry and unique feature are both required"));
        }

        let request = GenerationRequest::from_attributes(attributes.clone(), language);
        let (names, warnings) = match self.candidates_for(&request).await {
            Ok(names) => (names, Vec::new()),
            Err(e) => {
                tracing::warn!(error = %e, "Attribute suggestions unavailable");
                (Vec::new(), vec![e.to_string()])
            }
        };

        Ok(Suggestions {
            names,
            language,
            warnings,
            generated_at: Utc::now(),
        })
    }

    /// Generate → extract → filter for one request
    async fn candidates_for(&self, request: &GenerationRequest) -> Result<Vec<String>> {
        let start = Instant::now();
        let raw = self.generator.generate(request).await?;

        let extracted = extract_list(&raw);
        let kept = self.matcher.filter(&extracted, &self.registry);

        let metrics = self.generator.metrics();
        metrics.add_candidates_extracted(extracted.len());
        metrics.add_candidates_rejected(extracted.len() - kept.len());

        if extracted.is_empty() {
            tracing::debug!(response = %raw, "No bracketed list in model response");
        }
        tracing::info!(
            extracted = extracted.len(),
            kept = kept.len(),
            duration_ms = %start.elapsed().as_millis(),
            "Candidates filtered"
        );

        Ok(kept)
    }
}

fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(crate::validation_error!("Proposed name cannot be empty"));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Catalog;

    fn pipeline() -> Pipeline {
        Pipeline::new(
            Registry::sample(),
            Matcher::default(),
            CandidateGenerator::new(Catalog::builtin().unwrap()),
        )
    }

    #[test]
    fn test_check_taken() {
        let availability = pipeline().check("ADNOC").unwrap();
        assert_eq!(
            availability,
            Availability::Taken {
                similar_names: vec!["ADNOC".to_string()]
            }
        );
    }

    #[test]
    fn test_check_trims_input() {
        assert!(!pipeline().check("  ADNOC \n").unwrap().is_available());
        assert!(pipeline().check("Zyphron Dynamics").unwrap().is_available());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(pipeline().check("   ").is_err());
    }

    #[tokio::test]
    async fn test_incomplete_attributes_rejected() {
        let err = pipeline()
            .suggest(Language::English, &Attributes::new("energy", ""))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("unique feature"));
    }
}
