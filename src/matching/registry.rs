//! Registry of names already in use, and threshold matching against it

use crate::error::{NameForgeError, Result};
use crate::matching::similarity::similarity;
use std::path::Path;

/// Default collision threshold. Scores strictly above it count as the same name.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Names the product shipped with when no registry file is configured
const SAMPLE_NAMES: &[&str] = &[
    "Tech Innovators Inc.",
    "Global Solutions Ltd.",
    "Bright Future Enterprises",
    "الشركة العربية المتحدة لصناعة اطارات السيارات",
    "Creative Minds LLC",
    "NextGen Technologies",
    "ADNOC",
    "DP World",
    "Emirates Group",
    "Emaar Properties",
    "First Abu Dhabi Bank",
    "Mubadala Investment Company",
    "National Oil Company",
    "Saudi Aramco",
    "Dubai International Financial Centre",
    "Abu Dhabi Commercial Bank",
];

/// Ordered, read-only list of taken names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    names: Vec<String>,
}

impl Registry {
    /// Build a registry, trimming each name and skipping blank ones
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    /// Built-in sample registry
    pub fn sample() -> Self {
        Self::new(SAMPLE_NAMES.iter().copied())
    }

    /// Load a registry file: a JSON array of strings, or one name per line
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NameForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;
        let registry = Self::parse(&content)?;

        tracing::info!(
            path = %path.display(),
            names = registry.len(),
            "Registry loaded"
        );
        Ok(registry)
    }

    /// Parse registry text in either supported format
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim_start().starts_with('[') {
            let names: Vec<String> = serde_json::from_str(content).map_err(|e| {
                NameForgeError::parse(
                    format!("Registry is not a JSON array of strings: {}", e),
                    None,
                )
            })?;
            Ok(Self::new(names))
        } else {
            Ok(Self::new(content.lines()))
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Threshold matcher. The same instance serves registry lookups and candidate
/// filtering so both directions agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matcher {
    threshold: f64,
}

impl Matcher {
    pub fn new(threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(crate::config_error!(
                "similarity threshold must be between 0.0 and 1.0, got {}",
                threshold
            ));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether two names collide
    pub fn is_similar(&self, a: &str, b: &str) -> bool {
        similarity(a, b) > self.threshold
    }

    /// Every registry entry colliding with `query`, in registry order
    pub fn find_similar(&self, query: &str, registry: &Registry) -> Vec<String> {
        registry
            .iter()
            .filter(|entry| self.is_similar(query, entry))
            .map(str::to_string)
            .collect()
    }

    /// Candidates with no collision in the registry, input order kept.
    ///
    /// Candidates are not compared with each other.
    pub fn filter(&self, candidates: &[String], registry: &Registry) -> Vec<String> {
        candidates
            .iter()
            .filter(|candidate| !registry.iter().any(|entry| self.is_similar(candidate, entry)))
            .cloned()
            .collect()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sample_registry() {
        let registry = Registry::sample();
        assert_eq!(registry.len(), 16);
        assert!(registry.iter().any(|name| name == "ADNOC"));
    }

    #[test]
    fn test_registry_trims_and_skips_blank() {
        let registry = Registry::new(["  ADNOC ", "", "   ", "DP World"]);
        assert_eq!(registry.names(), &names(&["ADNOC", "DP World"])[..]);
    }

    #[test]
    fn test_parse_json_and_lines() {
        let json = Registry::parse(r#"["ADNOC", " Saudi Aramco "]"#).unwrap();
        assert_eq!(json.names(), &names(&["ADNOC", "Saudi Aramco"])[..]);

        let lines = Registry::parse("ADNOC\n\nSaudi Aramco\r\n").unwrap();
        assert_eq!(lines, json);

        assert!(Registry::parse("[1, 2]").is_err());
    }

    #[test]
    fn test_exact_match_always_collides() {
        let matcher = Matcher::default();
        let registry = Registry::sample();
        assert_eq!(matcher.find_similar("ADNOC", &registry), names(&["ADNOC"]));
    }

    #[test]
    fn test_find_similar_keeps_registry_order() {
        let matcher = Matcher::default();
        let registry = Registry::new(["Abu Dhabi Bank Group", "First Abu Dhabi Bank", "ADNOC"]);
        let found = matcher.find_similar("Abu Dhabi Bank", &registry);
        assert_eq!(found, names(&["Abu Dhabi Bank Group", "First Abu Dhabi Bank"]));
    }

    #[test]
    fn test_empty_registry_matches_nothing() {
        let matcher = Matcher::default();
        assert!(matcher.find_similar("ADNOC", &Registry::default()).is_empty());
    }

    #[test]
    fn test_find_similar_is_idempotent() {
        let matcher = Matcher::default();
        let registry = Registry::sample();
        let first = matcher.find_similar("Emaar Property", &registry);
        let second = matcher.find_similar("Emaar Property", &registry);
        assert_eq!(first, second);
        assert_eq!(first, names(&["Emaar Properties"]));
    }

    #[test]
    fn test_filter_removes_near_duplicates() {
        let matcher = Matcher::default();
        let registry = Registry::new(["Acme Corp."]);
        assert!(matcher.filter(&names(&["Acme Corp"]), &registry).is_empty());
    }

    #[test]
    fn test_filter_keeps_dissimilar_in_order() {
        let matcher = Matcher::default();
        let registry = Registry::new(["Acme Corp"]);
        let candidates = names(&["Zyphron Dynamics", "Acme Corp", "Zyphron Dynamics", "Nova Labs"]);
        assert_eq!(
            matcher.filter(&candidates, &registry),
            names(&["Zyphron Dynamics", "Zyphron Dynamics", "Nova Labs"])
        );
    }

    #[test]
    fn test_threshold_bounds() {
        assert!(Matcher::new(0.8).is_ok());
        assert!(Matcher::new(1.2).is_err());
        assert!(Matcher::new(-0.1).is_err());
        assert!(Matcher::new(f64::NAN).is_err());
    }

    #[test]
    fn test_threshold_is_strict() {
        // "ab" vs "abc" scores exactly 0.8
        let matcher = Matcher::default();
        assert!(!matcher.is_similar("ab", "abc"));
        assert!(Matcher::new(0.79).unwrap().is_similar("ab", "abc"));
    }
}
