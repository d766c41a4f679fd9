//! Configuration module for court data structures
//!
//! The court ships with built-in tables. A JSON file may override any of
//! them; fields left out of the file keep their built-in values.

mod category;
mod penalty;
mod persona;

pub use category::*;
pub use penalty::*;
pub use persona::*;

use crate::error::{CourtError, Result};
use ahash::AHashSet;
use serde::Deserialize;
use std::path::Path;

/// Default severity at which the heavier penalty weights apply
pub const DEFAULT_SEVERITY_THRESHOLD: u8 = 5;

/// Default pause before a revised ruling is read out
pub const DEFAULT_APPEAL_PAUSE_MS: u64 = 1000;

/// Complete court configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CourtConfig {
    /// Keyword sets, checked in order; the first category with a hit wins
    pub categories: Vec<CategoryConfig>,
    pub serious_words: Vec<String>,
    pub personas: Vec<PersonaConfig>,
    pub articles: Vec<String>,
    pub penalties: Vec<PenaltyConfig>,
    pub severity_threshold: u8,
    pub appeal_pause_ms: u64,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            serious_words: default_serious_words(),
            personas: default_personas(),
            articles: default_articles(),
            penalties: default_penalties(),
            severity_threshold: DEFAULT_SEVERITY_THRESHOLD,
            appeal_pause_ms: DEFAULT_APPEAL_PAUSE_MS,
        }
    }
}

impl CourtConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CourtConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Find a persona by name (case-insensitive)
    pub fn persona(&self, name: &str) -> Result<&PersonaConfig> {
        self.personas
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CourtError::UnknownPersona(name.to_string()))
    }

    /// Check the tables for values the court cannot rule with
    pub fn validate(&self) -> Result<()> {
        let mut seen = AHashSet::with_capacity(self.categories.len());
        for entry in &self.categories {
            if entry.category == Category::Unknown {
                return Err(invalid("the unknown category cannot have keywords"));
            }
            if !seen.insert(entry.category) {
                return Err(invalid(format!(
                    "category {} is listed more than once",
                    entry.category
                )));
            }
            if entry.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(invalid(format!(
                    "category {} has no keywords",
                    entry.category
                )));
            }
        }

        if self.personas.is_empty() {
            return Err(invalid("at least one persona is required"));
        }
        if self.personas.iter().any(|p| !is_weight(p.weight)) {
            return Err(invalid("persona weights must be non-negative"));
        }
        if self.personas.iter().map(|p| p.weight).sum::<f64>() <= 0.0 {
            return Err(invalid("persona weights must not all be zero"));
        }

        if self.articles.is_empty() {
            return Err(invalid("at least one article is required"));
        }

        if self.penalties.is_empty() {
            return Err(invalid("at least one penalty is required"));
        }
        for penalty in &self.penalties {
            if penalty.min > penalty.max {
                return Err(invalid(format!(
                    "penalty {} has min {} above max {}",
                    penalty.kind.as_str(),
                    penalty.min,
                    penalty.max
                )));
            }
            if !is_weight(penalty.light_weight) || !is_weight(penalty.heavy_weight) {
                return Err(invalid(format!(
                    "penalty {} has a negative weight",
                    penalty.kind.as_str()
                )));
            }
        }
        for heavy in [false, true] {
            if self.penalties.iter().map(|p| p.weight(heavy)).sum::<f64>() <= 0.0 {
                return Err(invalid("penalty weights must not all be zero"));
            }
        }

        if !(1..=10).contains(&self.severity_threshold) {
            return Err(invalid(format!(
                "severity threshold {} is outside 1-10",
                self.severity_threshold
            )));
        }

        Ok(())
    }
}

fn is_weight(w: f64) -> bool {
    w.is_finite() && w >= 0.0
}

fn invalid(msg: impl Into<String>) -> CourtError {
    CourtError::InvalidConfig(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CourtConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = CourtConfig::from_json("{}").unwrap();
        assert_eq!(config.personas.len(), 4);
        assert_eq!(config.categories.len(), 4);
        assert_eq!(config.severity_threshold, DEFAULT_SEVERITY_THRESHOLD);
        assert_eq!(config.appeal_pause_ms, DEFAULT_APPEAL_PAUSE_MS);
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "personas": [
                {"name": "Weary", "tone": "witty", "weight": 1.0, "prefix": "Sigh."}
            ],
            "appeal_pause_ms": 0
        }"#;
        let config = CourtConfig::from_json(json).unwrap();
        assert_eq!(config.personas.len(), 1);
        assert_eq!(config.personas[0].tone, Tone::Witty);
        assert_eq!(config.appeal_pause_ms, 0);
        assert_eq!(config.articles.len(), 4);
    }

    #[test]
    fn test_rejects_empty_personas() {
        let err = CourtConfig::from_json(r#"{"personas": []}"#).unwrap_err();
        assert!(matches!(err, CourtError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_unknown_category_keywords() {
        let json = r#"{"categories": [{"category": "unknown", "keywords": ["what"]}]}"#;
        assert!(matches!(
            CourtConfig::from_json(json),
            Err(CourtError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_penalty_range() {
        let mut config = CourtConfig::default();
        config.penalties[0].min = 9;
        config.penalties[0].max = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let mut config = CourtConfig::default();
        config.severity_threshold = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            CourtConfig::from_json("{not json"),
            Err(CourtError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_persona_lookup_ignores_case() {
        let config = CourtConfig::default();
        assert_eq!(config.persona("sarcastic").unwrap().tone, Tone::Witty);
        assert!(matches!(
            config.persona("Grumpy"),
            Err(CourtError::UnknownPersona(_))
        ));
    }
}
