//! Complaint analysis - category by keyword priority, severity by keyword count

use super::cache::contains_word;
use super::Severity;
use crate::config::{Category, CategoryConfig, CourtConfig};
use smallvec::SmallVec;
use tracing::{debug, warn};

/// Severity every complaint starts from
pub const BASE_SEVERITY: u32 = 1;

/// Extra severity when any serious word appears
pub const SERIOUS_BONUS: u32 = 3;

/// Result of analyzing one complaint
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: Category,
    pub severity: Severity,
    /// Keywords of the winning category found in the text
    pub matched: SmallVec<[String; 4]>,
    /// Whether the serious-word bonus applied
    pub serious: bool,
}

/// Keyword classifier
#[derive(Debug, Clone)]
pub struct Classifier {
    categories: Vec<CategoryConfig>,
    serious_words: Vec<String>,
}

impl Classifier {
    pub fn new(categories: Vec<CategoryConfig>, serious_words: Vec<String>) -> Self {
        // Keywords are matched against lower-cased text
        let categories = categories
            .into_iter()
            .map(|c| CategoryConfig {
                category: c.category,
                keywords: c.keywords.iter().map(|k| k.to_lowercase()).collect(),
            })
            .collect();
        let serious_words = serious_words.iter().map(|w| w.to_lowercase()).collect();

        Self {
            categories,
            serious_words,
        }
    }

    pub fn from_config(config: &CourtConfig) -> Self {
        Self::new(config.categories.clone(), config.serious_words.clone())
    }

    /// Classify a complaint
    ///
    /// Categories are tried in configured order and the first with any
    /// whole-word hit wins; every hit of that category adds one severity.
    /// Serious words are plain substring checks over the whole text.
    pub fn classify(&self, text: &str) -> Classification {
        let text = text.to_lowercase();

        let mut category = Category::Unknown;
        let mut matched: SmallVec<[String; 4]> = SmallVec::new();

        for entry in &self.categories {
            for keyword in &entry.keywords {
                if word_match(&text, keyword) {
                    matched.push(keyword.clone());
                }
            }
            if !matched.is_empty() {
                category = entry.category;
                break;
            }
        }

        let serious = self
            .serious_words
            .iter()
            .any(|w| !w.is_empty() && text.contains(w.as_str()));

        let mut raw = BASE_SEVERITY + matched.len() as u32;
        if serious {
            raw += SERIOUS_BONUS;
        }
        let severity = Severity::new(raw);

        debug!(
            category = category.as_str(),
            severity = severity.get(),
            matched = ?matched,
            serious,
            "classified complaint"
        );

        Classification {
            category,
            severity,
            matched,
            serious,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&CourtConfig::default())
    }
}

/// Whole-word match that treats an uncompilable keyword as absent
fn word_match(text: &str, keyword: &str) -> bool {
    match contains_word(text, keyword) {
        Ok(found) => found,
        Err(err) => {
            warn!(keyword, error = %err, "skipping keyword");
            false
        }
    }
}
