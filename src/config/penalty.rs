//! Penalty configuration structures

use serde::Deserialize;

/// Placeholder substituted with a random number in articles and penalty phrases
pub const NUMBER_PLACEHOLDER: &str = "{n}";

/// Kind of penalty the court may impose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenaltyKind {
    Restitution,
    Mediation,
    Penalty,
    Warning,
}

impl PenaltyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PenaltyKind::Restitution => "restitution",
            PenaltyKind::Mediation => "mediation",
            PenaltyKind::Penalty => "penalty",
            PenaltyKind::Warning => "warning",
        }
    }
}

/// Penalty configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PenaltyConfig {
    pub kind: PenaltyKind,
    /// Phrase completing "you shall ...", may contain `{n}`
    pub phrase: String,
    /// Draw weight when severity is below the threshold
    pub light_weight: f64,
    /// Draw weight when severity is at or above the threshold
    pub heavy_weight: f64,
    /// Inclusive magnitude range
    pub min: u32,
    pub max: u32,
}

impl PenaltyConfig {
    /// Fill the phrase with a magnitude
    pub fn render(&self, magnitude: u32) -> String {
        self.phrase
            .replace(NUMBER_PLACEHOLDER, &magnitude.to_string())
    }

    pub fn weight(&self, heavy: bool) -> f64 {
        if heavy {
            self.heavy_weight
        } else {
            self.light_weight
        }
    }
}

/// Built-in penalty table
pub fn default_penalties() -> Vec<PenaltyConfig> {
    vec![
        PenaltyConfig {
            kind: PenaltyKind::Restitution,
            phrase: "pay {n} moonstones in compensation".to_string(),
            light_weight: 0.5,
            heavy_weight: 0.2,
            min: 1,
            max: 5,
        },
        PenaltyConfig {
            kind: PenaltyKind::Mediation,
            phrase: "attend a {n}-session cosmic mediation".to_string(),
            light_weight: 0.3,
            heavy_weight: 0.4,
            min: 1,
            max: 3,
        },
        PenaltyConfig {
            kind: PenaltyKind::Penalty,
            phrase: "perform {n} hours of asteroid polishing".to_string(),
            light_weight: 0.15,
            heavy_weight: 0.3,
            min: 1,
            max: 5,
        },
        PenaltyConfig {
            kind: PenaltyKind::Warning,
            phrase: "receive a formal warning from the Nebula Council".to_string(),
            light_weight: 0.05,
            heavy_weight: 0.1,
            min: 1,
            max: 3,
        },
    ]
}

/// Built-in article templates
pub fn default_articles() -> Vec<String> {
    [
        "Article {n} of the Galactic Code",
        "Stellar Statute {n}B",
        "Nebula Edict {n}.X",
        "Cosmic Canon {n}-Z",
    ]
    .iter()
    .map(|a| a.to_string())
    .collect()
}
