//! Judge AstraLex - persona selection and ruling generation

use super::selector::weighted_choice;
use super::templates::{render, RulingParts};
use crate::classifier::Severity;
use crate::config::{Category, CourtConfig, PenaltyConfig, PenaltyKind, PersonaConfig, NUMBER_PLACEHOLDER};
use crate::error::{CourtError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use tracing::debug;

/// Inclusive range of article numbers
pub const ARTICLE_NUMBER_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// A delivered ruling
#[derive(Debug, Clone, PartialEq)]
pub struct Ruling {
    pub article: String,
    pub penalty: PenaltyKind,
    pub magnitude: u32,
    pub text: String,
}

impl fmt::Display for Ruling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The presiding judge, fixed to one persona for the whole session
#[derive(Debug, Clone)]
pub struct Judge {
    persona: PersonaConfig,
    articles: Vec<String>,
    penalties: Vec<PenaltyConfig>,
    severity_threshold: u8,
}

impl Judge {
    fn new(persona: PersonaConfig, config: &CourtConfig) -> Self {
        Self {
            persona,
            articles: config.articles.clone(),
            penalties: config.penalties.clone(),
            severity_threshold: config.severity_threshold,
        }
    }

    /// Draw a persona by weight and seat the judge
    pub fn convene<R: Rng + ?Sized>(config: &CourtConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let weighted: Vec<(&PersonaConfig, f64)> =
            config.personas.iter().map(|p| (p, p.weight)).collect();

        let persona = weighted_choice(&weighted, rng)
            .ok_or_else(|| CourtError::InvalidConfig("no persona can be drawn".to_string()))?;

        debug!(persona = %persona.name, tone = persona.tone.as_str(), "judge convened");
        Ok(Self::new((*persona).clone(), config))
    }

    /// Seat the judge with a named persona
    pub fn with_persona(config: &CourtConfig, name: &str) -> Result<Self> {
        config.validate()?;

        let persona = config.persona(name)?;
        Ok(Self::new(persona.clone(), config))
    }

    pub fn persona(&self) -> &PersonaConfig {
        &self.persona
    }

    /// Generate a ruling
    ///
    /// Severity only decides which penalty weights apply; the category and
    /// the persona's tone pick the template.
    pub fn rule<R: Rng + ?Sized>(
        &self,
        problem: &str,
        category: Category,
        severity: Severity,
        rng: &mut R,
    ) -> Result<Ruling> {
        let article = self
            .articles
            .choose(rng)
            .ok_or_else(|| CourtError::InvalidConfig("no articles configured".to_string()))?
            .replace(
                NUMBER_PLACEHOLDER,
                &rng.gen_range(ARTICLE_NUMBER_RANGE).to_string(),
            );

        let heavy = severity.is_heavy(self.severity_threshold);
        let weighted: Vec<(&PenaltyConfig, f64)> =
            self.penalties.iter().map(|p| (p, p.weight(heavy))).collect();
        let penalty = *weighted_choice(&weighted, rng)
            .ok_or_else(|| CourtError::InvalidConfig("no penalty can be drawn".to_string()))?;

        let magnitude = rng.gen_range(penalty.min..=penalty.max);
        let phrase = penalty.render(magnitude);

        let parts = RulingParts {
            prefix: &self.persona.prefix,
            article: &article,
            category,
            penalty: &phrase,
        };
        let text = render(category, self.persona.tone, &parts).ok_or_else(|| {
            CourtError::InvalidConfig(format!(
                "no template for {} in a {} tone",
                category,
                self.persona.tone.as_str()
            ))
        })?;

        debug!(
            problem,
            category = category.as_str(),
            severity = severity.get(),
            heavy,
            penalty = penalty.kind.as_str(),
            magnitude,
            "ruling generated"
        );

        Ok(Ruling {
            article,
            penalty: penalty.kind,
            magnitude,
            text,
        })
    }
}
