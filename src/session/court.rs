//! Court engine - classifies, rules and records

use crate::achievement::Achievement;
use crate::classifier::{Classification, Classifier};
use crate::config::CourtConfig;
use crate::error::Result;
use crate::record::{Case, Player};
use crate::ruling::{Judge, Ruling};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tracing::info;

/// Outcome of presenting one problem
#[derive(Debug, Clone)]
pub struct Hearing {
    /// Index of the filed case in the player's history
    pub case_index: usize,
    pub classification: Classification,
    pub ruling: Ruling,
    pub new_achievements: Vec<Achievement>,
}

/// Outcome of appealing a case
#[derive(Debug, Clone)]
pub struct AppealOutcome {
    pub case_index: usize,
    pub ruling: Ruling,
    pub new_achievements: Vec<Achievement>,
}

/// Session state: one judge, one player, one random stream
pub struct Court {
    classifier: Classifier,
    judge: Judge,
    player: Player,
    rng: ChaCha8Rng,
    appeal_pause: Duration,
}

impl Court {
    pub fn new(config: &CourtConfig, judge: Judge, rng: ChaCha8Rng) -> Self {
        Self {
            classifier: Classifier::from_config(config),
            judge,
            player: Player::new(),
            rng,
            appeal_pause: Duration::from_millis(config.appeal_pause_ms),
        }
    }

    /// Open a court, seeding the random stream and seating the judge
    ///
    /// Without a seed the stream is drawn from entropy. Without a persona
    /// name the judge is drawn by persona weight.
    pub fn open(config: &CourtConfig, persona: Option<&str>, seed: Option<u64>) -> Result<Self> {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let judge = match persona {
            Some(name) => Judge::with_persona(config, name)?,
            None => Judge::convene(config, &mut rng)?,
        };

        info!(persona = %judge.persona().name, seeded = seed.is_some(), "court in session");
        Ok(Self::new(config, judge, rng))
    }

    pub fn judge(&self) -> &Judge {
        &self.judge
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn appeal_pause(&self) -> Duration {
        self.appeal_pause
    }

    /// Hear a problem: classify it, rule on it and file the case
    pub fn hear(&mut self, problem: &str) -> Result<Hearing> {
        let classification = self.classifier.classify(problem);
        let ruling = self.judge.rule(
            problem,
            classification.category,
            classification.severity,
            &mut self.rng,
        )?;

        let case = Case::new(
            problem,
            classification.category,
            classification.severity,
            ruling.text.clone(),
        );
        let new_achievements = self.player.add_case(case);
        let case_index = self.player.cases().len() - 1;

        info!(
            case = case_index + 1,
            category = classification.category.as_str(),
            severity = classification.severity.get(),
            "case filed"
        );

        Ok(Hearing {
            case_index,
            classification,
            ruling,
            new_achievements,
        })
    }

    /// Appeal a filed case
    ///
    /// The ruling is regenerated one severity step harsher and replaces the
    /// stored ruling. The stored severity is left as filed.
    pub fn appeal(&mut self, case_index: usize) -> Result<AppealOutcome> {
        let (problem, category, severity) = {
            let case = self.player.case_mut(case_index)?;
            (case.problem.clone(), case.category, case.severity)
        };

        let new_achievements = self.player.add_appeal();
        let ruling = self
            .judge
            .rule(&problem, category, severity.escalated(), &mut self.rng)?;
        self.player.case_mut(case_index)?.revise(ruling.text.clone());

        info!(
            case = case_index + 1,
            appeals = self.player.appeals(),
            "appeal heard"
        );

        Ok(AppealOutcome {
            case_index,
            ruling,
            new_achievements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Category;
    use crate::error::CourtError;

    fn court(persona: &str, seed: u64) -> Court {
        Court::open(&CourtConfig::default(), Some(persona), Some(seed)).unwrap()
    }

    #[test]
    fn test_hear_files_case() {
        let mut court = court("Sarcastic", 1);
        let hearing = court.hear("my neighbor stole my cow").unwrap();

        assert_eq!(hearing.case_index, 0);
        assert_eq!(hearing.classification.category, Category::Property);
        assert!(hearing.classification.severity.get() >= 3);
        assert!(hearing.ruling.text.starts_with("Oh, really? The Court sighs:"));
        assert!(hearing.ruling.text.contains("space cows"));
        assert_eq!(hearing.new_achievements, vec![Achievement::FirstCase]);

        let case = &court.player().cases()[0];
        assert_eq!(case.problem, "my neighbor stole my cow");
        assert_eq!(case.ruling, hearing.ruling.text);
    }

    #[test]
    fn test_appeal_overwrites_ruling_keeps_severity() {
        let mut court = court("Stern", 2);
        let hearing = court.hear("urgent hack").unwrap();
        let filed = hearing.classification.severity;

        let outcome = court.appeal(hearing.case_index).unwrap();
        let case = &court.player().cases()[0];

        assert_eq!(case.ruling, outcome.ruling.text);
        assert_eq!(case.severity, filed);
        assert_eq!(case.appeals, 1);
        assert_eq!(court.player().appeals(), 1);
    }

    #[test]
    fn test_third_appeal_unlocks_persistent_appellant() {
        let mut court = court("Poetic", 3);
        court.hear("a robot took my hat").unwrap();

        assert!(court.appeal(0).unwrap().new_achievements.is_empty());
        assert!(court.appeal(0).unwrap().new_achievements.is_empty());
        assert_eq!(
            court.appeal(0).unwrap().new_achievements,
            vec![Achievement::PersistentAppellant]
        );
    }

    #[test]
    fn test_appeal_missing_case() {
        let mut court = court("Cheerful", 4);
        assert!(matches!(court.appeal(0), Err(CourtError::CaseNotFound(0))));
        assert_eq!(court.player().appeals(), 0);
    }

    #[test]
    fn test_seeded_courts_agree() {
        let config = CourtConfig::default();
        let run = || {
            let mut court = Court::open(&config, None, Some(2024)).unwrap();
            let first = court.hear("my roommate keeps lying").unwrap().ruling;
            let second = court.appeal(0).unwrap().ruling;
            (court.judge().persona().name.clone(), first, second)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_pause_from_config() {
        let mut config = CourtConfig::default();
        config.appeal_pause_ms = 0;
        let court = Court::open(&config, Some("Stern"), Some(0)).unwrap();
        assert_eq!(court.appeal_pause(), Duration::ZERO);
    }
}
