//! Player record - case history and achievements for one session

use super::Case;
use crate::achievement::{
    check_achievements, is_achieved, locked_achievements, unlock_achievement, Achievement,
    Milestone,
};
use crate::error::{CourtError, Result};
use ahash::AHashMap;

/// Everything the court remembers about the player
#[derive(Debug, Clone)]
pub struct Player {
    cases: Vec<Case>,
    achievements: AHashMap<Achievement, bool>,
    appeals: usize,
}

impl Player {
    pub fn new() -> Self {
        Self {
            cases: Vec::with_capacity(8),
            achievements: locked_achievements(),
            appeals: 0,
        }
    }

    /// File a case; returns achievements unlocked by it
    pub fn add_case(&mut self, case: Case) -> Vec<Achievement> {
        self.cases.push(case);
        self.unlock(Milestone::Cases, self.cases.len())
    }

    /// Count an appeal; returns achievements unlocked by it
    pub fn add_appeal(&mut self) -> Vec<Achievement> {
        self.appeals += 1;
        self.unlock(Milestone::Appeals, self.appeals)
    }

    fn unlock(&mut self, milestone: Milestone, count: usize) -> Vec<Achievement> {
        let new_achievements = check_achievements(milestone, count, &self.achievements);
        for achievement in &new_achievements {
            unlock_achievement(*achievement, &mut self.achievements);
        }
        new_achievements
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn case_mut(&mut self, index: usize) -> Result<&mut Case> {
        self.cases
            .get_mut(index)
            .ok_or(CourtError::CaseNotFound(index))
    }

    pub fn appeals(&self) -> usize {
        self.appeals
    }

    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        is_achieved(achievement, &self.achievements)
    }

    /// Unlocked achievements in display order
    pub fn unlocked(&self) -> Vec<Achievement> {
        Achievement::ALL
            .into_iter()
            .filter(|a| self.is_unlocked(*a))
            .collect()
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
