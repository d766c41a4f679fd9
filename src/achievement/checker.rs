//! Achievement checking logic

use super::{Achievement, Milestone};
use ahash::AHashMap;

/// Unlock flags for every achievement, all locked
pub fn locked_achievements() -> AHashMap<Achievement, bool> {
    Achievement::ALL.iter().map(|a| (*a, false)).collect()
}

/// Check which achievements a milestone count newly unlocks
pub fn check_achievements(
    milestone: Milestone,
    count: usize,
    unlocked: &AHashMap<Achievement, bool>,
) -> Vec<Achievement> {
    let mut new_achievements = Vec::new();

    for achievement in Achievement::ALL {
        // Check milestone matches
        if achievement.milestone() != milestone {
            continue;
        }

        // Check if already achieved
        if is_achieved(achievement, unlocked) {
            continue;
        }

        if count >= achievement.threshold() {
            new_achievements.push(achievement);
        }
    }

    new_achievements
}

/// Check if an achievement is already achieved
pub fn is_achieved(achievement: Achievement, unlocked: &AHashMap<Achievement, bool>) -> bool {
    unlocked.get(&achievement).copied().unwrap_or(false)
}

/// Unlock an achievement; flags only ever move from false to true
pub fn unlock_achievement(achievement: Achievement, unlocked: &mut AHashMap<Achievement, bool>) {
    unlocked.insert(achievement, true);
}
