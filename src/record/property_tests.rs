//! Property tests for record module
//!
//! Property 7: Achievement Monotonicity
//! Property 8: Achievement Thresholds

use proptest::prelude::*;

use crate::achievement::Achievement;
use crate::classifier::Severity;
use crate::config::Category;
use crate::record::{Case, Player};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Generate a sequence of player actions: true files a case, false lodges an appeal
fn actions_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..=20)
}

fn filed_case() -> Case {
    Case::new("a grievance", Category::Unknown, Severity::default(), "ruling".to_string())
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property 7: Once unlocked, an achievement stays unlocked
    #[test]
    fn prop_achievements_monotonic(actions in actions_strategy()) {
        let mut player = Player::new();
        let mut seen: Vec<Achievement> = Vec::new();

        for file_case in actions {
            if file_case {
                player.add_case(filed_case());
            } else {
                player.add_appeal();
            }

            for achievement in &seen {
                prop_assert!(player.is_unlocked(*achievement));
            }
            seen = player.unlocked();
        }
    }

    /// Property 8: Flags match the counts that produced them
    #[test]
    fn prop_achievements_match_counts(actions in actions_strategy()) {
        let mut player = Player::new();
        let mut announced: Vec<Achievement> = Vec::new();

        for file_case in &actions {
            let unlocked = if *file_case {
                player.add_case(filed_case())
            } else {
                player.add_appeal()
            };
            announced.extend(unlocked);
        }

        let cases = player.cases().len();
        prop_assert_eq!(player.is_unlocked(Achievement::FirstCase), cases >= 1);
        prop_assert_eq!(player.is_unlocked(Achievement::MasterLitigant), cases >= 5);
        prop_assert_eq!(player.is_unlocked(Achievement::PersistentAppellant), player.appeals() >= 3);

        // Each unlock is announced exactly once
        let mut sorted = player.unlocked();
        sorted.sort_by_key(|a| a.name());
        announced.sort_by_key(|a| a.name());
        prop_assert_eq!(sorted, announced);
    }
}
