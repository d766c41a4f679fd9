//! Property tests for classifier module
//!
//! Property 1: Severity Bounds
//! Property 2: Keyword Category Detection
//! Property 3: Classification Determinism

use proptest::prelude::*;

use crate::classifier::Classifier;
use crate::config::{default_categories, Category};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Filler words that hit no category and no serious word
fn filler_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["the", "a", "galaxy", "yesterday", "my", "blue", "quietly"]),
        0..=6,
    )
    .prop_map(|words| words.into_iter().map(String::from).collect())
}

/// Pick a category and one of its keywords
fn keyword_strategy() -> impl Strategy<Value = (Category, String)> {
    let pairs: Vec<(Category, String)> = default_categories()
        .into_iter()
        .flat_map(|c| {
            let category = c.category;
            c.keywords.into_iter().map(move |k| (category, k))
        })
        .collect();
    prop::sample::select(pairs)
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property 1: Severity is always in [1, 10] for any input
    #[test]
    fn prop_severity_in_bounds(text in ".{0,200}") {
        let result = Classifier::default().classify(&text);
        prop_assert!((1..=10).contains(&result.severity.get()));
    }

    /// Property 1.2: Severity stays bounded with many keyword hits
    #[test]
    fn prop_severity_bounded_when_flooded(
        keywords in prop::collection::vec(keyword_strategy(), 0..=30)
    ) {
        let text = keywords
            .iter()
            .map(|(_, k)| k.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let result = Classifier::default().classify(&format!("urgent {}", text));
        prop_assert!((1..=10).contains(&result.severity.get()));
    }

    /// Property 2: A single whole-word keyword selects its category
    #[test]
    fn prop_keyword_selects_category(
        (category, keyword) in keyword_strategy(),
        before in filler_strategy(),
        after in filler_strategy()
    ) {
        let mut words = before;
        words.push(keyword.to_uppercase());
        words.extend(after);
        let text = words.join(" ");

        let result = Classifier::default().classify(&text);
        prop_assert_eq!(result.category, category);
        prop_assert!(result.severity.get() >= 2);
    }

    /// Property 2.2: With hits in two categories the earlier one wins
    #[test]
    fn prop_first_category_wins(
        a in keyword_strategy(),
        b in keyword_strategy()
    ) {
        let text = format!("{} and {}", b.1, a.1);
        let result = Classifier::default().classify(&text);

        let order = |c: Category| Category::ALL.iter().position(|x| *x == c).unwrap();
        let expected = if order(a.0) <= order(b.0) { a.0 } else { b.0 };
        prop_assert_eq!(result.category, expected);
    }

    /// Property 3: Classification is deterministic
    #[test]
    fn prop_classification_deterministic(text in ".{0,120}") {
        let classifier = Classifier::default();
        prop_assert_eq!(classifier.classify(&text), classifier.classify(&text));
    }
}
