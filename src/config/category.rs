//! Complaint category configuration structures

use serde::Deserialize;
use std::fmt;

/// Category a complaint is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Property,
    Ethics,
    Interpersonal,
    Technology,
    Unknown,
}

impl Category {
    /// All categories, in default classification priority order with `Unknown` last
    pub const ALL: [Category; 5] = [
        Category::Property,
        Category::Ethics,
        Category::Interpersonal,
        Category::Technology,
        Category::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Property => "property",
            Category::Ethics => "ethics",
            Category::Interpersonal => "interpersonal",
            Category::Technology => "technology",
            Category::Unknown => "unknown",
        }
    }

    /// Capitalized name used when displaying a case
    pub fn title(self) -> &'static str {
        match self {
            Category::Property => "Property",
            Category::Ethics => "Ethics",
            Category::Interpersonal => "Interpersonal",
            Category::Technology => "Technology",
            Category::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword set for one category
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    pub category: Category,
    pub keywords: Vec<String>,
}

impl CategoryConfig {
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Built-in keyword sets, in classification priority order
pub fn default_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new(
            Category::Property,
            &["steal", "stole", "theft", "property", "cow", "belong", "take", "taken"],
        ),
        CategoryConfig::new(
            Category::Ethics,
            &["ethic", "moral", "right", "wrong", "crime", "clone", "cheat", "lie"],
        ),
        CategoryConfig::new(
            Category::Interpersonal,
            &["friend", "neighbor", "dispute", "fight", "argue", "conflict", "roommate"],
        ),
        CategoryConfig::new(
            Category::Technology,
            &["robot", "tech", "hack", "reboot", "machine", "coffee maker", "holodeck"],
        ),
    ]
}

/// Words that add the serious-offense bonus wherever they appear
pub fn default_serious_words() -> Vec<String> {
    ["crime", "serious", "major", "urgent"]
        .iter()
        .map(|w| w.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_capitalized() {
        assert_eq!(Category::Interpersonal.title(), "Interpersonal");
        assert_eq!(Category::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_default_priority_order() {
        let order: Vec<Category> = default_categories().iter().map(|c| c.category).collect();
        assert_eq!(order, Category::ALL[..4].to_vec());
    }
}
