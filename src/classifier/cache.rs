//! Keyword pattern cache - compiled word-boundary regexes shared across hearings

use crate::error::Result;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;

/// Global keyword pattern cache with fast hashing (ahash)
static KEYWORD_CACHE: Lazy<RwLock<AHashMap<String, Regex>>> = Lazy::new(|| {
    let map = AHashMap::with_capacity(64);
    RwLock::new(map)
});

/// Get or compile the whole-word pattern for a keyword
#[inline]
pub fn get_or_compile(keyword: &str) -> Result<Regex> {
    // Fast path: check read lock first
    {
        let cache = KEYWORD_CACHE.read();
        if let Some(pattern) = cache.get(keyword) {
            return Ok(pattern.clone());
        }
    }

    // Slow path: compile and cache
    let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(keyword)))?;

    {
        let mut cache = KEYWORD_CACHE.write();
        cache.insert(keyword.to_string(), pattern.clone());
    }

    Ok(pattern)
}

/// Check whether `keyword` occurs in `text` as a whole word
///
/// Both sides are expected to be lower-cased already. A blank keyword never matches.
#[inline]
pub fn contains_word(text: &str, keyword: &str) -> Result<bool> {
    if keyword.trim().is_empty() {
        return Ok(false);
    }

    let pattern = get_or_compile(keyword)?;
    Ok(pattern.is_match(text))
}

/// Clear the keyword cache (useful for testing)
pub fn clear_cache() {
    let mut cache = KEYWORD_CACHE.write();
    cache.clear();
}

/// Get cache statistics
pub fn cache_size() -> usize {
    let cache = KEYWORD_CACHE.read();
    cache.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_hit() {
        // First call - cache miss
        let first = get_or_compile("holodeck").unwrap();
        assert!(cache_size() >= 1);

        // Second call - cache hit
        let second = get_or_compile("holodeck").unwrap();
        assert_eq!(first.as_str(), second.as_str());
        assert_eq!(first.as_str(), r"\bholodeck\b");
    }

    #[test]
    fn test_whole_word_only() {
        assert!(contains_word("they stole it", "stole").unwrap());
        assert!(!contains_word("a stolen cart", "stole").unwrap());
        assert!(!contains_word("cowboy boots", "cow").unwrap());
        assert!(contains_word("the cow, again!", "cow").unwrap());
    }

    #[test]
    fn test_multi_word_keyword() {
        assert!(contains_word("my coffee maker exploded", "coffee maker").unwrap());
        assert!(!contains_word("my coffee makers", "coffee maker").unwrap());
    }

    #[test]
    fn test_blank_keyword() {
        assert!(!contains_word("anything at all", "").unwrap());
        assert!(!contains_word("anything at all", "  ").unwrap());
    }

    #[test]
    fn test_metacharacters_are_escaped() {
        assert!(!contains_word("abc", "a.c").unwrap());
        assert!(contains_word("x a.c y", "a.c").unwrap());
    }
}
