//! Keyword sets used for distress and safety detection.
//!
//! Matching is plain substring containment against lowercased input.
//! Set order decides which phrase is reported when several are present.

use std::sync::LazyLock;

/// Phrases signalling that the parent is distressed
const EMOTIONAL_PHRASES: &[&str] = &["scared", "overwhelmed", "worried", "lost", "anxious"];

/// Phrases that force the safe-refusal path
const SAFETY_PHRASES: &[&str] = &[
    "diagnose",
    "diagnosis me",
    "will my child",
    "my child will",
    "cure",
    "guarantee",
    "predict",
    "medication advice",
];

pub static EMOTIONAL_KEYWORDS: LazyLock<KeywordSet> =
    LazyLock::new(|| KeywordSet::new(EMOTIONAL_PHRASES));

pub static SAFETY_TRIGGERS: LazyLock<KeywordSet> =
    LazyLock::new(|| KeywordSet::new(SAFETY_PHRASES));

/// Lowercase the raw input. Nothing else is stripped or rewritten.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Ordered set of lowercase phrases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    phrases: Vec<String>,
}

impl KeywordSet {
    /// Build a set from phrases, lowercasing each and dropping duplicates.
    pub fn new(phrases: &[&str]) -> Self {
        let mut stored: Vec<String> = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            let lower = phrase.to_lowercase();
            if !stored.contains(&lower) {
                stored.push(lower);
            }
        }
        Self { phrases: stored }
    }

    /// First phrase (in set order) contained in `normalized`
    pub fn first_match(&self, normalized: &str) -> Option<&str> {
        self.phrases
            .iter()
            .find(|phrase| normalized.contains(phrase.as_str()))
            .map(String::as_str)
    }

    pub fn contains_any(&self, normalized: &str) -> bool {
        self.first_match(normalized).is_some()
    }

    /// Every contained phrase, in set order
    pub fn matches<'a>(&'a self, normalized: &str) -> Vec<&'a str> {
        self.phrases
            .iter()
            .filter(|phrase| normalized.contains(phrase.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_only_lowercases() {
        assert_eq!(normalize("  I'm SCARED!  "), "  i'm scared!  ");
    }

    #[test]
    fn test_first_match_follows_set_order() {
        // "worried" precedes "anxious" in the set even though it appears later in the text
        let text = normalize("Anxious and worried");
        assert_eq!(EMOTIONAL_KEYWORDS.first_match(&text), Some("worried"));
        assert_eq!(EMOTIONAL_KEYWORDS.matches(&text), vec!["worried", "anxious"]);
    }

    #[test]
    fn test_substring_containment() {
        // Substring matching is intentional: "lost" inside "lostness" still counts
        assert!(EMOTIONAL_KEYWORDS.contains_any("a sense of lostness"));
        assert!(SAFETY_TRIGGERS.contains_any("is there a cure?"));
        assert!(SAFETY_TRIGGERS.contains_any("can you give medication advice"));
    }

    #[test]
    fn test_outcome_questions_in_both_word_orders() {
        assert_eq!(
            SAFETY_TRIGGERS.first_match("will my child talk someday?"),
            Some("will my child")
        );
        assert_eq!(
            SAFETY_TRIGGERS.first_match("can you tell me if my child will ever live independently?"),
            Some("my child will")
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(SAFETY_TRIGGERS.first_match("tell me about the weather"), None);
        assert!(EMOTIONAL_KEYWORDS.matches("tell me about the weather").is_empty());
    }

    #[test]
    fn test_new_lowercases_and_dedups() {
        let set = KeywordSet::new(&["Cure", "cure", "PREDICT"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.phrases().collect::<Vec<_>>(), vec!["cure", "predict"]);
    }

    #[test]
    fn test_static_sets_sizes() {
        assert_eq!(EMOTIONAL_KEYWORDS.len(), 5);
        assert_eq!(SAFETY_TRIGGERS.len(), 8);
        assert!(!SAFETY_TRIGGERS.is_empty());
    }
}
