use crate::models::SizeCategory;
use std::sync::LazyLock;

/// Temperament tags recognised in queries, matched as literal substrings
/// against both the query and the breed's temperament text.
pub const DEFAULT_TEMPERAMENTS: &[&str] = &[
    "friendly",
    "energetic",
    "calm",
    "intelligent",
    "protective",
    "independent",
    "loyal",
    "affectionate",
    "playful",
    "gentle",
    "alert",
    "active",
    "loving",
    "stubborn",
    "quiet",
    "trainable",
    "obedient",
    "curious",
    "confident",
    "courageous",
    "cheerful",
    "devoted",
    "dignified",
    "docile",
    "lively",
    "outgoing",
    "keen",
    "brave",
    "adaptable",
    "social",
    "patient",
    "sensitive",
    "bold",
];

static DEFAULT_VOCABULARY: LazyLock<Vocabulary> = LazyLock::new(Vocabulary::default);

/// Keyword tables driving trait extraction
///
/// Kept as data so new descriptors can be added through configuration
/// without touching the extraction algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    sizes: Vec<(SizeCategory, Vec<String>)>,
    temperaments: Vec<String>,
}

impl Vocabulary {
    /// Process-wide default vocabulary, built on first use
    pub fn global() -> &'static Vocabulary {
        &DEFAULT_VOCABULARY
    }

    /// Append extra temperament tags, skipping blanks and duplicates
    pub fn with_extra_temperaments<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in extra {
            let tag = tag.as_ref().trim().to_lowercase();
            if !tag.is_empty() && !self.temperaments.contains(&tag) {
                self.temperaments.push(tag);
            }
        }
        self
    }

    pub fn sizes(&self) -> impl Iterator<Item = (SizeCategory, &[String])> {
        self.sizes.iter().map(|(size, words)| (*size, words.as_slice()))
    }

    pub fn temperaments(&self) -> &[String] {
        &self.temperaments
    }

    /// Whether a word is already covered by a structured field
    pub fn is_trigger_word(&self, word: &str) -> bool {
        self.temperaments.iter().any(|t| t == word)
            || self
                .sizes
                .iter()
                .any(|(_, words)| words.iter().any(|w| w == word))
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            sizes: SizeCategory::ALL
                .iter()
                .map(|size| {
                    (
                        *size,
                        size.keywords().iter().map(|w| w.to_string()).collect(),
                    )
                })
                .collect(),
            temperaments: DEFAULT_TEMPERAMENTS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_tables() {
        let vocab = Vocabulary::default();

        assert_eq!(vocab.sizes().count(), 3);
        assert!(vocab.temperaments().len() >= 25);
        assert!(vocab.is_trigger_word("tiny"));
        assert!(vocab.is_trigger_word("loyal"));
        assert!(!vocab.is_trigger_word("retriever"));
    }

    #[test]
    fn test_extra_temperaments_deduplicated() {
        let vocab = Vocabulary::default().with_extra_temperaments(["Tenacious", "loyal", "  "]);

        let count = vocab.temperaments().len();
        assert_eq!(count, DEFAULT_TEMPERAMENTS.len() + 1);
        assert_eq!(vocab.temperaments().last().map(String::as_str), Some("tenacious"));
    }

    #[test]
    fn test_filter_bar_natures_are_tags() {
        let vocab = Vocabulary::default();

        for tag in ["brave", "adaptable", "social", "patient", "sensitive", "bold"] {
            assert!(vocab.temperaments().iter().any(|t| t == tag), "missing {}", tag);
        }
    }

    #[test]
    fn test_global_matches_default() {
        assert_eq!(Vocabulary::global(), &Vocabulary::default());
    }
}
