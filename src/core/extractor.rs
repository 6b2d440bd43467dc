//! Trait extraction
//!
//! Turns a free-text query into a [`ConstraintSet`] using keyword tables and
//! a handful of regex patterns. Extraction never fails: anything that is not
//! recognised simply leaves the corresponding field empty.

use crate::core::vocabulary::Vocabulary;
use crate::models::ConstraintSet;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Pounds per kilogram
pub const KG_TO_LBS: f64 = 2.20462;

/// Centimetres per inch
const CM_PER_INCH: f64 = 2.54;

const NUMBER: &str = r"(\d+(?:\.\d+)?)";
const WEIGHT_UNIT: &str = r"(kilograms?|kilos?|kgs?|pounds?|lbs?)\b";

static AT_LEAST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\bat\s+least\s+{NUMBER}\s*{WEIGHT_UNIT}")).unwrap()
});

static AT_MOST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\bat\s+most\s+{NUMBER}\s*{WEIGHT_UNIT}")).unwrap()
});

static LOWER_SYNONYM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:\b(?:over|above|more\s+than|minimum|min)|>)\s*{NUMBER}\s*{WEIGHT_UNIT}"
    ))
    .unwrap()
});

static UPPER_SYNONYM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:\b(?:under|below|less\s+than|maximum|max)|<)\s*{NUMBER}\s*{WEIGHT_UNIT}"
    ))
    .unwrap()
});

static LIFESPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\blife\s*-?\s*span\s*(?:of\s+)?(\d+)\s*(?:-|to)\s*(\d+)").unwrap()
});

static HEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\bheight\s*(?:of\s+)?{NUMBER}\s*(?:-|to)\s*{NUMBER}\s*(centimet(?:er|re)s?|cm|inches|inch|in)?\b"
    ))
    .unwrap()
});

/// Tokens never kept as residual keywords: connectors and words whose
/// meaning is already captured by a structured field.
const STOP_WORDS: &[&str] = &[
    "good", "with", "dogs", "kids", "cats", "families", "looking", "need", "want", "that",
    "than", "more", "less", "under", "over", "above", "below", "least", "most", "maximum",
    "minimum", "weight", "weighs", "weighing", "height", "tall", "lifespan", "life", "span",
    "years", "pound", "pounds", "kilogram", "kilograms", "kilo", "kilos", "inch", "inches",
    "centimeter", "centimeters", "centimetre", "centimetres", "nature", "breed",
    "breeds", "some", "very", "from", "into",
];

/// Extracts constraints with an explicit vocabulary
#[derive(Debug, Clone)]
pub struct TraitExtractor {
    vocabulary: Vocabulary,
}

impl TraitExtractor {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn extract(&self, query: &str) -> ConstraintSet {
        extract_with(&self.vocabulary, query)
    }
}

impl Default for TraitExtractor {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}

/// Extract constraints using the process-wide default vocabulary
pub fn extract(query: &str) -> ConstraintSet {
    extract_with(Vocabulary::global(), query)
}

/// Extract constraints from `query` using `vocabulary`
pub fn extract_with(vocabulary: &Vocabulary, query: &str) -> ConstraintSet {
    let text = query.to_lowercase();
    let mut constraints = ConstraintSet::default();

    if text.trim().is_empty() {
        return constraints;
    }

    // Sizes are not exclusive here; the filter ORs them later
    for (size, keywords) in vocabulary.sizes() {
        if keywords.iter().any(|kw| text.contains(kw.as_str())) {
            constraints.sizes.push(size);
        }
    }

    for tag in vocabulary.temperaments() {
        if text.contains(tag.as_str()) {
            constraints.temperaments.push(tag.clone());
        }
    }

    constraints.min_weight = max_weight_match(&AT_LEAST_RE, &text)
        .or_else(|| max_weight_match(&LOWER_SYNONYM_RE, &text));
    constraints.max_weight = min_weight_match(&AT_MOST_RE, &text)
        .or_else(|| min_weight_match(&UPPER_SYNONYM_RE, &text));

    if let Some(caps) = LIFESPAN_RE.captures(&text) {
        constraints.min_lifespan = parse_number(&caps, 1);
        constraints.max_lifespan = parse_number(&caps, 2);
    }

    if let Some(caps) = HEIGHT_RE.captures(&text) {
        let divisor = match caps.get(3).map(|m| m.as_str()) {
            Some(unit) if unit.starts_with('c') => CM_PER_INCH,
            _ => 1.0,
        };
        constraints.min_height = parse_number(&caps, 1).map(|v| v / divisor);
        constraints.max_height = parse_number(&caps, 2).map(|v| v / divisor);
    }

    // Repeats are resolved above; only now check min <= max
    discard_inverted(&mut constraints.min_weight, &mut constraints.max_weight);
    discard_inverted(&mut constraints.min_height, &mut constraints.max_height);
    discard_inverted(&mut constraints.min_lifespan, &mut constraints.max_lifespan);

    constraints.free_keywords = residual_keywords(vocabulary, &text);

    constraints
}

/// Every weight match of `re` in `text`, converted to pounds
fn weight_matches<'a>(re: &'a Regex, text: &'a str) -> impl Iterator<Item = f64> + 'a {
    re.captures_iter(text).filter_map(|caps| {
        let value = parse_number(&caps, 1)?;
        let unit = caps.get(2).map(|m| m.as_str()).unwrap_or("lbs");
        Some(to_pounds(value, unit))
    })
}

/// Most restrictive lower bound
fn max_weight_match(re: &Regex, text: &str) -> Option<f64> {
    weight_matches(re, text).reduce(f64::max)
}

/// Most restrictive upper bound
fn min_weight_match(re: &Regex, text: &str) -> Option<f64> {
    weight_matches(re, text).reduce(f64::min)
}

fn to_pounds(value: f64, unit: &str) -> f64 {
    if unit.starts_with('k') {
        (value * KG_TO_LBS).round()
    } else {
        value
    }
}

fn parse_number(caps: &Captures<'_>, group: usize) -> Option<f64> {
    caps.get(group)?
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn discard_inverted(min: &mut Option<f64>, max: &mut Option<f64>) {
    if let (Some(lo), Some(hi)) = (*min, *max) {
        if lo > hi {
            *min = None;
            *max = None;
        }
    }
}

fn residual_keywords(vocabulary: &Vocabulary, text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric() && c != '-'))
        .filter(|token| token.chars().count() > 3)
        .filter(|token| token.chars().any(char::is_alphabetic))
        .filter(|token| !STOP_WORDS.contains(token))
        .filter(|token| !vocabulary.is_trigger_word(token))
        .map(str::to_string)
        .collect()
}
