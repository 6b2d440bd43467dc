// Core algorithm exports
pub mod extractor;
pub mod filters;
pub mod ranges;
pub mod ranker;
pub mod scoring;
pub mod vocabulary;

pub use extractor::{extract, extract_with, TraitExtractor};
pub use filters::admits;
pub use ranges::{parse_dash_range, parse_integer_range, ValueRange};
pub use ranker::{rank_breeds, Ranker};
pub use scoring::{calculate_match_score, ScoringWeights};
pub use vocabulary::Vocabulary;
