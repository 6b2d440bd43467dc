//! Breed Finder - natural-language dog breed search
//!
//! This library turns free-text queries ("friendly small dogs under 40 lbs")
//! into structured constraints, strictly filters a breed catalog against
//! them, and ranks the survivors by relevance.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{admits, calculate_match_score, extract, rank_breeds, Ranker, TraitExtractor, Vocabulary};
pub use crate::models::{BreedRecord, ConstraintSet, ScoredBreed, SizeCategory, SearchRequest, SearchResponse};
