use crate::core::{
    filters::admits,
    scoring::{calculate_match_score, ScoringWeights},
};
use crate::models::{BreedRecord, ConstraintSet, ScoredBreed};

/// Ranking pipeline: strict filter, then score, then sort
///
/// # Pipeline Stages
/// 1. Strict filtering (every requested constraint family must hold)
/// 2. Scoring of the survivors
/// 3. Stable descending sort by score; equal scores keep catalog order
///
/// The full ranked list is returned. Truncating to a page is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn rank(&self, breeds: &[BreedRecord], constraints: &ConstraintSet) -> Vec<ScoredBreed> {
        let mut ranked: Vec<ScoredBreed> = breeds
            .iter()
            .filter(|breed| admits(breed, constraints))
            .map(|breed| ScoredBreed {
                match_score: calculate_match_score(breed, constraints, &self.weights),
                breed: breed.clone(),
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        tracing::trace!(
            "Ranked {} of {} breeds",
            ranked.len(),
            breeds.len()
        );

        ranked
    }
}

/// Rank with the default scoring weights
pub fn rank_breeds(breeds: &[BreedRecord], constraints: &ConstraintSet) -> Vec<ScoredBreed> {
    Ranker::default().rank(breeds, constraints)
}
