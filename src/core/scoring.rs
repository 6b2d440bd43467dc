use crate::core::ranges::{parse_dash_range, parse_integer_range, ValueRange};
use crate::models::{BreedRecord, ConstraintSet};

/// Points awarded by the match scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub temperament: u32,
    pub size: u32,
    pub weight_bound: u32,
    pub range_bound: u32,
    pub range_within_bonus: u32,
    pub keyword_in_name: u32,
    pub keyword_in_temperament: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            temperament: 10,
            size: 8,
            weight_bound: 15,
            range_bound: 10,
            range_within_bonus: 5,
            keyword_in_name: 5,
            keyword_in_temperament: 3,
        }
    }
}

/// Calculate the relevance score of a breed for the given constraints
///
/// Purely additive, so the score is never negative and a breed scored
/// against an empty constraint set gets 0. Unparseable breed fields simply
/// contribute nothing; rejection is the filter's job, not the scorer's.
///
/// Per family:
/// - temperament tag in temperament text: +10 each
/// - size category in temperament text or name: +8 each
/// - weight: +15 per satisfied bound, +5 when both are set and satisfied
/// - lifespan, height: +10 per satisfied bound, +5 when both are set and satisfied
/// - residual keyword: +5 in name, +3 in temperament text
pub fn calculate_match_score(
    breed: &BreedRecord,
    constraints: &ConstraintSet,
    weights: &ScoringWeights,
) -> u32 {
    let temperament = breed.temperament_text();
    let name = breed.name_text();
    let mut score = 0;

    score += constraints
        .temperaments
        .iter()
        .filter(|tag| temperament.contains(&tag.to_lowercase()))
        .count() as u32
        * weights.temperament;

    score += constraints
        .sizes
        .iter()
        .filter(|size| temperament.contains(size.as_str()) || name.contains(size.as_str()))
        .count() as u32
        * weights.size;

    score += calculate_bound_score(
        breed.weight_imperial().and_then(parse_dash_range),
        constraints.min_weight,
        constraints.max_weight,
        weights.weight_bound,
        weights.range_within_bonus,
    );

    score += calculate_bound_score(
        breed.life_span.as_deref().and_then(parse_integer_range),
        constraints.min_lifespan,
        constraints.max_lifespan,
        weights.range_bound,
        weights.range_within_bonus,
    );

    score += calculate_bound_score(
        breed.height_imperial().and_then(parse_dash_range),
        constraints.min_height,
        constraints.max_height,
        weights.range_bound,
        weights.range_within_bonus,
    );

    for keyword in &constraints.free_keywords {
        if name.contains(keyword.as_str()) {
            score += weights.keyword_in_name;
        }
        if temperament.contains(keyword.as_str()) {
            score += weights.keyword_in_temperament;
        }
    }

    score
}

/// Score one numeric family against its optional bounds
#[inline]
fn calculate_bound_score(
    range: Option<ValueRange>,
    min: Option<f64>,
    max: Option<f64>,
    per_bound: u32,
    within_bonus: u32,
) -> u32 {
    let Some(range) = range else {
        return 0;
    };

    let mut score = 0;
    let max_ok = max.is_some_and(|hi| range.max <= hi);
    let min_ok = min.is_some_and(|lo| range.min >= lo);

    if max_ok {
        score += per_bound;
    }
    if min_ok {
        score += per_bound;
    }
    if max_ok && min_ok {
        score += within_bonus;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Measurement, SizeCategory};

    fn create_test_breed() -> BreedRecord {
        BreedRecord {
            id: Some(7),
            name: "Small Munsterlander Pointer".to_string(),
            temperament: Some("Friendly, Alert, Loyal".to_string()),
            weight: Some(Measurement::imperial("40 - 60")),
            height: Some(Measurement::imperial("20 - 22")),
            life_span: Some("12 - 14 years".to_string()),
            breed_group: Some("Sporting".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_constraints_score_zero() {
        let score = calculate_match_score(
            &create_test_breed(),
            &ConstraintSet::default(),
            &ScoringWeights::default(),
        );

        assert_eq!(score, 0);
    }

    #[test]
    fn test_temperament_and_size_points() {
        let constraints = ConstraintSet {
            temperaments: vec!["friendly".to_string(), "loyal".to_string(), "calm".to_string()],
            sizes: vec![SizeCategory::Small],
            ..Default::default()
        };

        let score = calculate_match_score(&create_test_breed(), &constraints, &ScoringWeights::default());

        assert_eq!(score, 10 + 10 + 8);
    }

    #[test]
    fn test_weight_bound_points() {
        let weights = ScoringWeights::default();
        let breed = create_test_breed();

        let upper = ConstraintSet { max_weight: Some(60.0), ..Default::default() };
        assert_eq!(calculate_match_score(&breed, &upper, &weights), 15);

        let both = ConstraintSet {
            min_weight: Some(30.0),
            max_weight: Some(70.0),
            ..Default::default()
        };
        assert_eq!(calculate_match_score(&breed, &both, &weights), 35);

        let lower_only_met = ConstraintSet {
            min_weight: Some(30.0),
            max_weight: Some(50.0),
            ..Default::default()
        };
        assert_eq!(calculate_match_score(&breed, &lower_only_met, &weights), 15);
    }

    #[test]
    fn test_lifespan_and_height_points() {
        let constraints = ConstraintSet {
            min_lifespan: Some(10.0),
            max_lifespan: Some(15.0),
            max_height: Some(24.0),
            ..Default::default()
        };

        let score = calculate_match_score(&create_test_breed(), &constraints, &ScoringWeights::default());

        assert_eq!(score, 25 + 10);
    }

    #[test]
    fn test_keyword_points() {
        let constraints = ConstraintSet {
            free_keywords: vec!["pointer".to_string(), "alert".to_string(), "retriever".to_string()],
            ..Default::default()
        };

        let score = calculate_match_score(&create_test_breed(), &constraints, &ScoringWeights::default());

        assert_eq!(score, 5 + 3);
    }

    #[test]
    fn test_unparseable_fields_score_nothing() {
        let mut breed = create_test_breed();
        breed.weight = Some(Measurement::imperial("unknown"));
        breed.life_span = None;
        let constraints = ConstraintSet {
            max_weight: Some(100.0),
            max_lifespan: Some(20.0),
            ..Default::default()
        };

        assert_eq!(calculate_match_score(&breed, &constraints, &ScoringWeights::default()), 0);
    }
}
