use crate::core::ranges::{parse_dash_range, parse_integer_range, ValueRange};
use crate::models::{BreedRecord, ConstraintSet};

/// Check whether a breed satisfies every constraint family the query set
///
/// Families are ANDed together. Within the temperament family every tag must
/// be present; within the size family one matching size word is enough.
/// A requested family with missing or unparseable breed data rejects.
#[inline]
pub fn admits(breed: &BreedRecord, constraints: &ConstraintSet) -> bool {
    matches_weight(breed, constraints)
        && matches_lifespan(breed, constraints)
        && matches_height(breed, constraints)
        && matches_temperament(breed, constraints)
        && matches_size(breed, constraints)
}

pub fn matches_weight(breed: &BreedRecord, constraints: &ConstraintSet) -> bool {
    if !constraints.has_weight_bounds() {
        return true;
    }
    range_satisfies(
        breed.weight_imperial().and_then(parse_dash_range),
        constraints.min_weight,
        constraints.max_weight,
    )
}

pub fn matches_lifespan(breed: &BreedRecord, constraints: &ConstraintSet) -> bool {
    if !constraints.has_lifespan_bounds() {
        return true;
    }
    range_satisfies(
        breed.life_span.as_deref().and_then(parse_integer_range),
        constraints.min_lifespan,
        constraints.max_lifespan,
    )
}

pub fn matches_height(breed: &BreedRecord, constraints: &ConstraintSet) -> bool {
    if !constraints.has_height_bounds() {
        return true;
    }
    range_satisfies(
        breed.height_imperial().and_then(parse_dash_range),
        constraints.min_height,
        constraints.max_height,
    )
}

pub fn matches_temperament(breed: &BreedRecord, constraints: &ConstraintSet) -> bool {
    if constraints.temperaments.is_empty() {
        return true;
    }
    let temperament = breed.temperament_text();
    constraints
        .temperaments
        .iter()
        .all(|tag| temperament.contains(&tag.to_lowercase()))
}

pub fn matches_size(breed: &BreedRecord, constraints: &ConstraintSet) -> bool {
    if constraints.sizes.is_empty() {
        return true;
    }
    let haystacks = [breed.temperament_text(), breed.name_text(), breed.group_text()];
    constraints.sizes.iter().any(|size| {
        size.keywords()
            .iter()
            .any(|word| haystacks.iter().any(|text| text.contains(word)))
    })
}

#[inline]
fn range_satisfies(range: Option<ValueRange>, min: Option<f64>, max: Option<f64>) -> bool {
    match range {
        Some(range) => range.within(min, max),
        None => false,
    }
}
