use serde::{Deserialize, Serialize};

/// Imperial/metric pair as served by TheDogAPI, e.g. `{"imperial": "6 - 13", "metric": "3 - 6"}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(default)]
    pub imperial: Option<String>,
    #[serde(default)]
    pub metric: Option<String>,
}

impl Measurement {
    pub fn imperial(value: &str) -> Self {
        Self {
            imperial: Some(value.to_string()),
            metric: None,
        }
    }
}

/// Breed record from the external catalog
///
/// Read-only to the matching core. Every field except `name` is optional
/// because the upstream catalog is patchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreedRecord {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub temperament: Option<String>,
    #[serde(default)]
    pub weight: Option<Measurement>,
    #[serde(default)]
    pub height: Option<Measurement>,
    #[serde(default)]
    pub life_span: Option<String>,
    #[serde(default)]
    pub breed_group: Option<String>,
    #[serde(default)]
    pub bred_for: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub reference_image_id: Option<String>,
}

impl BreedRecord {
    /// Lower-cased temperament text, empty when the catalog has none
    pub fn temperament_text(&self) -> String {
        self.temperament.as_deref().unwrap_or_default().to_lowercase()
    }

    pub fn name_text(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn group_text(&self) -> String {
        self.breed_group.as_deref().unwrap_or_default().to_lowercase()
    }

    pub fn weight_imperial(&self) -> Option<&str> {
        self.weight.as_ref().and_then(|w| w.imperial.as_deref())
    }

    pub fn height_imperial(&self) -> Option<&str> {
        self.height.as_ref().and_then(|h| h.imperial.as_deref())
    }
}

/// Size category recognised in queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 3] = [SizeCategory::Small, SizeCategory::Medium, SizeCategory::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
        }
    }

    /// Trigger words for this category. The category name is always first.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            SizeCategory::Small => &["small", "tiny", "toy", "compact", "miniature"],
            SizeCategory::Medium => &["medium", "moderate", "average"],
            SizeCategory::Large => &["large", "big", "giant", "huge"],
        }
    }
}

/// Structured constraints extracted from a free-text query
///
/// Bounds are in pounds (weight), inches (height) and years (lifespan).
/// `None` means the user did not constrain that side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSet {
    pub sizes: Vec<SizeCategory>,
    pub temperaments: Vec<String>,
    #[serde(rename = "minWeight")]
    pub min_weight: Option<f64>,
    #[serde(rename = "maxWeight")]
    pub max_weight: Option<f64>,
    #[serde(rename = "minHeight")]
    pub min_height: Option<f64>,
    #[serde(rename = "maxHeight")]
    pub max_height: Option<f64>,
    #[serde(rename = "minLifespan")]
    pub min_lifespan: Option<f64>,
    #[serde(rename = "maxLifespan")]
    pub max_lifespan: Option<f64>,
    #[serde(rename = "freeKeywords")]
    pub free_keywords: Vec<String>,
}

impl ConstraintSet {
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
            && self.temperaments.is_empty()
            && self.min_weight.is_none()
            && self.max_weight.is_none()
            && self.min_height.is_none()
            && self.max_height.is_none()
            && self.min_lifespan.is_none()
            && self.max_lifespan.is_none()
            && self.free_keywords.is_empty()
    }

    pub fn has_weight_bounds(&self) -> bool {
        self.min_weight.is_some() || self.max_weight.is_some()
    }

    pub fn has_height_bounds(&self) -> bool {
        self.min_height.is_some() || self.max_height.is_some()
    }

    pub fn has_lifespan_bounds(&self) -> bool {
        self.min_lifespan.is_some() || self.max_lifespan.is_some()
    }
}

/// Breed admitted by the filter, with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredBreed {
    #[serde(flatten)]
    pub breed: BreedRecord,
    #[serde(rename = "matchScore")]
    pub match_score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_deserializes_from_dog_api_shape() {
        let json = r#"{
            "id": 1,
            "name": "Affenpinscher",
            "temperament": "Stubborn, Curious, Playful",
            "weight": {"imperial": "6 - 13", "metric": "3 - 6"},
            "height": {"imperial": "9 - 11.5", "metric": "23 - 29"},
            "life_span": "10 - 12 years",
            "bred_for": "Small rodent hunting",
            "breed_group": "Toy",
            "image": {"url": "https://cdn2.thedogapi.com/images/BJa4kxc4X.jpg"}
        }"#;

        let breed: BreedRecord = serde_json::from_str(json).unwrap();

        assert_eq!(breed.id, Some(1));
        assert_eq!(breed.weight_imperial(), Some("6 - 13"));
        assert_eq!(breed.height_imperial(), Some("9 - 11.5"));
        assert_eq!(breed.group_text(), "toy");
        assert!(breed.origin.is_none());
    }

    #[test]
    fn test_breed_missing_fields_default() {
        let breed: BreedRecord = serde_json::from_str(r#"{"name": "Mystery"}"#).unwrap();

        assert_eq!(breed.temperament_text(), "");
        assert!(breed.weight_imperial().is_none());
    }

    #[test]
    fn test_scored_breed_flattens_record() {
        let scored = ScoredBreed {
            breed: BreedRecord {
                name: "Pug".to_string(),
                ..Default::default()
            },
            match_score: 18,
        };

        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["name"], "Pug");
        assert_eq!(value["matchScore"], 18);
    }

    #[test]
    fn test_constraint_set_serializes_camel_case() {
        let constraints = ConstraintSet {
            sizes: vec![SizeCategory::Small],
            max_weight: Some(40.0),
            ..Default::default()
        };

        let value = serde_json::to_value(&constraints).unwrap();
        assert_eq!(value["sizes"][0], "small");
        assert_eq!(value["maxWeight"], 40.0);
        assert!(value["minWeight"].is_null());
        assert!(!constraints.is_empty());
        assert!(ConstraintSet::default().is_empty());
    }
}
