use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1, max = 500))]
    #[serde(default, alias = "query")]
    pub q: String,
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
}

/// Query string for the breed listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListBreedsRequest {
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
}

/// Query string for the breed name lookup endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BreedNameRequest {
    #[validate(length(min = 1, max = 100))]
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_fails_validation() {
        let req = SearchRequest {
            q: String::new(),
            limit: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_zero_limit_fails_validation() {
        let req = SearchRequest {
            q: "friendly".to_string(),
            limit: Some(0),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_query_alias() {
        let req: SearchRequest = serde_json::from_str(r#"{"query": "calm dogs"}"#).unwrap();
        assert_eq!(req.q, "calm dogs");
        assert!(req.limit.is_none());
    }
}
