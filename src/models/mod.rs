// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BreedRecord, ConstraintSet, Measurement, ScoredBreed, SizeCategory};
pub use requests::{BreedNameRequest, ListBreedsRequest, SearchRequest};
pub use responses::{ErrorResponse, HealthResponse, SearchResponse};
