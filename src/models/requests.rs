use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Candidate, Criteria};

/// Request to rank a candidate pool against criteria
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(nested)]
    #[serde(default)]
    pub criteria: Criteria,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Request for professionals similar to a reference professional
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimilarProfessionalsRequest {
    #[validate(nested)]
    pub reference: Candidate,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}
