//! Pro Match - matching and ranking engine for service professionals
//!
//! Takes a pool of candidate professionals and a requester's criteria and
//! produces a score-ordered, reason-annotated shortlist. Scoring is pure and
//! deterministic; the `routes` module exposes it over HTTP.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    get_similar_professionals, haversine_distance, match_professionals, Matcher, MatcherOptions,
};
pub use crate::error::{validate_inputs, MatchError};
pub use crate::models::{Candidate, Criteria, GeoPoint, MatchedProfessional};
