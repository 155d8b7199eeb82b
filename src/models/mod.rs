// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Availability, BudgetRange, Candidate, Criteria, ExperienceLevel, GeoPoint,
    MatchedProfessional, TimeSlot, VerificationLevel,
};
pub use requests::{FindMatchesRequest, SimilarProfessionalsRequest};
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse};
