use thiserror::Error;
use validator::Validate;
use crate::models::{Candidate, Criteria};

/// Errors raised at the boundary around the matching engine
///
/// The engine itself never fails; these cover rejected inputs and the
/// service layer that runs it.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Candidate pool of {size} exceeds the limit of {max}")]
    PoolTooLarge { size: usize, max: usize },

    #[error("Scoring task failed: {0}")]
    Blocking(String),
}

impl MatchError {
    /// Short machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            MatchError::Validation(_) => "validation_failed",
            MatchError::PoolTooLarge { .. } => "pool_too_large",
            MatchError::Blocking(_) => "internal_error",
        }
    }
}

/// Reject criteria and candidates the engine would silently mis-score
///
/// Checks coordinates, budgets, rates, ratings and on-time rates. Callers
/// that go through the HTTP layer get this for free.
pub fn validate_inputs(candidates: &[Candidate], criteria: &Criteria) -> Result<(), MatchError> {
    criteria.validate()?;
    for candidate in candidates {
        candidate.validate()?;
    }
    Ok(())
}

/// Reject pools larger than `max` candidates
pub fn check_pool_size(size: usize, max: usize) -> Result<(), MatchError> {
    if size > max {
        return Err(MatchError::PoolTooLarge { size, max });
    }
    Ok(())
}
