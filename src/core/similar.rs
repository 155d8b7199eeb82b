use crate::core::matcher::Matcher;
use crate::models::{BudgetRange, Candidate, Criteria, MatchedProfessional};

/// Number of similar professionals returned when the caller gives no limit
pub const DEFAULT_SIMILAR_LIMIT: usize = 5;

const SIMILAR_BUDGET_LOWER: f64 = 0.8;
const SIMILAR_BUDGET_UPPER: f64 = 1.2;

/// Build criteria describing the reference professional
///
/// A reference with no services yields no service type, so the service
/// scorer contributes nothing for any candidate.
pub fn criteria_from_reference(reference: &Candidate) -> Criteria {
    Criteria {
        service_type: reference.primary_service().map(str::to_string),
        location: Some(reference.location),
        budget: Some(BudgetRange::new(
            reference.hourly_rate * SIMILAR_BUDGET_LOWER,
            reference.hourly_rate * SIMILAR_BUDGET_UPPER,
        )),
        languages: Some(reference.languages.clone()),
        ..Default::default()
    }
}

impl Matcher {
    /// Find professionals similar to `reference`
    ///
    /// The reference itself, matched by id, is never part of the result.
    pub fn similar_professionals(
        &self,
        reference: &Candidate,
        candidates: &[Candidate],
        limit: usize,
    ) -> Vec<MatchedProfessional> {
        let criteria = criteria_from_reference(reference);

        let mut matches = self.match_excluding(candidates, &criteria, &reference.id);
        matches.truncate(limit);

        tracing::debug!(
            "Returning {} professionals similar to {}",
            matches.len(),
            reference.id
        );

        matches
    }
}

/// Find similar professionals with the default matcher
pub fn get_similar_professionals(
    reference: &Candidate,
    candidates: &[Candidate],
    limit: Option<usize>,
) -> Vec<MatchedProfessional> {
    Matcher::default().similar_professionals(
        reference,
        candidates,
        limit.unwrap_or(DEFAULT_SIMILAR_LIMIT),
    )
}
