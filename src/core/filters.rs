use std::cmp::Ordering;
use crate::core::weights::MIN_MATCH_SCORE;
use crate::models::MatchedProfessional;

/// Check if a scored professional clears the minimum match score
#[inline]
pub fn meets_threshold(matched: &MatchedProfessional) -> bool {
    matched.match_score >= MIN_MATCH_SCORE
}

/// Sort by score, highest first
///
/// `sort_by` is stable, so professionals with equal scores keep their input
/// order. There is no secondary key.
pub fn rank(matches: &mut [MatchedProfessional]) {
    matches.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(Ordering::Equal)
    });
}
