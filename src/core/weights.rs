//! Scoring policy: every point value and tier boundary used by the scorers.
//!
//! | Criterion    | Max points |
//! |--------------|-----------:|
//! | service      | 30 |
//! | location     | 20 |
//! | budget       | 15 |
//! | languages    | 15 |
//! | rating       | 10 |
//! | experience   |  5 |
//! | verification |  5 |
//! | bonuses      |  7 |
//!
//! The maximum raw sum is 107; the aggregate is clamped to [`MAX_MATCH_SCORE`].

/// Upper bound of an aggregate match score
pub const MAX_MATCH_SCORE: f64 = 100.0;

/// Results below this aggregate score are never surfaced
pub const MIN_MATCH_SCORE: f64 = 40.0;

/// Distance band: candidates at or below `max_km` earn `points`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceTier {
    pub max_km: f64,
    pub points: f64,
    pub reason: &'static str,
}

/// Rating band: requires `min_rating` and at least `min_reviews` reviews
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingTier {
    pub min_rating: f64,
    pub min_reviews: u32,
    pub points: f64,
    pub reason: &'static str,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub service: f64,
    /// Checked in order, first matching tier wins
    pub location_tiers: [DistanceTier; 3],
    pub budget_full: f64,
    pub budget_partial: f64,
    /// Rates up to `max * budget_tolerance` still earn partial credit
    pub budget_tolerance: f64,
    pub languages_full: f64,
    pub languages_partial: f64,
    /// Checked in order, first matching tier wins
    pub rating_tiers: [RatingTier; 3],
    pub experience_max: f64,
    pub experience_any: f64,
    pub expert_min_years: f64,
    pub intermediate_min_years: f64,
    pub background_check: f64,
    pub enhanced_verification: f64,
    pub availability_bonus: f64,
    pub punctuality_bonus: f64,
    pub punctuality_min_rate: f64,
    pub responsiveness_bonus: f64,
    pub responsiveness_max_minutes: f64,
}

pub const WEIGHTS: ScoringWeights = ScoringWeights {
    service: 30.0,
    location_tiers: [
        DistanceTier { max_km: 5.0, points: 20.0, reason: "Very close" },
        DistanceTier { max_km: 10.0, points: 15.0, reason: "Nearby" },
        DistanceTier { max_km: 20.0, points: 10.0, reason: "Within 20km" },
    ],
    budget_full: 15.0,
    budget_partial: 10.0,
    budget_tolerance: 1.1,
    languages_full: 15.0,
    languages_partial: 10.0,
    rating_tiers: [
        RatingTier { min_rating: 4.8, min_reviews: 20, points: 10.0, reason: "Highly rated" },
        RatingTier { min_rating: 4.5, min_reviews: 0, points: 7.0, reason: "Well rated" },
        RatingTier { min_rating: 4.0, min_reviews: 0, points: 5.0, reason: "Good rating" },
    ],
    experience_max: 5.0,
    experience_any: 3.0,
    expert_min_years: 5.0,
    intermediate_min_years: 2.0,
    background_check: 5.0,
    enhanced_verification: 3.0,
    availability_bonus: 3.0,
    punctuality_bonus: 2.0,
    punctuality_min_rate: 95.0,
    responsiveness_bonus: 2.0,
    responsiveness_max_minutes: 60.0,
};
