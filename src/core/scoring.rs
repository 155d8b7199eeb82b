use crate::core::weights::WEIGHTS;
use crate::models::{Candidate, Criteria, ExperienceLevel, VerificationLevel};

/// Inputs shared by every scorer for one candidate
///
/// `distance_km` is computed once by the aggregate scorer and is `Some`
/// exactly when the criteria carry a location.
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'a> {
    pub candidate: &'a Candidate,
    pub criteria: &'a Criteria,
    pub distance_km: Option<f64>,
}

/// Points awarded by one scorer, with the reasons behind them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialScore {
    pub points: f64,
    pub reasons: Vec<String>,
}

impl PartialScore {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn award(points: f64, reason: impl Into<String>) -> Self {
        let mut score = Self::none();
        score.add(points, reason);
        score
    }

    /// Add points with a reason; zero-point awards leave no reason behind
    pub fn add(&mut self, points: f64, reason: impl Into<String>) {
        if points > 0.0 {
            self.points += points;
            self.reasons.push(reason.into());
        }
    }
}

/// Signature shared by all criterion scorers
pub type ScoreFn = fn(&MatchContext<'_>) -> PartialScore;

/// Scorers in the order their points and reasons are aggregated
pub const SCORERS: [ScoreFn; 8] = [
    score_service,
    score_location,
    score_budget,
    score_languages,
    score_rating,
    score_experience,
    score_verification,
    score_bonuses,
];

/// Full weight iff the requested service is offered; no partial credit
pub fn score_service(ctx: &MatchContext<'_>) -> PartialScore {
    match ctx.criteria.service_type.as_deref() {
        Some(service) if ctx.candidate.offers(service) => {
            PartialScore::award(WEIGHTS.service, "Exact service match")
        }
        _ => PartialScore::none(),
    }
}

/// Tiered by distance; NaN distances fall through every tier
pub fn score_location(ctx: &MatchContext<'_>) -> PartialScore {
    let Some(distance_km) = ctx.distance_km else {
        return PartialScore::none();
    };

    WEIGHTS
        .location_tiers
        .iter()
        .find(|tier| distance_km <= tier.max_km)
        .map(|tier| PartialScore::award(tier.points, tier.reason))
        .unwrap_or_default()
}

pub fn score_budget(ctx: &MatchContext<'_>) -> PartialScore {
    let Some(budget) = ctx.criteria.budget else {
        return PartialScore::none();
    };
    let rate = ctx.candidate.hourly_rate;

    if budget.contains(rate) {
        PartialScore::award(WEIGHTS.budget_full, "Within budget")
    } else if rate < budget.min || rate <= budget.max * WEIGHTS.budget_tolerance {
        PartialScore::award(WEIGHTS.budget_partial, "Close to your budget")
    } else {
        PartialScore::none()
    }
}

pub fn score_languages(ctx: &MatchContext<'_>) -> PartialScore {
    let requested = match ctx.criteria.languages.as_deref() {
        Some(languages) if !languages.is_empty() => languages,
        _ => return PartialScore::none(),
    };

    let spoken = requested
        .iter()
        .filter(|language| ctx.candidate.speaks(language))
        .count();

    if spoken == requested.len() {
        PartialScore::award(WEIGHTS.languages_full, "Speaks your languages")
    } else if spoken > 0 {
        PartialScore::award(WEIGHTS.languages_partial, "Speaks some of your languages")
    } else {
        PartialScore::none()
    }
}

/// Reputation from rating and review volume; applies regardless of criteria
pub fn score_rating(ctx: &MatchContext<'_>) -> PartialScore {
    let candidate = ctx.candidate;

    WEIGHTS
        .rating_tiers
        .iter()
        .find(|tier| {
            candidate.rating >= tier.min_rating && candidate.review_count >= tier.min_reviews
        })
        .map(|tier| PartialScore::award(tier.points, tier.reason))
        .unwrap_or_default()
}

/// Level requirement when requested, otherwise one point per year up to the cap
pub fn score_experience(ctx: &MatchContext<'_>) -> PartialScore {
    let years = ctx.candidate.experience_years;

    match ctx.criteria.experience_level {
        Some(ExperienceLevel::Expert) if years >= WEIGHTS.expert_min_years => {
            PartialScore::award(WEIGHTS.experience_max, "Expert professional")
        }
        Some(ExperienceLevel::Intermediate) if years >= WEIGHTS.intermediate_min_years => {
            PartialScore::award(WEIGHTS.experience_max, "Experienced professional")
        }
        Some(ExperienceLevel::Any) => {
            PartialScore::award(WEIGHTS.experience_any, "Has experience")
        }
        Some(_) => PartialScore::none(),
        None => PartialScore::award(years.min(WEIGHTS.experience_max), experience_reason(years)),
    }
}

// Display for f64 drops a zero fraction: 6.0 renders as "6", 2.5 as "2.5"
fn experience_reason(years: f64) -> String {
    if years == 1.0 {
        "1 year of experience".to_string()
    } else {
        format!("{} years of experience", years)
    }
}

pub fn score_verification(ctx: &MatchContext<'_>) -> PartialScore {
    if ctx.criteria.verification_required != Some(true) {
        return PartialScore::none();
    }

    match ctx.candidate.verification_level {
        VerificationLevel::BackgroundCheck => {
            PartialScore::award(WEIGHTS.background_check, "Background checked")
        }
        VerificationLevel::Enhanced => {
            PartialScore::award(WEIGHTS.enhanced_verification, "Enhanced verification")
        }
        VerificationLevel::Basic => PartialScore::none(),
    }
}

/// Additive situational bonuses, each independent of the others
pub fn score_bonuses(ctx: &MatchContext<'_>) -> PartialScore {
    let candidate = ctx.candidate;
    let mut score = PartialScore::none();

    let available = ctx
        .criteria
        .preferred_times
        .as_deref()
        .unwrap_or_default()
        .iter()
        .any(|slot| candidate.availability.covers(*slot));
    if available {
        score.add(WEIGHTS.availability_bonus, "Available at your preferred times");
    }

    if candidate.on_time_rate >= WEIGHTS.punctuality_min_rate {
        score.add(WEIGHTS.punctuality_bonus, "Punctual");
    }

    if candidate.response_time_minutes <= WEIGHTS.responsiveness_max_minutes {
        score.add(WEIGHTS.responsiveness_bonus, "Quick to respond");
    }

    score
}
