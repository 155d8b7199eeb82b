use rayon::prelude::*;
use crate::core::{
    distance::haversine_distance,
    filters::{meets_threshold, rank},
    scoring::{MatchContext, PartialScore, SCORERS},
    weights::MAX_MATCH_SCORE,
};
use crate::models::{Candidate, Criteria, MatchedProfessional};

/// Pools at least this large are scored on the rayon thread pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// Tuning knobs for the matching pipeline; none of them affect results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherOptions {
    pub parallel_threshold: usize,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Score one candidate against the criteria
///
/// Runs every scorer in aggregation order, sums their points, clamps the sum
/// to 100 and concatenates their reasons. The distance is reported whenever
/// the criteria carry a location, whatever it scored.
pub fn score_candidate(candidate: &Candidate, criteria: &Criteria) -> MatchedProfessional {
    let distance_km = criteria
        .location
        .map(|origin| haversine_distance(origin, candidate.location));

    let ctx = MatchContext {
        candidate,
        criteria,
        distance_km,
    };

    let total = SCORERS
        .iter()
        .map(|scorer| scorer(&ctx))
        .fold(PartialScore::none(), |mut acc, partial| {
            acc.points += partial.points;
            acc.reasons.extend(partial.reasons);
            acc
        });

    MatchedProfessional {
        professional: candidate.clone(),
        match_score: total.points.min(MAX_MATCH_SCORE),
        match_reasons: total.reasons,
        distance: distance_km,
    }
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Distance and per-criterion scoring
/// 2. Aggregation and clamping
/// 3. Threshold filtering
/// 4. Ranking
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    options: MatcherOptions,
}

impl Matcher {
    pub fn new(options: MatcherOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> MatcherOptions {
        self.options
    }

    /// Rank candidates against the criteria
    ///
    /// Returns only professionals scoring at least 40, highest score first,
    /// ties in input order. An empty pool yields an empty list.
    pub fn match_professionals(
        &self,
        candidates: &[Candidate],
        criteria: &Criteria,
    ) -> Vec<MatchedProfessional> {
        let scored = self.score_all(candidates.iter(), criteria);
        self.finish(scored, candidates.len())
    }

    /// Same pipeline as [`Matcher::match_professionals`] over the candidates
    /// whose id differs from `exclude_id`
    pub(crate) fn match_excluding(
        &self,
        candidates: &[Candidate],
        criteria: &Criteria,
        exclude_id: &str,
    ) -> Vec<MatchedProfessional> {
        let pool: Vec<&Candidate> = candidates
            .iter()
            .filter(|candidate| candidate.id != exclude_id)
            .collect();

        let scored = self.score_all(pool.iter().copied(), criteria);
        self.finish(scored, pool.len())
    }

    /// Score every candidate, preserving input order
    fn score_all<'a, I>(&self, candidates: I, criteria: &Criteria) -> Vec<MatchedProfessional>
    where
        I: ExactSizeIterator<Item = &'a Candidate>,
    {
        if candidates.len() >= self.options.parallel_threshold {
            let pool: Vec<&Candidate> = candidates.collect();
            pool.par_iter()
                .map(|candidate| score_candidate(candidate, criteria))
                .collect()
        } else {
            candidates
                .map(|candidate| score_candidate(candidate, criteria))
                .collect()
        }
    }

    fn finish(
        &self,
        scored: Vec<MatchedProfessional>,
        total_candidates: usize,
    ) -> Vec<MatchedProfessional> {
        let mut matches: Vec<MatchedProfessional> =
            scored.into_iter().filter(meets_threshold).collect();

        rank(&mut matches);

        tracing::debug!(
            "Matched {} of {} candidates",
            matches.len(),
            total_candidates
        );

        matches
    }
}

/// Rank candidates with the default matcher
pub fn match_professionals(
    candidates: &[Candidate],
    criteria: &Criteria,
) -> Vec<MatchedProfessional> {
    Matcher::default().match_professionals(candidates, criteria)
}
