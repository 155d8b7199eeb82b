// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod similar;
pub mod weights;

pub use distance::haversine_distance;
pub use filters::{meets_threshold, rank};
pub use matcher::{match_professionals, score_candidate, Matcher, MatcherOptions};
pub use scoring::{MatchContext, PartialScore, SCORERS};
pub use similar::{criteria_from_reference, get_similar_professionals, DEFAULT_SIMILAR_LIMIT};
pub use weights::{ScoringWeights, MAX_MATCH_SCORE, MIN_MATCH_SCORE, WEIGHTS};
