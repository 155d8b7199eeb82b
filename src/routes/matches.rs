use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::error::{check_pool_size, MatchError};
use crate::models::{
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse,
    SimilarProfessionalsRequest,
};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

impl AppState {
    pub fn new(matching: MatchingSettings) -> Self {
        Self {
            matcher: Matcher::new(matching.matcher_options()),
            matching,
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/similar", web::post().to(similar_professionals));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "criteria": { "serviceType": "cleaning", "location": {"lat": 35.68, "lng": 139.76} },
///   "candidates": [ ... ]
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(e) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {}", e);
        return error_response(MatchError::from(e));
    }
    if let Err(e) = check_pool_size(req.candidates.len(), state.matching.max_candidates) {
        tracing::warn!("Rejected find_matches request: {}", e);
        return error_response(e);
    }

    let total_candidates = req.candidates.len();
    tracing::info!("Matching {} candidates", total_candidates);

    let matcher = state.matcher.clone();
    let result =
        web::block(move || matcher.match_professionals(&req.candidates, &req.criteria)).await;

    match result {
        Ok(matches) => {
            tracing::info!(
                "Returning {} matches (from {} candidates)",
                matches.len(),
                total_candidates
            );
            HttpResponse::Ok().json(FindMatchesResponse {
                total_results: matches.len(),
                total_candidates,
                matches,
            })
        }
        Err(e) => {
            tracing::error!("Matching task failed: {}", e);
            error_response(MatchError::Blocking(e.to_string()))
        }
    }
}

/// Similar professionals endpoint
///
/// POST /api/v1/matches/similar
///
/// Request body:
/// ```json
/// {
///   "reference": { ... },
///   "candidates": [ ... ],
///   "limit": 5
/// }
/// ```
async fn similar_professionals(
    state: web::Data<AppState>,
    req: web::Json<SimilarProfessionalsRequest>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(e) = req.validate() {
        tracing::info!("Validation failed for similar_professionals request: {}", e);
        return error_response(MatchError::from(e));
    }
    if let Err(e) = check_pool_size(req.candidates.len(), state.matching.max_candidates) {
        tracing::warn!("Rejected similar_professionals request: {}", e);
        return error_response(e);
    }

    let limit = state.matching.similar_limit(req.limit);
    let total_candidates = req.candidates.len();
    tracing::info!(
        "Finding up to {} professionals similar to {} among {} candidates",
        limit,
        req.reference.id,
        total_candidates
    );

    let matcher = state.matcher.clone();
    let result = web::block(move || {
        matcher.similar_professionals(&req.reference, &req.candidates, limit)
    })
    .await;

    match result {
        Ok(matches) => HttpResponse::Ok().json(FindMatchesResponse {
            total_results: matches.len(),
            total_candidates,
            matches,
        }),
        Err(e) => {
            tracing::error!("Similarity task failed: {}", e);
            error_response(MatchError::Blocking(e.to_string()))
        }
    }
}

fn status_for(err: &MatchError) -> StatusCode {
    match err {
        MatchError::Validation(_) => StatusCode::BAD_REQUEST,
        MatchError::PoolTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        MatchError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: MatchError) -> HttpResponse {
    let status = status_for(&err);
    HttpResponse::build(status).json(ErrorResponse {
        error: err.kind().to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    })
}
