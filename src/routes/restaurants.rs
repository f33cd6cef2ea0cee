use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    Coordinate, ErrorResponse, HealthResponse, NearbyParams, NearbyResponse, ReferenceKind,
    ResultView, SearchParams, SearchResponse, SearchStatus,
};
use crate::core::{parse_reference, Matcher};
use crate::services::CatalogStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub matcher: Matcher,
    /// Reference point used when a search carries no coordinates
    pub fallback: Coordinate,
}

/// Configure all restaurant routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/restaurants", web::get().to(search_restaurants))
        .route("/restaurants/nearby", web::get().to(nearby_restaurants));
}

fn invalid_reference(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "invalid_reference".to_string(),
        message,
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let venues = state.catalog.load_venues().await;
    let chains = state.catalog.load_chain_brands().await;

    let status = if venues.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        venues: venues.len(),
        chains: chains.len(),
    })
}

/// Search endpoint
///
/// GET /api/restaurants?q={query}&lat={lat}&lng={lng}
///
/// `lat` and `lng` go together; when both are left out the configured
/// fallback point is used.
async fn search_restaurants(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> impl Responder {
    if let Err(errors) = params.validate() {
        tracing::info!("Validation failed for search request: field_errors={:?}", errors);
        return invalid_reference(errors.to_string());
    }

    let (reference, kind) = match (params.lat, params.lng) {
        (None, None) => (state.fallback, ReferenceKind::Fallback),
        (lat, lng) => match parse_reference(lat, lng) {
            Ok(coordinate) => (coordinate, ReferenceKind::User),
            Err(e) => return invalid_reference(e.to_string()),
        },
    };

    let query = params.q.trim();
    if query.is_empty() {
        return HttpResponse::Ok().json(SearchResponse {
            status: SearchStatus::NoQuery,
            query: String::new(),
            chain: None,
            reference: kind,
            total_results: 0,
            results: vec![],
        });
    }

    let venues = state.catalog.load_venues().await;
    let chains = state.catalog.load_chain_brands().await;

    let result = state.matcher.search(query, reference, &venues, &chains);

    let status = if result.results.is_empty() {
        SearchStatus::NoMatch
    } else {
        SearchStatus::Ok
    };

    tracing::info!(
        "Search {:?} returned {} of {} venues (chain: {:?})",
        query,
        result.results.len(),
        venues.len(),
        result.chain
    );

    HttpResponse::Ok().json(SearchResponse {
        status,
        query: query.to_string(),
        chain: result.chain,
        reference: kind,
        total_results: result.results.len(),
        results: result.results.into_iter().map(ResultView::from).collect(),
    })
}

/// Nearby endpoint
///
/// GET /api/restaurants/nearby?lat={lat}&lng={lng}&maxMiles={miles}&limit={n}
///
/// `maxMiles` is clamped to [0.1, 25] and `limit` to [1, 20]. A bound that
/// is not a number falls back to its default and a fractional `limit` is
/// truncated.
async fn nearby_restaurants(
    state: web::Data<AppState>,
    params: web::Query<NearbyParams>,
) -> impl Responder {
    if let Err(errors) = params.validate() {
        tracing::info!("Validation failed for nearby request: field_errors={:?}", errors);
        return invalid_reference(errors.to_string());
    }

    let reference = match parse_reference(params.lat, params.lng) {
        Ok(coordinate) => coordinate,
        Err(e) => return invalid_reference(e.to_string()),
    };

    let venues = state.catalog.load_venues().await;

    let nearby = state
        .matcher
        .nearby(reference, &venues, params.max_miles(), params.limit());

    tracing::debug!(
        "Nearby ({:.4}, {:.4}) within {} mi: {} venues",
        reference.lat,
        reference.lng,
        nearby.max_miles,
        nearby.results.len()
    );

    HttpResponse::Ok().json(NearbyResponse {
        max_miles: nearby.max_miles,
        limit: nearby.limit,
        total_results: nearby.results.len(),
        results: nearby.results.into_iter().map(ResultView::from).collect(),
    })
}
