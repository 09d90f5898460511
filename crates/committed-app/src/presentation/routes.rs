use axum::http::header::{
    HeaderName, ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE, ORIGIN, SET_COOKIE,
};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, patch, post};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::presentation::handlers;
use crate::presentation::state::AppState;

const CORS_MAX_AGE: Duration = Duration::from_secs(86400);

/// Full router: every route lives under `/api`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/habits",
            post(handlers::create_habit).get(handlers::list_habits),
        )
        .route("/habits/all", get(handlers::list_habits_with_progress))
        .route("/habits/entry", patch(handlers::record_entry))
        .route("/habits/{id}/analytics", get(handlers::get_analytics))
        .route("/habits/{id}/calendar", get(handlers::get_calendar));

    Router::new()
        .nest("/api", api)
        .layer(cors_layer(&state.settings.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            COOKIE,
            HeaderName::from_static("x-forwarded-proto"),
            ORIGIN,
            ACCEPT,
        ])
        .expose_headers([SET_COOKIE, COOKIE])
        .max_age(CORS_MAX_AGE)
}
