use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::{metrics, types::Health};
use service::auth::AuthConfig;

use crate::openapi::ApiDoc;

pub mod auth;
pub mod categories;
pub mod company_profile;
pub mod offerings;
pub mod posts;
pub mod running_texts;
pub mod team_members;
pub mod users;

/// Shared handler state.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: AuthConfig,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn metrics_handler() -> impl IntoResponse {
    metrics::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Count every matched request by route template and status.
async fn track_metrics(req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = req.method().to_string();
    let res = next.run(req).await;
    metrics::record_request(&route, &method, res.status());
    res
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": "not_found", "message": "no such route"})))
}

/// Build the full application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .route("/api-docs/openapi.json", get(openapi_json));

    let api = Router::new()
        .merge(auth::router())
        .merge(users::router())
        .merge(posts::router())
        .merge(categories::router())
        .merge(offerings::router())
        .merge(team_members::router())
        .merge(company_profile::router())
        .merge(running_texts::router());

    public
        .merge(api)
        .route_layer(middleware::from_fn(track_metrics))
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
