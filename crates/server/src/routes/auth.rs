use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::warn;

use service::auth::{
    domain::{AuthSession, LoginInput},
    repo::seaorm::SeaOrmAuthRepository,
    AuthService,
};

use super::ServerState;
use crate::errors::JsonApiError;

pub const AUTH_COOKIE: &str = "auth_token";

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session))
}

fn auth_service(state: &ServerState) -> AuthService<SeaOrmAuthRepository> {
    AuthService::new(Arc::new(SeaOrmAuthRepository { db: state.db.clone() }), state.auth.clone())
}

/// Bearer token from `Authorization`, falling back to the `auth_token` cookie.
fn extract_token(headers: &HeaderMap, jar: &CookieJar) -> Option<String> {
    if let Some(h) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        match h.strip_prefix("Bearer ") {
            Some(token) => return Some(token.trim().to_string()),
            None => warn!("invalid Authorization format (expect Bearer)"),
        }
    }
    jar.get(AUTH_COOKIE).map(|c| c.value().to_string())
}

#[utoipa::path(post, path = "/auth/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged in", body = crate::openapi::SessionDoc), (status = 401, description = "Unauthorized", body = crate::openapi::ErrorBody)))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> Result<(CookieJar, Json<AuthSession>), JsonApiError> {
    let session = auth_service(&state).login(input).await?;
    let jar = match &session.token {
        Some(token) => {
            let mut cookie = Cookie::new(AUTH_COOKIE, token.clone());
            cookie.set_path("/");
            cookie.set_http_only(true);
            cookie.set_secure(false);
            cookie.set_same_site(SameSite::Lax);
            jar.add(cookie)
        }
        None => jar,
    };
    Ok((jar, Json(session)))
}

#[utoipa::path(post, path = "/auth/logout", tag = "auth", responses((status = 204, description = "Session cookie cleared")))]
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let mut cookie = Cookie::from(AUTH_COOKIE);
    cookie.set_path("/");
    (jar.remove(cookie), StatusCode::NO_CONTENT)
}

/// Current session, or `null` when the token is missing, invalid, or expired.
#[utoipa::path(get, path = "/auth/session", tag = "auth", responses((status = 200, description = "Session or null", body = crate::openapi::SessionDoc)))]
pub async fn session(State(state): State<ServerState>, headers: HeaderMap, jar: CookieJar) -> Json<Option<AuthSession>> {
    let token = extract_token(&headers, &jar);
    let user = auth_service(&state).validate_session(token.as_deref()).await;
    Json(user.map(|user| AuthSession { user, token: None }))
}
