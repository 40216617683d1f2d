use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use models::post;
use service::post_service::{self, CreatePostInput, UpdatePostInput};

use super::ServerState;
use crate::errors::JsonApiError;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/posts", get(list).post(create))
        .route("/api/posts/recent", get(recent))
        .route("/api/posts/category/:category", get(by_category))
        .route("/api/posts/:id", get(get_one).put(update).delete(delete))
}

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<u64>,
}

#[utoipa::path(get, path = "/api/posts", tag = "posts", responses((status = 200, description = "All posts, newest first", body = [crate::openapi::PostDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<post::Model>>, JsonApiError> {
    Ok(Json(post_service::list_posts(&state.db).await?))
}

#[utoipa::path(get, path = "/api/posts/recent", tag = "posts", params(("limit" = Option<u64>, Query, description = "Maximum posts, default 5")), responses((status = 200, description = "Most recent posts", body = [crate::openapi::PostDoc])))]
pub async fn recent(State(state): State<ServerState>, Query(q): Query<RecentQuery>) -> Result<Json<Vec<post::Model>>, JsonApiError> {
    Ok(Json(post_service::recent_posts(&state.db, q.limit).await?))
}

#[utoipa::path(get, path = "/api/posts/category/{category}", tag = "posts", params(("category" = String, Path, description = "Category reference")), responses((status = 200, description = "Posts in category", body = [crate::openapi::PostDoc])))]
pub async fn by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<post::Model>>, JsonApiError> {
    Ok(Json(post_service::posts_by_category(&state.db, &category).await?))
}

#[utoipa::path(post, path = "/api/posts", tag = "posts", request_body = crate::openapi::CreatePostRequest, responses((status = 201, description = "Created", body = crate::openapi::PostDoc), (status = 400, description = "Bad Request", body = crate::openapi::ErrorBody)))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreatePostInput>,
) -> Result<(StatusCode, Json<post::Model>), JsonApiError> {
    Ok((StatusCode::CREATED, Json(post_service::create_post(&state.db, input).await?)))
}

#[utoipa::path(get, path = "/api/posts/{id}", tag = "posts", params(("id" = i32, Path, description = "Post id")), responses((status = 200, description = "Post or null", body = crate::openapi::PostDoc)))]
pub async fn get_one(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Option<post::Model>>, JsonApiError> {
    Ok(Json(post_service::get_post(&state.db, id).await?))
}

#[utoipa::path(put, path = "/api/posts/{id}", tag = "posts", params(("id" = i32, Path, description = "Post id")), request_body = crate::openapi::UpdatePostRequest, responses((status = 200, description = "Updated", body = crate::openapi::PostDoc), (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdatePostInput>,
) -> Result<Json<post::Model>, JsonApiError> {
    Ok(Json(post_service::update_post(&state.db, id, input).await?))
}

#[utoipa::path(delete, path = "/api/posts/{id}", tag = "posts", params(("id" = i32, Path, description = "Post id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)))]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    post_service::delete_post(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
