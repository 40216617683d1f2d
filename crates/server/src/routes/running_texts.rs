use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use models::running_text;
use service::running_text_service::{self, CreateRunningTextInput, UpdateRunningTextInput};

use super::ServerState;
use crate::errors::JsonApiError;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/running-texts", get(list).post(create))
        .route("/api/running-texts/active", get(active))
        .route("/api/running-texts/:id", put(update).delete(delete))
}

#[utoipa::path(get, path = "/api/running-texts", tag = "running-text", responses((status = 200, description = "All entries, newest first", body = [crate::openapi::RunningTextDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<running_text::Model>>, JsonApiError> {
    Ok(Json(running_text_service::list_running_texts(&state.db).await?))
}

#[utoipa::path(get, path = "/api/running-texts/active", tag = "running-text", responses((status = 200, description = "Active entry or null", body = crate::openapi::RunningTextDoc)))]
pub async fn active(State(state): State<ServerState>) -> Result<Json<Option<running_text::Model>>, JsonApiError> {
    Ok(Json(running_text_service::get_active_running_text(&state.db).await?))
}

#[utoipa::path(post, path = "/api/running-texts", tag = "running-text", request_body = crate::openapi::CreateRunningTextRequest, responses((status = 201, description = "Created", body = crate::openapi::RunningTextDoc), (status = 400, description = "Bad Request", body = crate::openapi::ErrorBody)))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateRunningTextInput>,
) -> Result<(StatusCode, Json<running_text::Model>), JsonApiError> {
    Ok((StatusCode::CREATED, Json(running_text_service::create_running_text(&state.db, input).await?)))
}

#[utoipa::path(put, path = "/api/running-texts/{id}", tag = "running-text", params(("id" = i32, Path, description = "Running text id")), request_body = crate::openapi::UpdateRunningTextRequest, responses((status = 200, description = "Updated", body = crate::openapi::RunningTextDoc), (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateRunningTextInput>,
) -> Result<Json<running_text::Model>, JsonApiError> {
    Ok(Json(running_text_service::update_running_text(&state.db, id, input).await?))
}

#[utoipa::path(delete, path = "/api/running-texts/{id}", tag = "running-text", params(("id" = i32, Path, description = "Running text id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)))]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    running_text_service::delete_running_text(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
