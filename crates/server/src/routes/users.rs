use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use models::user;
use service::user_service::{self, CreateUserInput, UpdateUserInput};

use super::ServerState;
use crate::errors::JsonApiError;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/users", get(list).post(create))
        .route("/api/users/:id", get(get_one).put(update).delete(delete))
}

#[utoipa::path(get, path = "/api/users", tag = "users", responses((status = 200, description = "All users", body = [crate::openapi::UserDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<user::Model>>, JsonApiError> {
    Ok(Json(user_service::list_users(&state.db).await?))
}

#[utoipa::path(post, path = "/api/users", tag = "users", request_body = crate::openapi::CreateUserRequest, responses((status = 201, description = "Created", body = crate::openapi::UserDoc), (status = 400, description = "Bad Request", body = crate::openapi::ErrorBody), (status = 409, description = "Username taken", body = crate::openapi::ErrorBody)))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateUserInput>,
) -> Result<(StatusCode, Json<user::Model>), JsonApiError> {
    Ok((StatusCode::CREATED, Json(user_service::create_user(&state.db, input).await?)))
}

#[utoipa::path(get, path = "/api/users/{id}", tag = "users", params(("id" = i32, Path, description = "User id")), responses((status = 200, description = "User or null", body = crate::openapi::UserDoc)))]
pub async fn get_one(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Option<user::Model>>, JsonApiError> {
    Ok(Json(user_service::get_user(&state.db, id).await?))
}

#[utoipa::path(put, path = "/api/users/{id}", tag = "users", params(("id" = i32, Path, description = "User id")), request_body = crate::openapi::UpdateUserRequest, responses((status = 200, description = "Updated", body = crate::openapi::UserDoc), (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateUserInput>,
) -> Result<Json<user::Model>, JsonApiError> {
    Ok(Json(user_service::update_user(&state.db, id, input).await?))
}

#[utoipa::path(delete, path = "/api/users/{id}", tag = "users", params(("id" = i32, Path, description = "User id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)))]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    user_service::delete_user(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
