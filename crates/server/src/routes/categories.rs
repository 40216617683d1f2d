use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use models::category;
use service::category_service::{self, CreateCategoryInput};

use super::ServerState;
use crate::errors::JsonApiError;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/categories", get(list).post(create))
        .route("/api/categories/:id", get(get_one).delete(delete))
}

#[utoipa::path(get, path = "/api/categories", tag = "categories", responses((status = 200, description = "All categories by name", body = [crate::openapi::CategoryDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<category::Model>>, JsonApiError> {
    Ok(Json(category_service::list_categories(&state.db).await?))
}

#[utoipa::path(post, path = "/api/categories", tag = "categories", request_body = crate::openapi::CreateCategoryRequest, responses((status = 201, description = "Created", body = crate::openapi::CategoryDoc), (status = 409, description = "Name taken", body = crate::openapi::ErrorBody)))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateCategoryInput>,
) -> Result<(StatusCode, Json<category::Model>), JsonApiError> {
    Ok((StatusCode::CREATED, Json(category_service::create_category(&state.db, input).await?)))
}

#[utoipa::path(get, path = "/api/categories/{id}", tag = "categories", params(("id" = i32, Path, description = "Category id")), responses((status = 200, description = "Category or null", body = crate::openapi::CategoryDoc)))]
pub async fn get_one(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Option<category::Model>>, JsonApiError> {
    Ok(Json(category_service::get_category(&state.db, id).await?))
}

/// Posts referencing the category move to "Uncategorized". Unknown ids succeed.
#[utoipa::path(delete, path = "/api/categories/{id}", tag = "categories", params(("id" = i32, Path, description = "Category id")), responses((status = 204, description = "Deleted or already absent")))]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    category_service::delete_category(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
