use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use models::offering;
use service::offering_service::{self, CreateOfferingInput, UpdateOfferingInput};

use super::ServerState;
use crate::errors::JsonApiError;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/services", get(list).post(create))
        .route("/api/services/:id", get(get_one).put(update).delete(delete))
}

#[utoipa::path(get, path = "/api/services", tag = "services", responses((status = 200, description = "All services", body = [crate::openapi::OfferingDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<offering::Model>>, JsonApiError> {
    Ok(Json(offering_service::list_offerings(&state.db).await?))
}

#[utoipa::path(post, path = "/api/services", tag = "services", request_body = crate::openapi::CreateOfferingRequest, responses((status = 201, description = "Created", body = crate::openapi::OfferingDoc), (status = 400, description = "Bad Request", body = crate::openapi::ErrorBody)))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateOfferingInput>,
) -> Result<(StatusCode, Json<offering::Model>), JsonApiError> {
    Ok((StatusCode::CREATED, Json(offering_service::create_offering(&state.db, input).await?)))
}

#[utoipa::path(get, path = "/api/services/{id}", tag = "services", params(("id" = i32, Path, description = "Service id")), responses((status = 200, description = "Service or null", body = crate::openapi::OfferingDoc)))]
pub async fn get_one(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Option<offering::Model>>, JsonApiError> {
    Ok(Json(offering_service::get_offering(&state.db, id).await?))
}

#[utoipa::path(put, path = "/api/services/{id}", tag = "services", params(("id" = i32, Path, description = "Service id")), request_body = crate::openapi::UpdateOfferingRequest, responses((status = 200, description = "Updated", body = crate::openapi::OfferingDoc), (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateOfferingInput>,
) -> Result<Json<offering::Model>, JsonApiError> {
    Ok(Json(offering_service::update_offering(&state.db, id, input).await?))
}

#[utoipa::path(delete, path = "/api/services/{id}", tag = "services", params(("id" = i32, Path, description = "Service id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)))]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    offering_service::delete_offering(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
