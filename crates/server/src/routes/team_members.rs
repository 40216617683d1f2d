use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use models::team_member;
use service::team_service::{self, CreateTeamMemberInput, UpdateTeamMemberInput};

use super::ServerState;
use crate::errors::JsonApiError;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/team-members", get(list).post(create))
        .route("/api/team-members/:id", put(update).delete(delete))
}

#[utoipa::path(get, path = "/api/team-members", tag = "team", responses((status = 200, description = "All team members", body = [crate::openapi::TeamMemberDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<team_member::Model>>, JsonApiError> {
    Ok(Json(team_service::list_team_members(&state.db).await?))
}

#[utoipa::path(post, path = "/api/team-members", tag = "team", request_body = crate::openapi::CreateTeamMemberRequest, responses((status = 201, description = "Created", body = crate::openapi::TeamMemberDoc), (status = 400, description = "Bad Request", body = crate::openapi::ErrorBody)))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateTeamMemberInput>,
) -> Result<(StatusCode, Json<team_member::Model>), JsonApiError> {
    Ok((StatusCode::CREATED, Json(team_service::create_team_member(&state.db, input).await?)))
}

#[utoipa::path(put, path = "/api/team-members/{id}", tag = "team", params(("id" = i32, Path, description = "Team member id")), request_body = crate::openapi::UpdateTeamMemberRequest, responses((status = 200, description = "Updated", body = crate::openapi::TeamMemberDoc), (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateTeamMemberInput>,
) -> Result<Json<team_member::Model>, JsonApiError> {
    Ok(Json(team_service::update_team_member(&state.db, id, input).await?))
}

#[utoipa::path(delete, path = "/api/team-members/{id}", tag = "team", params(("id" = i32, Path, description = "Team member id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)))]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    team_service::delete_team_member(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
