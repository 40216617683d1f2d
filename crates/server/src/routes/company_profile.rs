use axum::{extract::State, routing::get, Json, Router};

use models::company_profile;
use service::company_profile_service::{self, UpdateCompanyProfileInput};

use super::ServerState;
use crate::errors::JsonApiError;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/company-profile", get(get_profile).put(update_profile))
}

#[utoipa::path(get, path = "/api/company-profile", tag = "company", responses((status = 200, description = "Profile, or null before the first update", body = crate::openapi::CompanyProfileDoc)))]
pub async fn get_profile(State(state): State<ServerState>) -> Result<Json<Option<company_profile::Model>>, JsonApiError> {
    Ok(Json(company_profile_service::get_company_profile(&state.db).await?))
}

/// Partial update; creates the profile on first call.
#[utoipa::path(put, path = "/api/company-profile", tag = "company", request_body = crate::openapi::UpdateCompanyProfileRequest, responses((status = 200, description = "Saved profile", body = crate::openapi::CompanyProfileDoc), (status = 400, description = "Bad Request", body = crate::openapi::ErrorBody)))]
pub async fn update_profile(
    State(state): State<ServerState>,
    Json(input): Json<UpdateCompanyProfileInput>,
) -> Result<Json<company_profile::Model>, JsonApiError> {
    Ok(Json(company_profile_service::update_company_profile(&state.db, input).await?))
}
