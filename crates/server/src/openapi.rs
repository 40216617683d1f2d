//! OpenAPI document served at `/api-docs/openapi.json`.
//!
//! Schemas here are documentation mirrors of the JSON bodies; the handlers
//! (de)serialize the service input types and entity models directly.
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub timestamp: String }

#[derive(ToSchema)]
pub struct ErrorBody { pub error: String, pub message: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub username: String, pub password: String }

#[derive(ToSchema)]
pub struct SessionDoc { pub user: UserDoc, pub token: Option<String> }

#[derive(ToSchema)]
pub struct UserDoc {
    pub id: i32,
    pub username: String,
    /// `admin` or `user`
    pub role: String,
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct CreateUserRequest { pub username: String, pub password: String, pub role: Option<String> }

#[derive(ToSchema)]
pub struct UpdateUserRequest { pub username: Option<String>, pub password: Option<String>, pub role: Option<String> }

#[derive(ToSchema)]
pub struct PostDoc {
    pub id: i32,
    pub title: String,
    pub content: String,
    /// Category id rendered as a string
    pub category: String,
    pub date: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct CreatePostRequest { pub title: String, pub content: String, pub category: String, pub date: Option<String> }

#[derive(ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

#[derive(ToSchema)]
pub struct CategoryDoc { pub id: i32, pub name: String, pub created_at: String }

#[derive(ToSchema)]
pub struct CreateCategoryRequest { pub name: String }

#[derive(ToSchema)]
pub struct OfferingDoc {
    pub id: i32,
    pub name: String,
    pub features: Vec<String>,
    pub whatsapp_link: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct CreateOfferingRequest { pub name: String, pub features: Vec<String>, pub whatsapp_link: String }

#[derive(ToSchema)]
pub struct UpdateOfferingRequest {
    pub name: Option<String>,
    pub features: Option<Vec<String>>,
    pub whatsapp_link: Option<String>,
}

#[derive(ToSchema)]
pub struct TeamMemberDoc {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct CreateTeamMemberRequest {
    pub name: String,
    pub position: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// `null` clears `description`/`image_url`; omitted fields are kept.
#[derive(ToSchema)]
pub struct UpdateTeamMemberRequest {
    pub name: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(ToSchema)]
pub struct CompanyProfileDoc {
    pub id: i32,
    pub about_us: String,
    pub vision: String,
    pub mission: String,
    pub contact_info: String,
    pub documentation_images: Vec<String>,
    pub proposal_url: Option<String>,
    pub legal_doc_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Omitted fields are kept; `null` clears `proposal_url`/`legal_doc_url`.
#[derive(ToSchema)]
pub struct UpdateCompanyProfileRequest {
    pub about_us: Option<String>,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub contact_info: Option<String>,
    pub documentation_images: Option<Vec<String>>,
    pub proposal_url: Option<String>,
    pub legal_doc_url: Option<String>,
}

#[derive(ToSchema)]
pub struct RunningTextDoc { pub id: i32, pub content: String, pub is_active: bool, pub created_at: String, pub updated_at: String }

/// `is_active` defaults to true.
#[derive(ToSchema)]
pub struct CreateRunningTextRequest { pub content: String, pub is_active: Option<bool> }

#[derive(ToSchema)]
pub struct UpdateRunningTextRequest { pub content: Option<String>, pub is_active: Option<bool> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::auth::session,
        crate::routes::users::list,
        crate::routes::users::create,
        crate::routes::users::get_one,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::posts::list,
        crate::routes::posts::recent,
        crate::routes::posts::by_category,
        crate::routes::posts::create,
        crate::routes::posts::get_one,
        crate::routes::posts::update,
        crate::routes::posts::delete,
        crate::routes::categories::list,
        crate::routes::categories::create,
        crate::routes::categories::get_one,
        crate::routes::categories::delete,
        crate::routes::offerings::list,
        crate::routes::offerings::create,
        crate::routes::offerings::get_one,
        crate::routes::offerings::update,
        crate::routes::offerings::delete,
        crate::routes::team_members::list,
        crate::routes::team_members::create,
        crate::routes::team_members::update,
        crate::routes::team_members::delete,
        crate::routes::company_profile::get_profile,
        crate::routes::company_profile::update_profile,
        crate::routes::running_texts::list,
        crate::routes::running_texts::active,
        crate::routes::running_texts::create,
        crate::routes::running_texts::update,
        crate::routes::running_texts::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            LoginRequest,
            SessionDoc,
            UserDoc,
            CreateUserRequest,
            UpdateUserRequest,
            PostDoc,
            CreatePostRequest,
            UpdatePostRequest,
            CategoryDoc,
            CreateCategoryRequest,
            OfferingDoc,
            CreateOfferingRequest,
            UpdateOfferingRequest,
            TeamMemberDoc,
            CreateTeamMemberRequest,
            UpdateTeamMemberRequest,
            CompanyProfileDoc,
            UpdateCompanyProfileRequest,
            RunningTextDoc,
            CreateRunningTextRequest,
            UpdateRunningTextRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "users"),
        (name = "posts"),
        (name = "categories"),
        (name = "services"),
        (name = "team"),
        (name = "company"),
        (name = "running-text")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_rule_endpoints() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        for p in ["/api/running-texts/active", "/api/categories/{id}", "/api/company-profile", "/auth/login"] {
            assert!(paths.iter().any(|k| k == p), "missing {p}");
        }
    }
}
