use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use tracing::{error, info, instrument};

use models::team_member;
use models::types::{double_option, validate_required};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamMemberInput {
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// `description`/`image_url`: absent leaves the value, `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeamMemberInput {
    pub name: Option<String>,
    pub position: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
}

pub async fn list_team_members(db: &DatabaseConnection) -> Result<Vec<team_member::Model>, ServiceError> {
    Ok(team_member::Entity::find().order_by_asc(team_member::Column::Id).all(db).await?)
}

#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_team_member(db: &DatabaseConnection, input: CreateTeamMemberInput) -> Result<team_member::Model, ServiceError> {
    let created = team_member::create(db, &input.name, &input.position, input.description, input.image_url)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to create team member");
            e
        })?;
    info!(member_id = created.id, "team_member_created");
    Ok(created)
}

#[instrument(skip(db, input))]
pub async fn update_team_member(db: &DatabaseConnection, id: i32, input: UpdateTeamMemberInput) -> Result<team_member::Model, ServiceError> {
    let existing = team_member::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("team member", id))?;
    let mut am: team_member::ActiveModel = existing.clone().into();
    let mut changed = false;
    if let Some(name) = input.name {
        validate_required("name", &name)?;
        am.name = Set(name);
        changed = true;
    }
    if let Some(position) = input.position {
        validate_required("position", &position)?;
        am.position = Set(position);
        changed = true;
    }
    if let Some(description) = input.description {
        am.description = Set(description);
        changed = true;
    }
    if let Some(image_url) = input.image_url {
        team_member::validate_image_url(image_url.as_deref())?;
        am.image_url = Set(image_url);
        changed = true;
    }
    // no updated_at in schema
    if !changed {
        return Ok(existing);
    }
    let updated = am.update(db).await.map_err(|e| {
        error!(member_id = id, error = %e, "failed to update team member");
        ServiceError::from(e)
    })?;
    Ok(updated)
}

pub async fn delete_team_member(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = team_member::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("team member", id));
    }
    info!(member_id = id, "team_member_deleted");
    Ok(())
}
