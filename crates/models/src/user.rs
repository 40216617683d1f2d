use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    /// argon2 PHC string; never leaves the process.
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[default]
    #[sea_orm(string_value = "user")]
    User,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_username(username: &str) -> Result<(), errors::ModelError> {
    if username.trim().chars().count() < 3 {
        return Err(errors::ModelError::Validation("username must be at least 3 characters".into()));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), errors::ModelError> {
    if password.chars().count() < 6 {
        return Err(errors::ModelError::Validation("password must be at least 6 characters".into()));
    }
    Ok(())
}

/// Insert a user; `password_hash` must already be hashed.
pub async fn create<C: ConnectionTrait>(db: &C, username: &str, password_hash: String, role: Role) -> Result<Model, errors::ModelError> {
    validate_username(username)?;
    let am = ActiveModel {
        username: Set(username.to_string()),
        password: Set(password_hash),
        role: Set(role),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
