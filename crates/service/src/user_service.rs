use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use tracing::{error, info, instrument};

use models::user::{self, Role};
use crate::auth::hash_password;
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserInput {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

fn hash(password: &str) -> Result<String, ServiceError> {
    hash_password(password).map_err(|e| ServiceError::Internal(e.to_string()))
}

/// Create a user; the password is stored as an argon2 hash.
#[instrument(skip(db, input), fields(username = %input.username))]
pub async fn create_user(db: &DatabaseConnection, input: CreateUserInput) -> Result<user::Model, ServiceError> {
    user::validate_password(&input.password)?;
    let password_hash = hash(&input.password)?;
    let created = user::create(db, &input.username, password_hash, input.role).await.map_err(|e| {
        error!(error = %e, "failed to create user");
        e
    })?;
    info!(user_id = created.id, "user_created");
    Ok(created)
}

/// All users in insertion order.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>, ServiceError> {
    Ok(user::Entity::find().order_by_asc(user::Column::Id).all(db).await?)
}

pub async fn get_user(db: &DatabaseConnection, id: i32) -> Result<Option<user::Model>, ServiceError> {
    Ok(user::Entity::find_by_id(id).one(db).await?)
}

/// Apply the provided fields; a new password is re-hashed.
#[instrument(skip(db, input))]
pub async fn update_user(db: &DatabaseConnection, id: i32, input: UpdateUserInput) -> Result<user::Model, ServiceError> {
    let existing = user::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("user", id))?;
    if input.username.is_none() && input.password.is_none() && input.role.is_none() {
        return Ok(existing);
    }
    let mut am: user::ActiveModel = existing.into();
    if let Some(username) = input.username {
        user::validate_username(&username)?;
        am.username = Set(username);
    }
    if let Some(password) = input.password {
        user::validate_password(&password)?;
        am.password = Set(hash(&password)?);
    }
    if let Some(role) = input.role {
        am.role = Set(role);
    }
    let updated = am.update(db).await.map_err(|e| {
        error!(user_id = id, error = %e, "failed to update user");
        ServiceError::from(e)
    })?;
    Ok(updated)
}

pub async fn delete_user(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = user::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("user", id));
    }
    info!(user_id = id, "user_deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn input(username: &str) -> CreateUserInput {
        CreateUserInput { username: username.into(), password: "secret1".into(), role: Role::User }
    }

    #[tokio::test]
    async fn user_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let u = create_user(&db, input("alice")).await?;
        assert_eq!(u.username, "alice");
        assert_eq!(u.role, Role::User);
        assert!(u.password.starts_with("$argon2"));

        let found = get_user(&db, u.id).await?.unwrap();
        assert_eq!(found.id, u.id);

        let updated = update_user(&db, u.id, UpdateUserInput { role: Some(Role::Admin), ..Default::default() }).await?;
        assert_eq!(updated.role, Role::Admin);
        assert_eq!(updated.username, "alice");
        assert_eq!(updated.password, u.password);

        let rehashed = update_user(&db, u.id, UpdateUserInput { password: Some("another1".into()), ..Default::default() }).await?;
        assert_ne!(rehashed.password, u.password);

        create_user(&db, input("bob")).await?;
        let names: Vec<_> = list_users(&db).await?.into_iter().map(|u| u.username).collect();
        assert_eq!(names, vec!["alice", "bob"]);

        delete_user(&db, u.id).await?;
        assert!(get_user(&db, u.id).await?.is_none());
        assert!(matches!(delete_user(&db, u.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn user_validation_and_conflicts() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(matches!(create_user(&db, input("al")).await, Err(ServiceError::Validation(_))));
        let mut short = input("carol");
        short.password = "12345".into();
        assert!(matches!(create_user(&db, short).await, Err(ServiceError::Validation(_))));

        create_user(&db, input("carol")).await?;
        assert!(matches!(create_user(&db, input("carol")).await, Err(ServiceError::Conflict(_))));
        assert!(matches!(
            update_user(&db, 999, UpdateUserInput::default()).await,
            Err(ServiceError::NotFound(_))
        ));
        Ok(())
    }
}
