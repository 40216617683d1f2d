use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set};
use serde::Deserialize;
use tracing::{error, info, instrument};

use models::post;
use crate::errors::ServiceError;

/// Number of posts returned by `recent_posts` when no limit is given.
pub const DEFAULT_RECENT_LIMIT: u64 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

fn newest_first(q: Select<post::Entity>) -> Select<post::Entity> {
    q.order_by_desc(post::Column::Date).order_by_desc(post::Column::Id)
}

#[instrument(skip(db, input), fields(category = %input.category))]
pub async fn create_post(db: &DatabaseConnection, input: CreatePostInput) -> Result<post::Model, ServiceError> {
    let created = post::create(db, &input.title, &input.content, &input.category, input.date)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to create post");
            e
        })?;
    info!(post_id = created.id, "post_created");
    Ok(created)
}

/// All posts, newest first.
pub async fn list_posts(db: &DatabaseConnection) -> Result<Vec<post::Model>, ServiceError> {
    Ok(newest_first(post::Entity::find()).all(db).await?)
}

pub async fn get_post(db: &DatabaseConnection, id: i32) -> Result<Option<post::Model>, ServiceError> {
    Ok(post::Entity::find_by_id(id).one(db).await?)
}

pub async fn recent_posts(db: &DatabaseConnection, limit: Option<u64>) -> Result<Vec<post::Model>, ServiceError> {
    let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    Ok(newest_first(post::Entity::find()).limit(limit).all(db).await?)
}

/// Posts whose category string matches exactly, newest first.
pub async fn posts_by_category(db: &DatabaseConnection, category: &str) -> Result<Vec<post::Model>, ServiceError> {
    Ok(newest_first(post::Entity::find().filter(post::Column::Category.eq(category))).all(db).await?)
}

#[instrument(skip(db, input))]
pub async fn update_post(db: &DatabaseConnection, id: i32, input: UpdatePostInput) -> Result<post::Model, ServiceError> {
    let mut am: post::ActiveModel = post::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("post", id))?
        .into();
    if let Some(title) = input.title {
        post::validate_title(&title)?;
        am.title = Set(title);
    }
    if let Some(content) = input.content {
        post::validate_content(&content)?;
        am.content = Set(content);
    }
    if let Some(category) = input.category {
        post::validate_category(&category)?;
        am.category = Set(category);
    }
    if let Some(date) = input.date {
        am.date = Set(date.into());
    }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| {
        error!(post_id = id, error = %e, "failed to update post");
        ServiceError::from(e)
    })?;
    Ok(updated)
}

pub async fn delete_post(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = post::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("post", id));
    }
    info!(post_id = id, "post_deleted");
    Ok(())
}
