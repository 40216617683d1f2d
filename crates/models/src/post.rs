use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::types::validate_required;

/// Blog post. `category` holds a category reference string (see `category::reference_key`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text")]
    pub category: String,
    pub date: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<(), errors::ModelError> { validate_required("title", title) }
pub fn validate_content(content: &str) -> Result<(), errors::ModelError> { validate_required("content", content) }
pub fn validate_category(category: &str) -> Result<(), errors::ModelError> { validate_required("category", category) }

/// Insert a post; `date` defaults to now.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    title: &str,
    content: &str,
    category: &str,
    date: Option<DateTime<Utc>>,
) -> Result<Model, errors::ModelError> {
    validate_title(title)?;
    validate_content(content)?;
    validate_category(category)?;
    let now = Utc::now();
    let am = ActiveModel {
        title: Set(title.to_string()),
        content: Set(content.to_string()),
        category: Set(category.to_string()),
        date: Set(date.unwrap_or(now).into()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
