use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::types::validate_required;

/// Announcement banner entry. At most one row is active at a time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "running_text")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_content(content: &str) -> Result<(), errors::ModelError> { validate_required("content", content) }

/// Plain insert. Callers enforcing the single-active rule must clear other rows first.
pub async fn create<C: ConnectionTrait>(db: &C, content: &str, is_active: bool) -> Result<Model, errors::ModelError> {
    validate_content(content)?;
    let now = Utc::now();
    let am = ActiveModel {
        content: Set(content.to_string()),
        is_active: Set(is_active),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
