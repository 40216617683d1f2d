use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::types::validate_required;

/// Label written into `posts.category` when the referenced category is deleted.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The string a post stores to point at a category: its id, rendered as text.
pub fn reference_key(id: i32) -> String {
    id.to_string()
}

impl Model {
    pub fn reference_key(&self) -> String { reference_key(self.id) }
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> { validate_required("category name", name) }

pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
