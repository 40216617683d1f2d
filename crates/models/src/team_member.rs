use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::types::{validate_http_url, validate_required};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team_members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub position: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_image_url(url: Option<&str>) -> Result<(), errors::ModelError> {
    match url {
        Some(u) => validate_http_url("image_url", u),
        None => Ok(()),
    }
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    name: &str,
    position: &str,
    description: Option<String>,
    image_url: Option<String>,
) -> Result<Model, errors::ModelError> {
    validate_required("name", name)?;
    validate_required("position", position)?;
    validate_image_url(image_url.as_deref())?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        position: Set(position.to_string()),
        description: Set(description),
        image_url: Set(image_url),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
