//! A service the business offers (table `services`).
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::types::{validate_http_url, validate_required, StringList};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub features: StringList,
    #[sea_orm(column_type = "Text")]
    pub whatsapp_link: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> { validate_required("service name", name) }

pub fn validate_features(features: &[String]) -> Result<(), errors::ModelError> {
    if features.is_empty() {
        return Err(errors::ModelError::Validation("at least one feature is required".into()));
    }
    Ok(())
}

pub fn validate_whatsapp_link(link: &str) -> Result<(), errors::ModelError> { validate_http_url("whatsapp_link", link) }

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, features: Vec<String>, whatsapp_link: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_features(&features)?;
    validate_whatsapp_link(whatsapp_link)?;
    let now = Utc::now();
    let am = ActiveModel {
        name: Set(name.to_string()),
        features: Set(StringList(features)),
        whatsapp_link: Set(whatsapp_link.to_string()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
