use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::StringList;

/// Primary key of the one and only company profile row.
pub const SINGLETON_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub about_us: String,
    #[sea_orm(column_type = "Text")]
    pub vision: String,
    #[sea_orm(column_type = "Text")]
    pub mission: String,
    #[sea_orm(column_type = "Text")]
    pub contact_info: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub documentation_images: StringList,
    #[sea_orm(column_type = "Text", nullable)]
    pub proposal_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub legal_doc_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
