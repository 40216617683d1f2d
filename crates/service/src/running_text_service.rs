//! Running text (announcement banner). Activating a row first deactivates
//! every other active row, inside the same transaction as the write.
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, prelude::DateTimeWithTimeZone, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

use models::running_text;
use crate::errors::ServiceError;

fn default_active() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRunningTextInput {
    pub content: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRunningTextInput {
    pub content: Option<String>,
    pub is_active: Option<bool>,
}

/// Deactivate every active row except `keep`, refreshing `updated_at`. Returns rows touched.
async fn deactivate_others<C: ConnectionTrait>(
    db: &C,
    keep: Option<i32>,
    now: DateTimeWithTimeZone,
) -> Result<u64, ServiceError> {
    let mut sweep = running_text::Entity::update_many()
        .col_expr(running_text::Column::IsActive, Expr::value(false))
        .col_expr(running_text::Column::UpdatedAt, Expr::value(now))
        .filter(running_text::Column::IsActive.eq(true));
    if let Some(id) = keep {
        sweep = sweep.filter(running_text::Column::Id.ne(id));
    }
    let res = sweep.exec(db).await?;
    debug!(deactivated = res.rows_affected, "running_text_sweep");
    Ok(res.rows_affected)
}

#[instrument(skip(db, input), fields(is_active = input.is_active))]
pub async fn create_running_text(db: &DatabaseConnection, input: CreateRunningTextInput) -> Result<running_text::Model, ServiceError> {
    running_text::validate_content(&input.content)?;
    let now = Utc::now();
    let txn = db.begin().await?;
    if input.is_active {
        deactivate_others(&txn, None, now.into()).await?;
    }
    let am = running_text::ActiveModel {
        content: Set(input.content),
        is_active: Set(input.is_active),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    let created = am.insert(&txn).await.map_err(|e| {
        error!(error = %e, "failed to create running text");
        ServiceError::from(e)
    })?;
    txn.commit().await?;
    info!(running_text_id = created.id, "running_text_created");
    Ok(created)
}

/// Any one active row. Never repairs a state with several active rows.
pub async fn get_active_running_text(db: &DatabaseConnection) -> Result<Option<running_text::Model>, ServiceError> {
    Ok(running_text::Entity::find()
        .filter(running_text::Column::IsActive.eq(true))
        .one(db)
        .await?)
}

/// All rows, newest first.
pub async fn list_running_texts(db: &DatabaseConnection) -> Result<Vec<running_text::Model>, ServiceError> {
    Ok(running_text::Entity::find()
        .order_by_desc(running_text::Column::CreatedAt)
        .order_by_desc(running_text::Column::Id)
        .all(db)
        .await?)
}

/// Apply the provided fields. `is_active: Some(true)` deactivates the others first;
/// a missing id rolls the sweep back.
#[instrument(skip(db, input))]
pub async fn update_running_text(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateRunningTextInput,
) -> Result<running_text::Model, ServiceError> {
    if let Some(content) = &input.content {
        running_text::validate_content(content)?;
    }
    let now = Utc::now();
    let txn = db.begin().await?;
    if input.is_active == Some(true) {
        deactivate_others(&txn, Some(id), now.into()).await?;
    }
    let Some(current) = running_text::Entity::find_by_id(id).one(&txn).await? else {
        txn.rollback().await?;
        return Err(ServiceError::not_found("running text", id));
    };
    let mut am: running_text::ActiveModel = current.into();
    if let Some(content) = input.content {
        am.content = Set(content);
    }
    if let Some(is_active) = input.is_active {
        am.is_active = Set(is_active);
    }
    am.updated_at = Set(now.into());
    let updated = am.update(&txn).await.map_err(|e| {
        error!(running_text_id = id, error = %e, "failed to update running text");
        ServiceError::from(e)
    })?;
    txn.commit().await?;
    Ok(updated)
}

/// Delete a row. Deleting the active row leaves no active row.
pub async fn delete_running_text(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = running_text::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("running text", id));
    }
    info!(running_text_id = id, "running_text_deleted");
    Ok(())
}
