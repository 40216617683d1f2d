#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh, migrated in-memory database for the calling test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}
