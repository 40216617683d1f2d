use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// At most one banner row may be active. Partial unique indexes are not expressible
/// through the builder, but the statement is valid on both Postgres and SQLite.
const CREATE_ACTIVE_RUNNING_TEXT_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS uniq_running_text_active ON running_text (is_active) WHERE is_active";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Posts: lookups by category label and listings by date
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_posts_category")
                    .table(Posts::Table)
                    .col(Posts::Category)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_posts_date")
                    .table(Posts::Table)
                    .col(Posts::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(CREATE_ACTIVE_RUNNING_TEXT_INDEX)
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_running_text_active").table(RunningText::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_posts_date").table(Posts::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_posts_category").table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts { Table, Category, Date }

#[derive(DeriveIden)]
enum RunningText { Table }
