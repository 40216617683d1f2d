//! Create `running_text` table (announcement banner entries).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RunningText::Table)
                    .if_not_exists()
                    .col(pk_auto(RunningText::Id))
                    .col(text(RunningText::Content))
                    .col(boolean(RunningText::IsActive).default(true))
                    .col(timestamp_with_time_zone(RunningText::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(RunningText::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RunningText::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum RunningText { Table, Id, Content, IsActive, CreatedAt, UpdatedAt }
