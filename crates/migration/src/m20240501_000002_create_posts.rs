//! Create `posts` table.
//!
//! `category` is a plain string reference (category id rendered as text), not a FK.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(pk_auto(Posts::Id))
                    .col(text(Posts::Title))
                    .col(text(Posts::Content))
                    .col(text(Posts::Category))
                    .col(timestamp_with_time_zone(Posts::Date))
                    .col(timestamp_with_time_zone(Posts::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Posts::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Posts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Posts { Table, Id, Title, Content, Category, Date, CreatedAt, UpdatedAt }
