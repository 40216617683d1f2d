//! Create `team_members` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMembers::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamMembers::Id))
                    .col(text(TeamMembers::Name))
                    .col(text(TeamMembers::Position))
                    .col(text_null(TeamMembers::Description))
                    .col(text_null(TeamMembers::ImageUrl))
                    .col(timestamp_with_time_zone(TeamMembers::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TeamMembers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TeamMembers { Table, Id, Name, Position, Description, ImageUrl, CreatedAt }
