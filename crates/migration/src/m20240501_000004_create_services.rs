//! Create `services` table (offerings shown on the services page).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(pk_auto(Services::Id))
                    .col(text(Services::Name))
                    .col(json_binary(Services::Features))
                    .col(text(Services::WhatsappLink))
                    .col(timestamp_with_time_zone(Services::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Services::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services { Table, Id, Name, Features, WhatsappLink, CreatedAt, UpdatedAt }
