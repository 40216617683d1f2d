//! Create `company_profile` table.
//!
//! Singleton: the application only ever reads/writes the row with id = 1, so the
//! primary key is a plain integer rather than a sequence.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyProfile::Table)
                    .if_not_exists()
                    .col(integer(CompanyProfile::Id).primary_key())
                    .col(text(CompanyProfile::AboutUs))
                    .col(text(CompanyProfile::Vision))
                    .col(text(CompanyProfile::Mission))
                    .col(text(CompanyProfile::ContactInfo))
                    .col(json_binary(CompanyProfile::DocumentationImages))
                    .col(text_null(CompanyProfile::ProposalUrl))
                    .col(text_null(CompanyProfile::LegalDocUrl))
                    .col(timestamp_with_time_zone(CompanyProfile::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(CompanyProfile::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CompanyProfile::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CompanyProfile {
    Table,
    Id,
    AboutUs,
    Vision,
    Mission,
    ContactInfo,
    DocumentationImages,
    ProposalUrl,
    LegalDocUrl,
    CreatedAt,
    UpdatedAt,
}
