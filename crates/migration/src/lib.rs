//! Migrator registering one migration per table.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240501_000001_create_users;
mod m20240501_000002_create_posts;
mod m20240501_000003_create_categories;
mod m20240501_000004_create_services;
mod m20240501_000005_create_team_members;
mod m20240501_000006_create_company_profile;
mod m20240501_000007_create_running_text;
mod m20240501_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_users::Migration),
            Box::new(m20240501_000002_create_posts::Migration),
            Box::new(m20240501_000003_create_categories::Migration),
            Box::new(m20240501_000004_create_services::Migration),
            Box::new(m20240501_000005_create_team_members::Migration),
            Box::new(m20240501_000006_create_company_profile::Migration),
            Box::new(m20240501_000007_create_running_text::Migration),
            // Indexes should always be applied last
            Box::new(m20240501_000008_add_indexes::Migration),
        ]
    }
}
