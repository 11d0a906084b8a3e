pub use sea_orm_migration::prelude::*;

mod m20241001_000001_create_members;
mod m20241001_000002_create_lookup_tables;
mod m20241001_000003_seed_lookup_values;
mod m20241001_000004_create_age_groups_view;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241001_000001_create_members::Migration),
            Box::new(m20241001_000002_create_lookup_tables::Migration),
            Box::new(m20241001_000003_seed_lookup_values::Migration),
            Box::new(m20241001_000004_create_age_groups_view::Migration),
        ]
    }
}

pub use m20241001_000003_seed_lookup_values::{
    DEFAULT_DISABILITIES, DEFAULT_GENDERS, DEFAULT_PAYMENT_METHODS,
};
