use sea_orm_migration::prelude::*;

use crate::m20241001_000002_create_lookup_tables::{DisabilityTypes, GenderTypes, PaymentMethods};

pub const DEFAULT_GENDERS: [&str; 3] = ["Male", "Female", "Other"];
pub const DEFAULT_DISABILITIES: [&str; 5] = ["None", "Physical", "Vision", "Hearing", "Mental"];
pub const DEFAULT_PAYMENT_METHODS: [&str; 3] = ["Cash", "Bank Transfer", "Mobile Money"];

/// Insert-if-absent, so running against a database that already carries
/// the vocabulary (or part of it) leaves existing rows alone.
fn seed<T>(table: T, column: T, values: &[&str]) -> InsertStatement
where
    T: Iden + Copy + 'static,
{
    let mut insert = Query::insert();
    insert.into_table(table).columns([column]);
    for value in values {
        insert.values_panic([(*value).into()]);
    }
    insert
        .on_conflict(OnConflict::column(column).do_nothing().to_owned())
        .to_owned()
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(seed(GenderTypes::Table, GenderTypes::Gender, &DEFAULT_GENDERS))
            .await?;
        manager
            .exec_stmt(seed(
                DisabilityTypes::Table,
                DisabilityTypes::Disability,
                &DEFAULT_DISABILITIES,
            ))
            .await?;
        manager
            .exec_stmt(seed(
                PaymentMethods::Table,
                PaymentMethods::Method,
                &DEFAULT_PAYMENT_METHODS,
            ))
            .await?;
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // seeded rows go away with the tables
        Ok(())
    }
}
