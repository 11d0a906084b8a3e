use sea_orm_migration::prelude::*;

#[derive(DeriveIden, Clone, Copy)]
pub(crate) enum GenderTypes {
    #[sea_orm(iden = "GenderTypes")]
    Table,
    #[sea_orm(iden = "Gender")]
    Gender,
}

#[derive(DeriveIden, Clone, Copy)]
pub(crate) enum DisabilityTypes {
    #[sea_orm(iden = "DisabilityTypes")]
    Table,
    #[sea_orm(iden = "Disability")]
    Disability,
}

#[derive(DeriveIden, Clone, Copy)]
pub(crate) enum PaymentMethods {
    #[sea_orm(iden = "PaymentMethods")]
    Table,
    #[sea_orm(iden = "Method")]
    Method,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GenderTypes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GenderTypes::Gender).text().primary_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DisabilityTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DisabilityTypes::Disability)
                            .text()
                            .primary_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PaymentMethods::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PaymentMethods::Method).text().primary_key())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentMethods::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DisabilityTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GenderTypes::Table).to_owned())
            .await?;
        Ok(())
    }
}
