use sea_orm_migration::prelude::*;

// Column names are fixed by the existing MamaNet database file.
#[derive(DeriveIden)]
enum Members {
    #[sea_orm(iden = "Members")]
    Table,
    #[sea_orm(iden = "ID")]
    Id,
    #[sea_orm(iden = "FullName")]
    FullName,
    #[sea_orm(iden = "Age")]
    Age,
    #[sea_orm(iden = "PhoneNumber")]
    PhoneNumber,
    #[sea_orm(iden = "Disability")]
    Disability,
    #[sea_orm(iden = "OrganizationName")]
    OrganizationName,
    #[sea_orm(iden = "PaymentMethod")]
    PaymentMethod,
    #[sea_orm(iden = "ReceiverName")]
    ReceiverName,
    #[sea_orm(iden = "Gender")]
    Gender,
    #[sea_orm(iden = "Address")]
    Address,
    #[sea_orm(iden = "Ward")]
    Ward,
    #[sea_orm(iden = "District")]
    District,
    #[sea_orm(iden = "Village")]
    Village,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Members::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Members::FullName).text().null())
                    .col(ColumnDef::new(Members::Age).integer().null())
                    .col(ColumnDef::new(Members::PhoneNumber).text().null())
                    .col(ColumnDef::new(Members::Disability).text().null())
                    .col(ColumnDef::new(Members::OrganizationName).text().null())
                    .col(ColumnDef::new(Members::PaymentMethod).text().null())
                    .col(ColumnDef::new(Members::ReceiverName).text().null())
                    .col(ColumnDef::new(Members::Gender).text().null())
                    .col(ColumnDef::new(Members::Address).text().null())
                    .col(ColumnDef::new(Members::Ward).text().null())
                    .col(ColumnDef::new(Members::District).text().null())
                    .col(ColumnDef::new(Members::Village).text().null())
                    .to_owned(),
            )
            .await?;

        // district and payment method are the list filters
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_members_district")
                    .table(Members::Table)
                    .col(Members::District)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_members_payment_method")
                    .table(Members::Table)
                    .col(Members::PaymentMethod)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Members::Table).to_owned())
            .await?;
        Ok(())
    }
}
