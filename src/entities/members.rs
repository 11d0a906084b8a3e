use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "Members")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id: i32,
    #[sea_orm(column_name = "FullName")]
    pub full_name: Option<String>,
    #[sea_orm(column_name = "Age")]
    pub age: Option<i32>,
    #[sea_orm(column_name = "PhoneNumber")]
    pub phone_number: Option<String>,
    #[sea_orm(column_name = "Disability")]
    pub disability: Option<String>,
    #[sea_orm(column_name = "OrganizationName")]
    pub organization_name: Option<String>,
    #[sea_orm(column_name = "PaymentMethod")]
    pub payment_method: Option<String>,
    #[sea_orm(column_name = "ReceiverName")]
    pub receiver_name: Option<String>,
    #[sea_orm(column_name = "Gender")]
    pub gender: Option<String>,
    #[sea_orm(column_name = "Address")]
    pub address: Option<String>,
    #[sea_orm(column_name = "Ward")]
    pub ward: Option<String>,
    #[sea_orm(column_name = "District")]
    pub district: Option<String>,
    #[sea_orm(column_name = "Village")]
    pub village: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
