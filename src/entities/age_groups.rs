use sea_orm::entity::prelude::*;

/// The `AgeGroups` view, mapped only as far as the age-bracket report reads
/// it. The view also carries every other `Members` column; member reads go
/// through `members` instead.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "AgeGroups")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "ID")]
    pub id: i32,
    #[sea_orm(column_name = "AgeGroup")]
    pub age_group: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
