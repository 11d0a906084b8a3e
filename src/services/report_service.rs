use crate::entities::{age_group_entity as age_groups, member_entity as members};
use crate::error::AppResult;
use crate::models::*;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};

#[derive(Clone)]
pub struct ReportService {
    pool: DatabaseConnection,
}

impl ReportService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Registry-wide counts. Reports ignore list filters.
    pub async fn get_reports(&self) -> AppResult<ReportSummary> {
        let total = members::Entity::find().count(&self.pool).await? as i64;

        let gender = self
            .grouped_counts(members::Entity::find(), members::Column::Gender)
            .await?;

        let age_group = self
            .grouped_counts(age_groups::Entity::find(), age_groups::Column::AgeGroup)
            .await?;

        let disability = self
            .grouped_counts(members::Entity::find(), members::Column::Disability)
            .await?;

        // members without a district are not a district
        let district = self
            .grouped_counts(
                members::Entity::find()
                    .filter(members::Column::District.is_not_null())
                    .filter(members::Column::District.ne("")),
                members::Column::District,
            )
            .await?;

        let payment_method = self
            .grouped_counts(members::Entity::find(), members::Column::PaymentMethod)
            .await?;

        Ok(ReportSummary {
            total,
            gender,
            age_group,
            disability,
            district,
            payment_method,
        })
    }

    async fn grouped_counts<E, C>(&self, select: Select<E>, column: C) -> AppResult<Vec<GroupCount>>
    where
        E: EntityTrait,
        C: ColumnTrait + Copy,
    {
        let rows = select
            .select_only()
            .column_as(column, "label")
            .column_as(Expr::val(1).count(), "count")
            .group_by(column)
            .order_by_asc(column)
            .into_model::<GroupCount>()
            .all(&self.pool)
            .await?;
        Ok(rows)
    }
}
