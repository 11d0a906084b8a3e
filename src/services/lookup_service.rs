use crate::entities::{
    disability_type_entity as disability_types, gender_type_entity as gender_types,
    payment_method_entity as payment_methods,
};
use crate::error::AppResult;
use crate::models::LookupResponse;
use sea_orm::sea_query::Expr;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

#[derive(Clone)]
pub struct LookupService {
    pool: DatabaseConnection,
}

impl LookupService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Lookup values in the order they were seeded.
    pub async fn get_lookups(&self) -> AppResult<LookupResponse> {
        let genders = gender_types::Entity::find()
            .order_by_asc(Expr::cust("rowid"))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|m| m.gender)
            .collect();

        let disabilities = disability_types::Entity::find()
            .order_by_asc(Expr::cust("rowid"))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|m| m.disability)
            .collect();

        let payment_methods = payment_methods::Entity::find()
            .order_by_asc(Expr::cust("rowid"))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|m| m.method)
            .collect();

        Ok(LookupResponse {
            genders,
            disabilities,
            payment_methods,
        })
    }
}
