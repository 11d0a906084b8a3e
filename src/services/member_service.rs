use crate::database::{IdOrder, MEMBER_READ_QUERY, build_filtered_query, member_by_id_query};
use crate::entities::member_entity as members;
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

#[derive(Clone)]
pub struct MemberService {
    pool: DatabaseConnection,
}

impl MemberService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Members matching every supplied filter, newest first.
    pub async fn list_members(&self, filter: &MemberFilter) -> AppResult<Vec<MemberResponse>> {
        self.query_members(filter, IdOrder::Descending).await
    }

    /// Same selection as `list_members`, in registration order.
    pub async fn export_members(&self, filter: &MemberFilter) -> AppResult<Vec<MemberResponse>> {
        self.query_members(filter, IdOrder::Ascending).await
    }

    async fn query_members(
        &self,
        filter: &MemberFilter,
        order: IdOrder,
    ) -> AppResult<Vec<MemberResponse>> {
        let statement = build_filtered_query(MEMBER_READ_QUERY, filter)
            .order_by_id(order)
            .into_statement();

        let models = members::Entity::find()
            .from_raw_sql(statement)
            .all(&self.pool)
            .await?;

        Ok(models.into_iter().map(MemberResponse::from).collect())
    }

    pub async fn create_member(&self, request: MemberRequest) -> AppResult<MemberResponse> {
        let model = active_model_from(request).insert(&self.pool).await?;
        log::info!("Member {} registered", model.id);
        Ok(model.into())
    }

    pub async fn get_member(&self, id: i32) -> AppResult<MemberResponse> {
        let model = members::Entity::find()
            .from_raw_sql(member_by_id_query(id).into_statement())
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {id} not found")))?;
        Ok(model.into())
    }

    /// Overwrites every field of the member. An unknown id is not an error:
    /// nothing is written and the call succeeds.
    pub async fn update_member(&self, id: i32, request: MemberRequest) -> AppResult<()> {
        let result = members::Entity::update_many()
            .set(active_model_from(request))
            .filter(members::Column::Id.eq(id))
            .exec(&self.pool)
            .await?;

        if result.rows_affected == 0 {
            log::warn!("Update of member {id} matched no row");
        } else {
            log::info!("Member {id} updated");
        }
        Ok(())
    }

    /// Hard delete. An unknown id is not an error.
    pub async fn delete_member(&self, id: i32) -> AppResult<()> {
        let result = members::Entity::delete_by_id(id).exec(&self.pool).await?;

        if result.rows_affected == 0 {
            log::warn!("Delete of member {id} matched no row");
        } else {
            log::info!("Member {id} deleted");
        }
        Ok(())
    }
}

// `id` stays NotSet: it is assigned by the store on insert and never
// rewritten on update.
fn active_model_from(request: MemberRequest) -> members::ActiveModel {
    members::ActiveModel {
        full_name: Set(request.full_name),
        age: Set(request.age),
        phone_number: Set(request.phone_number),
        disability: Set(request.disability),
        organization_name: Set(request.organization_name),
        payment_method: Set(request.payment_method),
        receiver_name: Set(request.receiver_name),
        gender: Set(request.gender),
        address: Set(request.address),
        ward: Set(request.ward),
        district: Set(request.district),
        village: Set(request.village),
        ..Default::default()
    }
}
