use sea_orm_migration::prelude::*;

const CREATE_VIEW: &str = r#"
CREATE VIEW AgeGroups AS
SELECT
    ID,
    FullName,
    CASE WHEN typeof(Age) = 'integer' THEN Age END AS Age,
    PhoneNumber,
    Disability,
    OrganizationName,
    PaymentMethod,
    ReceiverName,
    Gender,
    Address,
    Ward,
    District,
    Village,
    CASE
        WHEN typeof(Age) <> 'integer' THEN 'Unknown'
        WHEN Age < 18 THEN 'Under 18'
        WHEN Age BETWEEN 18 AND 35 THEN '18-35'
        WHEN Age BETWEEN 36 AND 59 THEN '36-59'
        WHEN Age >= 60 THEN '60+'
        ELSE 'Unknown'
    END AS AgeGroup
FROM Members
"#;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP VIEW IF EXISTS AgeGroups").await?;
        db.execute_unprepared(CREATE_VIEW).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP VIEW IF EXISTS AgeGroups")
            .await?;
        Ok(())
    }
}
