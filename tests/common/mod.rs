#![allow(dead_code)]

use mamanet_registry::config::DatabaseConfig;
use mamanet_registry::database::{DbPool, create_pool, run_migrations};
use mamanet_registry::models::MemberRequest;

/// Fresh in-memory registry with the schema, seeds and view in place. A
/// single pooled connection keeps every statement on the same database.
pub async fn setup_pool() -> DbPool {
    let pool = create_pool(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    })
    .await
    .expect("failed to open in-memory database");
    run_migrations(&pool).await.expect("failed to run migrations");
    pool
}

pub fn member(
    name: &str,
    age: Option<i32>,
    district: Option<&str>,
    payment_method: Option<&str>,
) -> MemberRequest {
    MemberRequest {
        full_name: Some(name.to_string()),
        age,
        phone_number: Some("+255700000000".to_string()),
        disability: Some("None".to_string()),
        organization_name: Some("MamaNet".to_string()),
        payment_method: payment_method.map(str::to_string),
        receiver_name: Some(format!("{name} Receiver")),
        gender: Some("Female".to_string()),
        address: Some("P.O. Box 1".to_string()),
        ward: Some("Msasani".to_string()),
        district: district.map(str::to_string),
        village: Some("Mikocheni".to_string()),
    }
}
