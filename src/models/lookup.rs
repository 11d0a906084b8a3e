use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Choice lists for the member form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LookupResponse {
    pub genders: Vec<String>,
    pub disabilities: Vec<String>,
    pub payment_methods: Vec<String>,
}
