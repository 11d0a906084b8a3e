use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One bucket of a grouped count. `label` is `None` for rows whose
/// grouping column is NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sea_orm::FromQueryResult)]
pub struct GroupCount {
    pub label: Option<String>,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportSummary {
    pub total: i64,
    pub gender: Vec<GroupCount>,
    pub age_group: Vec<GroupCount>,
    pub disability: Vec<GroupCount>,
    /// Excludes members without a district.
    pub district: Vec<GroupCount>,
    pub payment_method: Vec<GroupCount>,
}

impl ReportSummary {
    pub fn count_for(groups: &[GroupCount], label: &str) -> Option<i64> {
        groups
            .iter()
            .find(|g| g.label.as_deref() == Some(label))
            .map(|g| g.count)
    }

    pub fn sum(groups: &[GroupCount]) -> i64 {
        groups.iter().map(|g| g.count).sum()
    }
}
