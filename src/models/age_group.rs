use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Age bracket derived from a member's age. Never stored on the row; the
/// `AgeGroups` view computes the same buckets in SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum AgeGroup {
    #[serde(rename = "Under 18")]
    Under18,
    #[serde(rename = "18-35")]
    From18To35,
    #[serde(rename = "36-59")]
    From36To59,
    #[serde(rename = "60+")]
    Over60,
    Unknown,
}

impl AgeGroup {
    pub fn from_age(age: Option<i32>) -> Self {
        match age {
            Some(a) if a < 18 => AgeGroup::Under18,
            Some(18..=35) => AgeGroup::From18To35,
            Some(36..=59) => AgeGroup::From36To59,
            Some(_) => AgeGroup::Over60,
            None => AgeGroup::Unknown,
        }
    }

    /// Parses a list filter token. `Unknown` has no token: unrecognized input
    /// means "no age constraint", not "members without an age".
    pub fn from_filter_token(token: &str) -> Option<Self> {
        match token {
            "under18" => Some(AgeGroup::Under18),
            "18-35" => Some(AgeGroup::From18To35),
            "36-59" => Some(AgeGroup::From36To59),
            "60+" => Some(AgeGroup::Over60),
            _ => None,
        }
    }

    /// Range predicate over the `Age` column. These are fixed literals, so
    /// they are inlined into the statement rather than bound.
    pub fn sql_predicate(&self) -> Option<&'static str> {
        match self {
            AgeGroup::Under18 => Some("Age < 18"),
            AgeGroup::From18To35 => Some("Age BETWEEN 18 AND 35"),
            AgeGroup::From36To59 => Some("Age BETWEEN 36 AND 59"),
            AgeGroup::Over60 => Some("Age >= 60"),
            AgeGroup::Unknown => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Under18 => "Under 18",
            AgeGroup::From18To35 => "18-35",
            AgeGroup::From36To59 => "36-59",
            AgeGroup::Over60 => "60+",
            AgeGroup::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(AgeGroup::from_age(Some(0)), AgeGroup::Under18);
        assert_eq!(AgeGroup::from_age(Some(17)), AgeGroup::Under18);
        assert_eq!(AgeGroup::from_age(Some(18)), AgeGroup::From18To35);
        assert_eq!(AgeGroup::from_age(Some(35)), AgeGroup::From18To35);
        assert_eq!(AgeGroup::from_age(Some(36)), AgeGroup::From36To59);
        assert_eq!(AgeGroup::from_age(Some(59)), AgeGroup::From36To59);
        assert_eq!(AgeGroup::from_age(Some(60)), AgeGroup::Over60);
        assert_eq!(AgeGroup::from_age(Some(104)), AgeGroup::Over60);
    }

    #[test]
    fn test_negative_age_is_under_18() {
        assert_eq!(AgeGroup::from_age(Some(-1)), AgeGroup::Under18);
        assert_eq!(AgeGroup::from_age(Some(i32::MIN)), AgeGroup::Under18);
    }

    #[test]
    fn test_unknown_only_without_age() {
        assert_eq!(AgeGroup::from_age(None), AgeGroup::Unknown);
        assert_eq!(AgeGroup::from_age(None).label(), "Unknown");
        assert_eq!(AgeGroup::from_age(Some(i32::MAX)), AgeGroup::Over60);
    }

    #[test]
    fn test_filter_tokens() {
        assert_eq!(AgeGroup::from_filter_token("under18"), Some(AgeGroup::Under18));
        assert_eq!(AgeGroup::from_filter_token("18-35"), Some(AgeGroup::From18To35));
        assert_eq!(AgeGroup::from_filter_token("36-59"), Some(AgeGroup::From36To59));
        assert_eq!(AgeGroup::from_filter_token("60+"), Some(AgeGroup::Over60));
        assert_eq!(AgeGroup::from_filter_token("Under 18"), None);
        assert_eq!(AgeGroup::from_filter_token("Unknown"), None);
        assert_eq!(AgeGroup::from_filter_token(""), None);
    }

    #[test]
    fn test_labels_serialize_like_view() {
        assert_eq!(serde_json::to_string(&AgeGroup::Under18).unwrap(), "\"Under 18\"");
        assert_eq!(serde_json::to_string(&AgeGroup::Over60).unwrap(), "\"60+\"");
        assert_eq!(AgeGroup::From36To59.to_string(), "36-59");
    }
}
