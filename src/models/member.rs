use crate::entities::member_entity;
use crate::models::AgeGroup;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberResponse {
    pub id: i32,
    pub full_name: Option<String>,
    pub age: Option<i32>,
    pub age_group: AgeGroup,
    pub phone_number: Option<String>,
    pub disability: Option<String>,
    pub organization_name: Option<String>,
    pub payment_method: Option<String>,
    pub receiver_name: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub ward: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,
}

/// Body of create and update requests. Accepted as JSON or as an
/// urlencoded form; the short names used by the registration form
/// (`phone`, `organization`, `payment`, `receiver`) are accepted too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberRequest {
    #[schema(example = "Amina Juma")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_age")]
    #[schema(example = 34)]
    pub age: Option<i32>,
    #[serde(alias = "phone")]
    #[schema(example = "+255712345678")]
    pub phone_number: Option<String>,
    #[schema(example = "None")]
    pub disability: Option<String>,
    #[serde(alias = "organization")]
    pub organization_name: Option<String>,
    #[serde(alias = "payment")]
    #[schema(example = "Mobile Money")]
    pub payment_method: Option<String>,
    #[serde(alias = "receiver")]
    pub receiver_name: Option<String>,
    #[schema(example = "Female")]
    pub gender: Option<String>,
    pub address: Option<String>,
    pub ward: Option<String>,
    #[schema(example = "Kinondoni")]
    pub district: Option<String>,
    pub village: Option<String>,
}

/// List and export filters. Absent and empty values impose no constraint;
/// an unrecognized `age_group` token is ignored rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberFilter {
    #[serde(default)]
    #[schema(example = "18-35")]
    pub age_group: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default, rename = "payment", alias = "payment_method")]
    pub payment_method: Option<String>,
}

impl MemberFilter {
    pub fn age_group(&self) -> Option<AgeGroup> {
        self.age_group
            .as_deref()
            .and_then(AgeGroup::from_filter_token)
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref().filter(|d| !d.is_empty())
    }

    pub fn payment_method(&self) -> Option<&str> {
        self.payment_method.as_deref().filter(|p| !p.is_empty())
    }
}

impl From<member_entity::Model> for MemberResponse {
    fn from(m: member_entity::Model) -> Self {
        Self {
            id: m.id,
            age_group: AgeGroup::from_age(m.age),
            full_name: m.full_name,
            age: m.age,
            phone_number: m.phone_number,
            disability: m.disability,
            organization_name: m.organization_name,
            payment_method: m.payment_method,
            receiver_name: m.receiver_name,
            gender: m.gender,
            address: m.address,
            ward: m.ward,
            district: m.district,
            village: m.village,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AgeInput {
    Number(i32),
    Text(String),
}

// Forms post every field as text, so `age=` has to mean "no age".
fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<AgeInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(AgeInput::Number(n)) => Ok(Some(n)),
        Some(AgeInput::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(None)
            } else {
                s.parse::<i32>()
                    .map(Some)
                    .map_err(|_| serde::de::Error::custom(format!("invalid age: {s}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_form_field_names() {
        let json = r#"{"full_name":"Amina","age":17,"phone":"0712","organization":"MamaNet",
            "payment":"Cash","receiver":"Juma","district":"Kinondoni"}"#;
        let req: MemberRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.phone_number.as_deref(), Some("0712"));
        assert_eq!(req.organization_name.as_deref(), Some("MamaNet"));
        assert_eq!(req.payment_method.as_deref(), Some("Cash"));
        assert_eq!(req.receiver_name.as_deref(), Some("Juma"));
        assert_eq!(req.age, Some(17));
    }

    #[test]
    fn test_age_as_text() {
        let req: MemberRequest = serde_json::from_str(r#"{"age":" 42 "}"#).unwrap();
        assert_eq!(req.age, Some(42));
        let req: MemberRequest = serde_json::from_str(r#"{"age":""}"#).unwrap();
        assert_eq!(req.age, None);
        let req: MemberRequest = serde_json::from_str(r#"{"age":null}"#).unwrap();
        assert_eq!(req.age, None);
        let req: MemberRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.age, None);
        assert!(serde_json::from_str::<MemberRequest>(r#"{"age":"forty"}"#).is_err());
    }

    #[test]
    fn test_filter_empty_values_are_absent() {
        let filter = MemberFilter {
            age_group: Some("".to_string()),
            district: Some("".to_string()),
            payment_method: Some("".to_string()),
        };
        assert_eq!(filter.age_group(), None);
        assert_eq!(filter.district(), None);
        assert_eq!(filter.payment_method(), None);
    }

    #[test]
    fn test_filter_reads_payment_param() {
        let filter: MemberFilter =
            serde_json::from_str(r#"{"age_group":"60+","payment":"Cash"}"#).unwrap();
        assert_eq!(filter.age_group(), Some(AgeGroup::Over60));
        assert_eq!(filter.payment_method(), Some("Cash"));
        assert_eq!(filter.district(), None);
    }

    #[test]
    fn test_response_derives_age_group() {
        let model = member_entity::Model {
            id: 3,
            full_name: Some("Neema".to_string()),
            age: Some(36),
            phone_number: None,
            disability: Some("Vision".to_string()),
            organization_name: None,
            payment_method: Some("Bank Transfer".to_string()),
            receiver_name: None,
            gender: Some("Female".to_string()),
            address: None,
            ward: None,
            district: Some("Ilala".to_string()),
            village: None,
        };
        let response = MemberResponse::from(model);
        assert_eq!(response.id, 3);
        assert_eq!(response.age_group, AgeGroup::From36To59);
        assert_eq!(response.district.as_deref(), Some("Ilala"));
    }
}
