use crate::error::{AppError, AppResult};
use crate::models::MemberResponse;

pub const EXPORT_FILENAME: &str = "members_export.csv";

/// Column names and order are relied on by the spreadsheets built from
/// this export; do not reorder.
pub const EXPORT_HEADER: [&str; 13] = [
    "ID",
    "Full Name",
    "Age",
    "Phone Number",
    "Disability",
    "Organization",
    "Payment Method",
    "Receiver Name",
    "Gender",
    "Address",
    "Ward",
    "District",
    "Village",
];

pub fn render_members_csv(members: &[MemberResponse]) -> AppResult<Vec<u8>> {
    fn text(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or("")
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADER)?;
    for m in members {
        let id = m.id.to_string();
        let age = m.age.map(|a| a.to_string()).unwrap_or_default();
        writer.write_record([
            id.as_str(),
            text(&m.full_name),
            age.as_str(),
            text(&m.phone_number),
            text(&m.disability),
            text(&m.organization_name),
            text(&m.payment_method),
            text(&m.receiver_name),
            text(&m.gender),
            text(&m.address),
            text(&m.ward),
            text(&m.district),
            text(&m.village),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::InternalError(format!("failed to flush CSV export: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeGroup;

    fn member(id: i32, name: &str, age: Option<i32>, district: Option<&str>) -> MemberResponse {
        MemberResponse {
            id,
            full_name: Some(name.to_string()),
            age,
            age_group: AgeGroup::from_age(age),
            phone_number: Some("0712000000".to_string()),
            disability: Some("None".to_string()),
            organization_name: None,
            payment_method: Some("Cash".to_string()),
            receiver_name: None,
            gender: Some("Female".to_string()),
            address: None,
            ward: None,
            district: district.map(str::to_string),
            village: None,
        }
    }

    #[test]
    fn test_header_only_when_empty() {
        let bytes = render_members_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "ID,Full Name,Age,Phone Number,Disability,Organization,Payment Method,Receiver Name,Gender,Address,Ward,District,Village\r\n"
        );
    }

    #[test]
    fn test_rows_follow_header_order() {
        let bytes = render_members_csv(&[
            member(1, "Amina", Some(17), Some("Kinondoni")),
            member(2, "Baraka", None, None),
        ])
        .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1,Amina,17,0712000000,None,,Cash,,Female,,,Kinondoni,");
        assert_eq!(lines[2], "2,Baraka,,0712000000,None,,Cash,,Female,,,,");
        assert!(lines.iter().all(|l| l.split(',').count() == 13));
    }

    #[test]
    fn test_quotes_fields_with_commas() {
        let mut m = member(7, "Mwajuma, Said", Some(40), Some("Ilala"));
        m.address = Some("Plot 4 \"B\"".to_string());
        let text = String::from_utf8(render_members_csv(&[m]).unwrap()).unwrap();
        assert!(text.contains("7,\"Mwajuma, Said\",40,"));
        assert!(text.contains("\"Plot 4 \"\"B\"\"\""));
    }
}
