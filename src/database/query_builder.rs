use crate::models::MemberFilter;
use sea_orm::{DbBackend, Statement, Value};

/// `Members` as the store reads it. Databases written by the old form
/// handler can hold non-integer text (usually `''`) in `Age`; such values
/// read back as NULL, so they fall in no age filter and in the `Unknown`
/// bracket instead of failing to decode.
pub const MEMBER_READ_QUERY: &str = "SELECT * FROM (SELECT ID, FullName, \
CASE WHEN typeof(Age) = 'integer' THEN Age END AS Age, PhoneNumber, Disability, \
OrganizationName, PaymentMethod, ReceiverName, Gender, Address, Ward, District, Village \
FROM Members) AS Members";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdOrder {
    Ascending,
    Descending,
}

/// A read statement whose bound values line up, in order, with the `?`
/// placeholders in `sql`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredQuery {
    pub sql: String,
    pub values: Vec<Value>,
}

impl FilteredQuery {
    pub fn order_by_id(mut self, order: IdOrder) -> Self {
        let direction = match order {
            IdOrder::Ascending => "ASC",
            IdOrder::Descending => "DESC",
        };
        self.sql.push_str(" ORDER BY ID ");
        self.sql.push_str(direction);
        self
    }

    pub fn into_statement(self) -> Statement {
        Statement::from_sql_and_values(DbBackend::Sqlite, self.sql, self.values)
    }
}

pub fn member_by_id_query(id: i32) -> FilteredQuery {
    FilteredQuery {
        sql: format!("{MEMBER_READ_QUERY} WHERE ID = ?"),
        values: vec![id.into()],
    }
}

/// Appends a `WHERE` clause for every supplied filter, joined with `AND`.
///
/// Age brackets come from a closed set and are inlined as literal ranges.
/// District and payment method are caller text and only ever travel as
/// bound values.
pub fn build_filtered_query(base: &str, filter: &MemberFilter) -> FilteredQuery {
    let mut clauses: Vec<&'static str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(predicate) = filter.age_group().and_then(|g| g.sql_predicate()) {
        clauses.push(predicate);
    }

    if let Some(district) = filter.district() {
        clauses.push("District = ?");
        values.push(district.into());
    }

    if let Some(payment_method) = filter.payment_method() {
        clauses.push("PaymentMethod = ?");
        values.push(payment_method.into());
    }

    let mut sql = base.to_string();
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    FilteredQuery { sql, values }
}
