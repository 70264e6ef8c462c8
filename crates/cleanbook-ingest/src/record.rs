use crate::columns::{ColumnMap, Field};
use cleanbook_core::{normalize_email, normalize_phone, Normalized};
use serde::Serialize;

pub const RESULT_HEADERS: [&str; 6] = [
    "email_normalized",
    "email_valid",
    "email_reason",
    "phone_normalized",
    "phone_valid",
    "phone_reason",
];

/// One input row mapped onto the logical contact schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ContactRecord {
    pub fn from_row(columns: &ColumnMap, row: &csv::StringRecord) -> Self {
        Self {
            first_name: columns.value(Field::FirstName, row).to_string(),
            last_name: columns.value(Field::LastName, row).to_string(),
            email: columns.value(Field::Email, row).to_string(),
            phone: columns.value(Field::Phone, row).to_string(),
        }
    }

    pub fn clean(self, default_region: &str) -> CleanedRow {
        let email = normalize_email(&self.email);
        let phone = normalize_phone(&self.phone, default_region);
        CleanedRow {
            record: self,
            email,
            phone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanedRow {
    pub record: ContactRecord,
    pub email: Normalized,
    pub phone: Normalized,
}

impl CleanedRow {
    pub fn output_fields(&self) -> Vec<String> {
        vec![
            self.record.first_name.clone(),
            self.record.last_name.clone(),
            self.record.email.clone(),
            self.record.phone.clone(),
            self.email.value.clone(),
            self.email.is_valid.to_string(),
            self.email.reason.clone(),
            self.phone.value.clone(),
            self.phone.is_valid.to_string(),
            self.phone.reason.clone(),
        ]
    }
}

pub fn output_headers(columns: &ColumnMap) -> Vec<String> {
    Field::all()
        .iter()
        .map(|field| columns.output_header(*field).to_string())
        .chain(RESULT_HEADERS.iter().map(|header| header.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{output_headers, ContactRecord};
    use crate::columns::ColumnMap;

    #[test]
    fn clean_normalizes_both_fields() {
        let record = ContactRecord {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ADA (at) example (dot) com".to_string(),
            phone: "555.123.4567".to_string(),
        };
        let cleaned = record.clean("US");
        assert_eq!(
            cleaned.output_fields(),
            vec![
                "Ada",
                "Lovelace",
                "ADA (at) example (dot) com",
                "555.123.4567",
                "ada@example.com",
                "true",
                "ok",
                "+15551234567",
                "true",
                "ok",
            ]
        );
    }

    #[test]
    fn from_row_reads_mapped_columns() {
        let headers = vec!["Phone".to_string(), "Email".to_string()];
        let columns = ColumnMap::resolve(&headers);
        let row = csv::StringRecord::from(vec!["555", "x@y.com"]);
        let record = ContactRecord::from_row(&columns, &row);
        assert_eq!(record.email, "x@y.com");
        assert_eq!(record.phone, "555");
        assert_eq!(record.first_name, "");
    }

    #[test]
    fn output_headers_fall_back_to_logical_names() {
        let headers = vec!["E-mail".to_string()];
        let columns = ColumnMap::resolve(&headers);
        let out = output_headers(&columns);
        assert_eq!(&out[..4], &["first_name", "last_name", "E-mail", "phone"]);
        assert_eq!(out.len(), 10);
        assert_eq!(out[9], "phone_reason");
    }
}
