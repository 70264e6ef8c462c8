use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl Field {
    pub const fn logical_name(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    /// Header keys tried in order; the first one present wins.
    pub const fn header_keys(self) -> &'static [&'static str] {
        match self {
            Field::FirstName => &["namefirst", "firstname", "first"],
            Field::LastName => &["lastname", "last"],
            Field::Email => &["email"],
            Field::Phone => &["number", "phonenumber", "phone"],
        }
    }

    pub const fn all() -> &'static [Field] {
        &[Field::FirstName, Field::LastName, Field::Email, Field::Phone]
    }
}

/// Lowercases a header and drops everything outside `[a-z0-9]`.
pub fn header_key(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub index: usize,
    pub header: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    first_name: Option<ResolvedColumn>,
    last_name: Option<ResolvedColumn>,
    email: Option<ResolvedColumn>,
    phone: Option<ResolvedColumn>,
}

impl ColumnMap {
    pub fn resolve(headers: &[String]) -> Self {
        let mut by_key: HashMap<String, usize> = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            by_key.insert(header_key(header), index);
        }

        let mut map = ColumnMap::default();
        for field in Field::all() {
            let resolved = field
                .header_keys()
                .iter()
                .find_map(|key| by_key.get(*key).copied())
                .map(|index| ResolvedColumn {
                    index,
                    header: headers[index].clone(),
                });
            match &resolved {
                Some(column) => {
                    debug!(field = field.logical_name(), header = %column.header, "column resolved")
                }
                None => debug!(field = field.logical_name(), "column not found"),
            }
            *map.slot_mut(*field) = resolved;
        }
        map
    }

    pub fn column(&self, field: Field) -> Option<&ResolvedColumn> {
        match field {
            Field::FirstName => self.first_name.as_ref(),
            Field::LastName => self.last_name.as_ref(),
            Field::Email => self.email.as_ref(),
            Field::Phone => self.phone.as_ref(),
        }
    }

    /// The source header when resolved, otherwise the logical field name.
    pub fn output_header(&self, field: Field) -> &str {
        self.column(field)
            .map(|column| column.header.as_str())
            .unwrap_or(field.logical_name())
    }

    pub fn value<'r>(&self, field: Field, row: &'r csv::StringRecord) -> &'r str {
        self.column(field)
            .and_then(|column| row.get(column.index))
            .unwrap_or("")
    }

    pub fn missing(&self) -> Vec<Field> {
        Field::all()
            .iter()
            .copied()
            .filter(|field| self.column(*field).is_none())
            .collect()
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<ResolvedColumn> {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{header_key, ColumnMap, Field};

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn header_key_strips_punctuation() {
        assert_eq!(header_key(" First Name "), "firstname");
        assert_eq!(header_key("E-Mail"), "email");
        assert_eq!(header_key("Phone #2"), "phone2");
    }

    #[test]
    fn resolve_matches_fuzzy_headers() {
        let map = ColumnMap::resolve(&headers(&["First Name", "LAST_NAME", "E-mail", "Phone"]));
        assert_eq!(map.output_header(Field::FirstName), "First Name");
        assert_eq!(map.output_header(Field::LastName), "LAST_NAME");
        assert_eq!(map.output_header(Field::Email), "E-mail");
        assert_eq!(map.column(Field::Phone).map(|c| c.index), Some(3));
        assert!(map.missing().is_empty());
    }

    #[test]
    fn resolve_prefers_earlier_keys() {
        let map = ColumnMap::resolve(&headers(&["phone", "Number", "first", "Name, First"]));
        assert_eq!(map.output_header(Field::Phone), "Number");
        assert_eq!(map.output_header(Field::FirstName), "Name, First");
    }

    #[test]
    fn resolve_later_duplicate_header_wins() {
        let map = ColumnMap::resolve(&headers(&["Email", "email"]));
        assert_eq!(map.column(Field::Email).map(|c| c.index), Some(1));
    }

    #[test]
    fn unresolved_fields_use_logical_names() {
        let map = ColumnMap::resolve(&headers(&["company"]));
        assert_eq!(map.output_header(Field::Email), "email");
        assert_eq!(map.missing().len(), 4);
    }

    #[test]
    fn value_defaults_to_empty_for_short_rows() {
        let map = ColumnMap::resolve(&headers(&["email", "phone"]));
        let row = csv::StringRecord::from(vec!["a@b.com"]);
        assert_eq!(map.value(Field::Email, &row), "a@b.com");
        assert_eq!(map.value(Field::Phone, &row), "");
        assert_eq!(map.value(Field::FirstName, &row), "");
    }
}
