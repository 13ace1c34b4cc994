use csv::StringRecord;

use crate::error::ImporterError;

/// Resolved column indices for one CSV document.
///
/// Built once from the header record. `name` is required; each optional
/// column that is absent simply disables that feature for every row.
#[derive(Debug)]
pub struct ColumnMap {
    pub name: usize,
    pub slug: Option<usize>,
    pub description: Option<usize>,
    pub parent: Option<usize>,
}

impl ColumnMap {
    /// Header cells match case- and whitespace-insensitively; extra columns
    /// are ignored.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, ImporterError> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.trim().to_ascii_lowercase())
            .collect();

        let position = |column: &str| normalized.iter().position(|h| h == column);

        let name = position("name").ok_or_else(|| {
            ImporterError::InvalidFormat("missing required name column".to_string())
        })?;

        Ok(Self {
            name,
            slug: position("slug"),
            description: position("description"),
            parent: position("parent"),
        })
    }

    /// Names of the optional columns found in the header.
    pub fn optional_columns(&self) -> Vec<&'static str> {
        let mut found = Vec::new();
        if self.slug.is_some() {
            found.push("slug");
        }
        if self.description.is_some() {
            found.push("description");
        }
        if self.parent.is_some() {
            found.push("parent");
        }
        found
    }

    /// Cell at `index`, or `None` when the column is absent or the row is
    /// too short to reach it.
    pub fn get<'a>(&self, record: &'a StringRecord, index: Option<usize>) -> Option<&'a str> {
        index.and_then(|i| record.get(i))
    }

    pub fn name_cell<'a>(&self, record: &'a StringRecord) -> &'a str {
        record.get(self.name).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_normalize_case_and_whitespace() {
        let headers = StringRecord::from(vec![" Name ", "SLUG", "Description", "parent"]);
        let columns = ColumnMap::from_headers(&headers).unwrap();
        assert_eq!(columns.name, 0);
        assert_eq!(columns.slug, Some(1));
        assert_eq!(columns.description, Some(2));
        assert_eq!(columns.parent, Some(3));
    }

    #[test]
    fn test_missing_name_column_is_an_error() {
        let headers = StringRecord::from(vec!["slug", "description"]);
        let err = ColumnMap::from_headers(&headers).unwrap_err();
        assert!(err.to_string().contains("missing required name column"));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let headers = StringRecord::from(vec!["count", "name", "color"]);
        let columns = ColumnMap::from_headers(&headers).unwrap();
        assert_eq!(columns.name, 1);
        assert!(columns.optional_columns().is_empty());
    }

    #[test]
    fn test_ragged_rows_read_missing_cells_as_absent() {
        let headers = StringRecord::from(vec!["name", "slug", "parent"]);
        let columns = ColumnMap::from_headers(&headers).unwrap();
        let short_row = StringRecord::from(vec!["Technology"]);
        assert_eq!(columns.name_cell(&short_row), "Technology");
        assert_eq!(columns.get(&short_row, columns.slug), None);
        assert_eq!(columns.get(&short_row, columns.parent), None);
    }
}
