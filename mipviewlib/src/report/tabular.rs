//! Fixed-column tabular projection of variable records.

use serde::Serialize;

use crate::data::VariableRecord;

/// Column headers of the tabular report.
pub const HEADERS: [&str; 12] = [
    "Table",
    "Variable",
    "Frequency",
    "Dimensions",
    "Standard Name",
    "Long Name",
    "Comment",
    "Modeling Realm",
    "Units",
    "Positive",
    "Cell Methods",
    "Cell Measures",
];

/// Index of the "Modeling Realm" column.
pub const REALM_COLUMN: usize = 7;

/// One row per variable per table, no aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TabularReport {
    /// Column headers
    pub headers: Vec<String>,
    /// Data rows, each with one value per header
    pub rows: Vec<Vec<String>>,
}

impl TabularReport {
    /// Project records into the twelve-column schema.
    pub fn from_records(records: &[VariableRecord]) -> Self {
        TabularReport {
            headers: HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: records.iter().map(VariableRecord::to_row).collect(),
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the report has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct values of a column, in first-seen order.
    pub fn distinct(&self, column: usize) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for row in &self.rows {
            if let Some(value) = row.get(column) {
                if !seen.contains(&value.as_str()) {
                    seen.push(value.as_str());
                }
            }
        }
        seen
    }

    /// Distinct table names.
    pub fn tables(&self) -> Vec<&str> {
        self.distinct(0)
    }

    /// Distinct modeling realms, including the empty realm if present.
    pub fn realms(&self) -> Vec<&str> {
        self.distinct(REALM_COLUMN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MetadataField;

    fn sample_records() -> Vec<VariableRecord> {
        vec![
            VariableRecord::new("Amon", "tas").with(MetadataField::ModelingRealm, "atmos"),
            VariableRecord::new("Amon", "pr").with(MetadataField::ModelingRealm, "atmos"),
            VariableRecord::new("Omon", "tos").with(MetadataField::ModelingRealm, "ocean"),
            VariableRecord::new("Omon", "tas").with(MetadataField::ModelingRealm, "atmos"),
        ]
    }

    #[test]
    fn test_headers() {
        let report = TabularReport::from_records(&[]);
        assert_eq!(report.headers.len(), 12);
        assert_eq!(report.headers[0], "Table");
        assert_eq!(report.headers[7], "Modeling Realm");
        assert_eq!(report.headers[11], "Cell Measures");
        assert!(report.is_empty());
    }

    #[test]
    fn test_one_row_per_record() {
        let records = sample_records();
        let report = TabularReport::from_records(&records);

        assert_eq!(report.len(), records.len());
        let tables = report.tables();
        assert_eq!(tables, vec!["Amon", "Omon"]);
        for row in &report.rows {
            assert_eq!(row.len(), 12);
            assert!(tables.contains(&row[0].as_str()));
        }
    }

    #[test]
    fn test_no_deduplication() {
        let report = TabularReport::from_records(&sample_records());
        let tas_rows = report.rows.iter().filter(|r| r[1] == "tas").count();
        assert_eq!(tas_rows, 2);
    }

    #[test]
    fn test_realms() {
        let report = TabularReport::from_records(&sample_records());
        assert_eq!(report.realms(), vec!["atmos", "ocean"]);
    }
}
