//! Table discovery with glob matching.
//!
//! Finds `<prefix>_<table>.json` files in a tables directory and keeps the
//! ones that carry a `variable_entry` object and are not auxiliary tables.

use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::MipViewError;
use crate::Result;

/// Tables that never hold output variables, even if they have a
/// `variable_entry` key.
pub const EXCLUDED_TABLES: [&str; 4] = ["grids", "formula_terms", "coordinate", "CV"];

/// A located MIP table file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableFile {
    /// Short table name, e.g. `Amon`
    pub name: String,
    /// Path to the JSON file
    pub path: PathBuf,
}

/// Located tables keyed by table name, in discovery order.
///
/// Inserting a name that is already present replaces its path but keeps
/// its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableSet {
    tables: Vec<TableFile>,
}

impl TableSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a table.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        let name = name.into();
        let path = path.into();
        match self.tables.iter_mut().find(|t| t.name == name) {
            Some(existing) => existing.path = path,
            None => self.tables.push(TableFile { name, path }),
        }
    }

    /// Path of the named table, if located.
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.tables
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.path.as_path())
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no table was located.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Iterate over tables in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, TableFile> {
        self.tables.iter()
    }

    /// Table names in discovery order.
    pub fn names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a TableSet {
    type Item = &'a TableFile;
    type IntoIter = std::slice::Iter<'a, TableFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

/// Derive the table name from a table file path.
///
/// Takes the second `_`-separated segment of the file name and cuts it at
/// `.json`. Prefixes or table names that contain `_` are not supported:
/// `A_B_Amon.json` yields `B`.
pub fn table_name_from_path(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let segment = file_name.split('_').nth(1)?;
    segment.split(".json").next().map(str::to_string)
}

/// Read and parse a table file.
pub(crate) fn read_table_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| MipViewError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| MipViewError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

fn is_excluded(name: &str) -> bool {
    EXCLUDED_TABLES.contains(&name)
}

fn table_glob(dir: &Path, prefix: &str) -> String {
    let dir = Pattern::escape(&dir.to_string_lossy());
    Path::new(&dir)
        .join(format!("{}_*.json", Pattern::escape(prefix)))
        .to_string_lossy()
        .to_string()
}

/// Locate the variable tables in `dir` whose files are named
/// `<prefix>_<table>.json`.
///
/// Every matching file is parsed, so a malformed file fails the run even if
/// its table would have been excluded. A directory with no matching files
/// yields an empty set.
pub fn locate_tables(dir: impl AsRef<Path>, prefix: &str) -> Result<TableSet> {
    let dir = dir.as_ref();

    if !dir.exists() {
        return Err(MipViewError::PathNotFound(dir.to_path_buf()));
    }

    let pattern = table_glob(dir, prefix);
    let paths = glob::glob(&pattern).map_err(|e| MipViewError::InvalidGlob {
        pattern: pattern.clone(),
        message: e.to_string(),
    })?;

    let mut tables = TableSet::new();

    for entry in paths {
        let path = match entry {
            Ok(p) => p,
            Err(e) => {
                debug!(error = %e, "skipping unreadable glob entry");
                continue;
            }
        };

        let Some(name) = table_name_from_path(&path) else {
            continue;
        };

        let json = read_table_json(&path)?;

        if json.get("variable_entry").is_none() {
            debug!(table = %name, path = %path.display(), "no variable_entry, skipping");
            continue;
        }
        if is_excluded(&name) {
            debug!(table = %name, "excluded table, skipping");
            continue;
        }

        debug!(table = %name, path = %path.display(), "located table");
        tables.insert(name, path);
    }

    info!(count = tables.len(), dir = %dir.display(), prefix, "located MIP tables");

    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const WITH_VARIABLES: &str = r#"{"Header": {}, "variable_entry": {"tas": {}}}"#;

    fn create_test_tables(dir: &Path) {
        fs::write(dir.join("ARISE_Amon.json"), WITH_VARIABLES).unwrap();
        fs::write(dir.join("ARISE_Omon.json"), WITH_VARIABLES).unwrap();
        fs::write(dir.join("ARISE_grids.json"), WITH_VARIABLES).unwrap();
        fs::write(dir.join("ARISE_CV.json"), r#"{"CV": {}}"#).unwrap();
        fs::write(dir.join("ARISE_coordinate.json"), r#"{"axis_entry": {}}"#).unwrap();
        fs::write(dir.join("ARISE_formula_terms.json"), WITH_VARIABLES).unwrap();
        fs::write(dir.join("ARISE_fx.json"), r#"{"Header": {}}"#).unwrap();
        fs::write(dir.join("CMIP6_Amon.json"), WITH_VARIABLES).unwrap();
        fs::write(dir.join("ARISE_notes.txt"), "not a table").unwrap();
    }

    #[test]
    fn test_table_name_from_path() {
        assert_eq!(
            table_name_from_path(Path::new("/t/ARISE_Amon.json")),
            Some("Amon".to_string())
        );
        assert_eq!(
            table_name_from_path(Path::new("ARISE_formula_terms.json")),
            Some("formula".to_string())
        );
        assert_eq!(
            table_name_from_path(Path::new("A_B_Amon.json")),
            Some("B".to_string())
        );
        assert_eq!(table_name_from_path(Path::new("Amon.json")), None);
    }

    #[test]
    fn test_locate_tables() {
        let temp = tempdir().unwrap();
        create_test_tables(temp.path());

        let tables = locate_tables(temp.path(), "ARISE").unwrap();

        assert_eq!(tables.names(), vec!["Amon", "Omon", "formula"]);
        assert_eq!(
            tables.get("Amon"),
            Some(temp.path().join("ARISE_Amon.json").as_path())
        );
    }

    #[test]
    fn test_denylisted_table_excluded() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("P_grids.json"), WITH_VARIABLES).unwrap();
        fs::write(temp.path().join("P_coordinate.json"), WITH_VARIABLES).unwrap();
        fs::write(temp.path().join("P_CV.json"), WITH_VARIABLES).unwrap();

        let tables = locate_tables(temp.path(), "P").unwrap();

        assert!(tables.is_empty());
    }

    #[test]
    fn test_table_without_variable_entry_excluded() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("P_fx.json"), r#"{"Header": {}}"#).unwrap();
        fs::write(temp.path().join("P_list.json"), "[1, 2, 3]").unwrap();

        let tables = locate_tables(temp.path(), "P").unwrap();

        assert!(tables.get("fx").is_none());
        assert!(tables.is_empty());
    }

    #[test]
    fn test_prefix_is_matched_literally() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("A[1]_Amon.json"), WITH_VARIABLES).unwrap();
        fs::write(temp.path().join("A1_Amon.json"), WITH_VARIABLES).unwrap();

        let tables = locate_tables(temp.path(), "A[1]").unwrap();

        assert_eq!(tables.len(), 1);
        assert_eq!(
            tables.get("Amon"),
            Some(temp.path().join("A[1]_Amon.json").as_path())
        );
    }

    #[test]
    fn test_no_matching_files_is_empty() {
        let temp = tempdir().unwrap();
        create_test_tables(temp.path());

        let tables = locate_tables(temp.path(), "NOPE").unwrap();

        assert!(tables.is_empty());
    }

    #[test]
    fn test_duplicate_table_name_keeps_position() {
        let mut tables = TableSet::new();
        tables.insert("Amon", "/a/P_Amon.json");
        tables.insert("Omon", "/a/P_Omon.json");
        tables.insert("Amon", "/a/P_Amon_v2.json");

        assert_eq!(tables.names(), vec!["Amon", "Omon"]);
        assert_eq!(tables.get("Amon"), Some(Path::new("/a/P_Amon_v2.json")));
    }

    #[test]
    fn test_malformed_json_fails() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("P_Amon.json"), "{ not json").unwrap();

        let result = locate_tables(temp.path(), "P");

        assert!(matches!(result, Err(MipViewError::Json { .. })));
    }

    #[test]
    fn test_malformed_excluded_table_still_fails() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("P_grids.json"), "{").unwrap();

        assert!(locate_tables(temp.path(), "P").is_err());
    }

    #[test]
    fn test_locate_nonexistent_dir() {
        let result = locate_tables("/nonexistent/path/Tables", "ARISE");

        if let Err(MipViewError::PathNotFound(path)) = result {
            assert_eq!(path, PathBuf::from("/nonexistent/path/Tables"));
        } else {
            panic!("Expected PathNotFound error");
        }
    }
}
