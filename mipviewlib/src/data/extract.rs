//! Record extraction: flatten `variable_entry` objects into rows.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::MipViewError;
use crate::source::locator::read_table_json;
use crate::source::TableSet;
use crate::Result;

use super::record::{MetadataField, VariableRecord};

/// Render a metadata value as text.
///
/// Strings are taken as-is, `null` becomes empty, anything else is written
/// as JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Build a record from one entry of a `variable_entry` object.
pub fn record_from_entry(
    table: &str,
    variable: &str,
    metadata: &Map<String, Value>,
) -> VariableRecord {
    let mut record = VariableRecord::new(table, variable);
    for field in MetadataField::ALL {
        if let Some(value) = metadata.get(field.json_key()) {
            record.set(field, value_text(value));
        }
    }
    record
}

/// Extract the records of a single table file.
pub fn extract_table(table: &str, path: &Path) -> Result<Vec<VariableRecord>> {
    let json = read_table_json(path)?;

    let entries = match json.get("variable_entry") {
        None => return Ok(Vec::new()),
        Some(Value::Object(entries)) => entries,
        Some(_) => {
            return Err(MipViewError::MalformedTable {
                path: path.to_path_buf(),
                message: "variable_entry is not an object".to_string(),
            })
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (variable, metadata) in entries {
        let metadata = metadata
            .as_object()
            .ok_or_else(|| MipViewError::MalformedTable {
                path: path.to_path_buf(),
                message: format!("entry for variable '{}' is not an object", variable),
            })?;
        records.push(record_from_entry(table, variable, metadata));
    }

    debug!(table, count = records.len(), "extracted variables");
    Ok(records)
}

/// Extract the records of every located table.
///
/// Records come out in table order, then in the key order of each table's
/// `variable_entry` object.
pub fn extract_records(tables: &TableSet) -> Result<Vec<VariableRecord>> {
    let mut records = Vec::new();
    for table in tables {
        records.extend(extract_table(&table.name, &table.path)?);
    }

    info!(
        tables = tables.len(),
        records = records.len(),
        "extracted variable records"
    );
    Ok(records)
}
