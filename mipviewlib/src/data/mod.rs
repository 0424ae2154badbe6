//! Data extraction: turn located tables into flat variable records.
//!
//! This module handles the second stage of the pipeline. Each table's
//! `variable_entry` object becomes one [`VariableRecord`] per variable,
//! with absent fields left empty.

pub mod extract;
pub mod record;

pub use extract::{extract_records, extract_table, record_from_entry};
pub use record::{MetadataField, VariableRecord};
