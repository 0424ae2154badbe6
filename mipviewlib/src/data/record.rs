//! Flat variable records.
//!
//! A [`VariableRecord`] is one variable of one table with its ten
//! descriptive fields as plain strings. Fields that are absent from the
//! source table are empty strings; the record also remembers which fields
//! the table actually declared.

use serde::Serialize;
use std::fmt;

/// The ten descriptive fields of a variable, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetadataField {
    Frequency,
    Dimensions,
    StandardName,
    LongName,
    Comment,
    ModelingRealm,
    Units,
    Positive,
    CellMethods,
    CellMeasures,
}

impl MetadataField {
    /// All fields in column order.
    pub const ALL: [MetadataField; 10] = [
        MetadataField::Frequency,
        MetadataField::Dimensions,
        MetadataField::StandardName,
        MetadataField::LongName,
        MetadataField::Comment,
        MetadataField::ModelingRealm,
        MetadataField::Units,
        MetadataField::Positive,
        MetadataField::CellMethods,
        MetadataField::CellMeasures,
    ];

    /// Key of the field inside a `variable_entry` object.
    pub fn json_key(&self) -> &'static str {
        match self {
            MetadataField::Frequency => "frequency",
            MetadataField::Dimensions => "dimensions",
            MetadataField::StandardName => "standard_name",
            MetadataField::LongName => "long_name",
            MetadataField::Comment => "comment",
            MetadataField::ModelingRealm => "modeling_realm",
            MetadataField::Units => "units",
            MetadataField::Positive => "positive",
            MetadataField::CellMethods => "cell_methods",
            MetadataField::CellMeasures => "cell_measures",
        }
    }

    /// Human-readable column title.
    pub fn title(&self) -> &'static str {
        match self {
            MetadataField::Frequency => "Frequency",
            MetadataField::Dimensions => "Dimensions",
            MetadataField::StandardName => "Standard Name",
            MetadataField::LongName => "Long Name",
            MetadataField::Comment => "Comment",
            MetadataField::ModelingRealm => "Modeling Realm",
            MetadataField::Units => "Units",
            MetadataField::Positive => "Positive",
            MetadataField::CellMethods => "Cell Methods",
            MetadataField::CellMeasures => "Cell Measures",
        }
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One variable of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariableRecord {
    pub table: String,
    pub variable: String,
    pub frequency: String,
    pub dimensions: String,
    pub standard_name: String,
    pub long_name: String,
    pub comment: String,
    pub modeling_realm: String,
    pub units: String,
    pub positive: String,
    pub cell_methods: String,
    pub cell_measures: String,
    /// Fields present in the source table, in column order
    #[serde(skip)]
    declared: Vec<MetadataField>,
}

impl VariableRecord {
    /// Create a record with every descriptive field empty and undeclared.
    pub fn new(table: impl Into<String>, variable: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            variable: variable.into(),
            ..Self::default()
        }
    }

    /// Builder: set a descriptive field and mark it declared.
    pub fn with(mut self, field: MetadataField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a descriptive field and mark it declared.
    pub fn set(&mut self, field: MetadataField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
        if !self.declared.contains(&field) {
            self.declared.push(field);
            self.declared
                .sort_by_key(|f| MetadataField::ALL.iter().position(|a| a == f));
        }
    }

    /// Value of a descriptive field (empty if absent).
    pub fn get(&self, field: MetadataField) -> &str {
        match field {
            MetadataField::Frequency => &self.frequency,
            MetadataField::Dimensions => &self.dimensions,
            MetadataField::StandardName => &self.standard_name,
            MetadataField::LongName => &self.long_name,
            MetadataField::Comment => &self.comment,
            MetadataField::ModelingRealm => &self.modeling_realm,
            MetadataField::Units => &self.units,
            MetadataField::Positive => &self.positive,
            MetadataField::CellMethods => &self.cell_methods,
            MetadataField::CellMeasures => &self.cell_measures,
        }
    }

    fn field_mut(&mut self, field: MetadataField) -> &mut String {
        match field {
            MetadataField::Frequency => &mut self.frequency,
            MetadataField::Dimensions => &mut self.dimensions,
            MetadataField::StandardName => &mut self.standard_name,
            MetadataField::LongName => &mut self.long_name,
            MetadataField::Comment => &mut self.comment,
            MetadataField::ModelingRealm => &mut self.modeling_realm,
            MetadataField::Units => &mut self.units,
            MetadataField::Positive => &mut self.positive,
            MetadataField::CellMethods => &mut self.cell_methods,
            MetadataField::CellMeasures => &mut self.cell_measures,
        }
    }

    /// Fields the source table declared for this variable.
    pub fn declared(&self) -> &[MetadataField] {
        &self.declared
    }

    /// Whether the source table declared `field`.
    pub fn is_declared(&self, field: MetadataField) -> bool {
        self.declared.contains(&field)
    }

    /// Declared fields with their values, in column order.
    pub fn declared_metadata(&self) -> Vec<(MetadataField, String)> {
        self.declared
            .iter()
            .map(|f| (*f, self.get(*f).to_string()))
            .collect()
    }

    /// All twelve columns as strings, table and variable first.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(12);
        row.push(self.table.clone());
        row.push(self.variable.clone());
        row.extend(MetadataField::ALL.iter().map(|f| self.get(*f).to_string()));
        row
    }
}
