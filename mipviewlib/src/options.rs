//! Input options for a viewer run.
//!
//! This module contains the configuration types that control where tables
//! are read from, where output goes, and which output is produced.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default directory holding the MIP table JSON files.
pub const DEFAULT_TABLES_DIRECTORY: &str = "../Tables";
/// Default filename prefix of the MIP table JSON files.
pub const DEFAULT_PREFIX: &str = "ARISE";
/// Default directory the output file is written to.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "./";
/// Default column width for wrapping long text in the HTML page.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Which view of the tables to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Delimited table, one row per variable
    Csv,
    /// Graph-exchange XML of tables, variables and realms
    Gexf,
    /// Styled HTML listing
    #[default]
    Html,
}

impl OutputKind {
    /// File extension used for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputKind::Csv => "csv",
            OutputKind::Gexf => "gexf",
            OutputKind::Html => "html",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputKind::Csv),
            "gexf" => Ok(OutputKind::Gexf),
            "html" => Ok(OutputKind::Html),
            _ => Err(format!("Unknown output kind: {}", s)),
        }
    }
}

/// Options for a viewer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerOptions {
    /// Directory scanned for `<prefix>_<table>.json` files
    pub tables_directory: PathBuf,
    /// Filename prefix of the table files
    pub prefix: String,
    /// Directory the output file is written to
    pub output_directory: PathBuf,
    /// Wrap width for long cells in the HTML page
    pub wrap_width: usize,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            tables_directory: PathBuf::from(DEFAULT_TABLES_DIRECTORY),
            prefix: DEFAULT_PREFIX.to_string(),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

impl ViewerOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tables directory.
    pub fn tables_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tables_directory = dir.into();
        self
    }

    /// Set the filename prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the output directory.
    pub fn output_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_directory = dir.into();
        self
    }

    /// Set the HTML wrap width.
    pub fn wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// Output file name for the given kind: `mip_table_viewer_<prefix>.<ext>`.
    pub fn output_file_name(&self, kind: OutputKind) -> String {
        format!("mip_table_viewer_{}.{}", self.prefix, kind.extension())
    }

    /// Full output path for the given kind.
    pub fn output_path(&self, kind: OutputKind) -> PathBuf {
        self.output_directory.join(self.output_file_name(kind))
    }
}
