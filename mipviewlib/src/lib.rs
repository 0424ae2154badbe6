//! # mipviewlib
//!
//! Read a directory of MIP variable tables (the JSON tables used by CMOR to
//! describe climate-model output) and produce views of them.
//!
//! ## Overview
//!
//! The library is a four-stage pipeline:
//!
//! 1. **source**: locate `<prefix>_<table>.json` files that define variables
//! 2. **data**: flatten each table's `variable_entry` into [`VariableRecord`]s
//! 3. **report**: project records into a [`TabularReport`] or a [`Graph`]
//!    of tables, variables and modeling realms
//! 4. **output**: serialize to CSV, a styled HTML page, or GEXF
//!
//! [`MipTableViewer`] runs all four stages and writes
//! `mip_table_viewer_<prefix>.<ext>` to an output directory.
//!
//! ## Example
//!
//! ```rust
//! use mipviewlib::{MipTableViewer, OutputKind, ViewerOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let tables = tempdir().unwrap();
//! fs::write(
//!     tables.path().join("ARISE_Amon.json"),
//!     r#"{"variable_entry": {"tas": {"frequency": "mon", "modeling_realm": "atmos"}}}"#,
//! ).unwrap();
//! let out = tempdir().unwrap();
//!
//! let viewer = MipTableViewer::new(
//!     ViewerOptions::new()
//!         .tables_directory(tables.path())
//!         .prefix("ARISE")
//!         .output_directory(out.path()),
//! );
//!
//! let graph = viewer.graph().unwrap();
//! assert_eq!(graph.node_count(), 3);
//!
//! let summary = viewer.output(OutputKind::Gexf).unwrap();
//! assert!(summary.output_path.ends_with("mip_table_viewer_ARISE.gexf"));
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod report;
pub mod source;
pub mod viewer;

pub use data::{extract_records, MetadataField, VariableRecord};
pub use error::MipViewError;
pub use options::{OutputKind, ViewerOptions};
pub use output::{render_csv, render_gexf, render_html};
pub use report::{Graph, Node, NodeId, NodeKind, TabularReport};
pub use source::{locate_tables, TableFile, TableSet};
pub use viewer::{MipTableViewer, RunSummary};

/// Result type for mipviewlib operations
pub type Result<T> = std::result::Result<T, MipViewError>;
