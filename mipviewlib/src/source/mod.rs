//! Source discovery: find the MIP tables to read.
//!
//! This module handles the first stage of the pipeline - locating the
//! `<prefix>_<table>.json` files in a tables directory that actually define
//! variables.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mipviewlib::source::locate_tables;
//!
//! let tables = locate_tables("../Tables", "ARISE")?;
//! for table in &tables {
//!     println!("{} -> {}", table.name, table.path.display());
//! }
//! ```

pub mod locator;

pub use locator::{locate_tables, table_name_from_path, TableFile, TableSet, EXCLUDED_TABLES};
