//! High-level viewer API.
//!
//! [`MipTableViewer`] wires the pipeline stages together: locate tables,
//! extract records, build a report or graph, and write the chosen output
//! to `<output_directory>/mip_table_viewer_<prefix>.<ext>`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::data::{extract_records, VariableRecord};
use crate::error::MipViewError;
use crate::options::{OutputKind, ViewerOptions};
use crate::output::{render_csv, render_gexf, render_html};
use crate::report::{Graph, NodeKind, TabularReport};
use crate::source::{locate_tables, TableSet};
use crate::Result;

/// What a viewer run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Kind of output written
    pub kind: OutputKind,
    /// Path of the written file
    pub output_path: PathBuf,
    /// Number of tables with variables
    pub tables: usize,
    /// Number of variable records
    pub variables: usize,
    /// Number of distinct modeling realms, the empty realm included
    pub realms: usize,
}

/// Runs the table → records → report/graph → file pipeline.
#[derive(Debug, Clone)]
pub struct MipTableViewer {
    options: ViewerOptions,
}

impl MipTableViewer {
    pub fn new(options: ViewerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    /// Locate the variable tables.
    pub fn tables(&self) -> Result<TableSet> {
        locate_tables(&self.options.tables_directory, &self.options.prefix)
    }

    /// Locate tables and extract their variable records.
    pub fn records(&self) -> Result<Vec<VariableRecord>> {
        extract_records(&self.tables()?)
    }

    /// Build the tabular report.
    pub fn report(&self) -> Result<TabularReport> {
        Ok(TabularReport::from_records(&self.records()?))
    }

    /// Build the table/variable/realm graph.
    pub fn graph(&self) -> Result<Graph> {
        Ok(Graph::from_records(&self.records()?))
    }

    /// Render the chosen output kind without writing it.
    pub fn render(&self, kind: OutputKind) -> Result<(String, RunSummary)> {
        let tables = self.tables()?;
        let records = extract_records(&tables)?;
        let output_path = self.options.output_path(kind);

        let (content, realms) = match kind {
            OutputKind::Gexf => {
                let graph = Graph::from_records(&records);
                let realms = graph.count_kind(NodeKind::ModelingRealm);
                (render_gexf(&graph)?, realms)
            }
            OutputKind::Csv => {
                let report = TabularReport::from_records(&records);
                (render_csv(&report), report.realms().len())
            }
            OutputKind::Html => {
                let report = TabularReport::from_records(&records);
                let title = format!("MIP tables: {}", self.options.prefix);
                let html = render_html(&report, &title, self.options.wrap_width);
                (html, report.realms().len())
            }
        };

        let summary = RunSummary {
            kind,
            output_path,
            tables: tables.len(),
            variables: records.len(),
            realms,
        };
        Ok((content, summary))
    }

    /// Render the chosen output kind and write it to the output directory.
    pub fn output(&self, kind: OutputKind) -> Result<RunSummary> {
        let (content, summary) = self.render(kind)?;
        write_file(&summary.output_path, &content)?;

        info!(
            kind = %kind,
            path = %summary.output_path.display(),
            tables = summary.tables,
            variables = summary.variables,
            "wrote MIP table view"
        );
        Ok(summary)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| MipViewError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
