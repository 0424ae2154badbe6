//! Output formatting: serialize reports and graphs.
//!
//! This module handles the fourth and final stage of the pipeline. Each
//! exporter is a pure function from a built structure to a string:
//!
//! - **csv**: [`TabularReport`](crate::report::TabularReport) as delimited text
//! - **html**: [`TabularReport`](crate::report::TabularReport) as a styled page
//! - **gexf**: [`Graph`](crate::report::Graph) as graph-exchange XML
//!
//! Writing the result to disk is left to [`crate::viewer`].

pub mod csv;
pub mod gexf;
pub mod html;

pub use csv::render_csv;
pub use gexf::{render_gexf, GEXF_NAMESPACE, GEXF_VERSION};
pub use html::{render_html, wrap_text};
