//! Report building: project variable records into a table or a graph.
//!
//! This module handles the third stage of the pipeline. The same record
//! stream feeds two independent projections:
//!
//! - **TabularReport**: twelve fixed columns, one row per record
//! - **Graph**: table → variable → modeling realm, deduplicated by label

pub mod graph;
pub mod tabular;

pub use graph::{Graph, Node, NodeId, NodeKind};
pub use tabular::{TabularReport, HEADERS};
