//! Three-tier graph of tables, variables and modeling realms.
//!
//! Nodes are keyed by label: a table, variable or realm name always maps to
//! the same node no matter how many records mention it. Edges are
//! undirected and collapse when added twice.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::data::{MetadataField, VariableRecord};

/// Index of a node in a [`Graph`].
pub type NodeId = usize;

/// Kind of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Table,
    Variable,
    ModelingRealm,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Table => "table",
            NodeKind::Variable => "variable",
            NodeKind::ModelingRealm => "modeling_realm",
        }
    }
}

/// A graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Table, variable or realm name
    pub label: String,
    /// Kind given by the last record that mentioned the label
    pub kind: NodeKind,
    /// Declared descriptive fields; only set on variable nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<(MetadataField, String)>>,
}

impl Node {
    /// Value of a metadata field, if this node carries it.
    pub fn metadata_value(&self, field: MetadataField) -> Option<&str> {
        self.metadata
            .as_ref()?
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }
}

/// Undirected graph with label-deduplicated nodes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table → variable → realm graph from records.
    ///
    /// Records without a realm all attach to one shared node with an empty
    /// label.
    pub fn from_records(records: &[VariableRecord]) -> Self {
        let mut graph = Graph::new();
        for record in records {
            graph.add_record(record);
        }
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built variable graph"
        );
        graph
    }

    /// Add one record's table, variable and realm nodes and their edges.
    pub fn add_record(&mut self, record: &VariableRecord) {
        let table = self.add_node(&record.table, NodeKind::Table);
        let variable = self.add_node(&record.variable, NodeKind::Variable);
        // Last record mentioning a variable wins.
        self.nodes[variable].metadata = Some(record.declared_metadata());
        let realm = self.add_node(&record.modeling_realm, NodeKind::ModelingRealm);

        self.add_edge(table, variable);
        self.add_edge(variable, realm);
    }

    /// Return the node labelled `label` with its kind set to `kind`.
    ///
    /// An existing node keeps its id, edges and metadata but takes the new
    /// kind, so a label reused across kinds ends up with the last one.
    pub fn add_node(&mut self, label: &str, kind: NodeKind) -> NodeId {
        let id = self.get_or_create(label, kind);
        self.nodes[id].kind = kind;
        id
    }

    /// Return the node labelled `label`, creating it with `kind` if absent.
    /// An existing node is returned unchanged.
    pub fn get_or_create(&mut self, label: &str, kind: NodeKind) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(Node {
            label: label.to_string(),
            kind,
            metadata: None,
        });
        self.adjacency.push(Vec::new());
        self.index.insert(label.to_string(), id);
        id
    }

    /// Add an undirected edge. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        if self.adjacency[a].contains(&b) {
            return;
        }
        self.adjacency[a].push(b);
        if a != b {
            self.adjacency[b].push(a);
        }
    }

    /// Node id of a label.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Node by id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Neighbours of a node, in the order their edges were added.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.adjacency[id]
    }

    /// Each undirected edge once.
    ///
    /// Nodes are visited in insertion order and each edge is reported from
    /// the endpoint visited first.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut seen = vec![false; self.nodes.len()];
        let mut edges = Vec::new();
        for (id, neighbors) in self.adjacency.iter().enumerate() {
            for &other in neighbors {
                if !seen[other] {
                    edges.push((id, other));
                }
            }
            seen[id] = true;
        }
        edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Number of nodes of the given kind.
    ///
    /// Counts each node under its current kind, see [`Graph::add_node`].
    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|n| n.kind == kind).count()
    }

    /// First node carrying variable metadata, in insertion order.
    pub fn first_variable(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.metadata.is_some())
    }
}
