//! Graph Model: the arena plus symbol-keyed side index that backs
//! `VariableInsightGraph` — a `petgraph::DiGraph` arena paired with a
//! `HashMap<SymbolId, NodeIndex>` side index that dedups nodes by symbol
//! identity.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use crate::domain::symbol::{SourceLocation, SymbolId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum NodeKind {
    Variable,
    Parameter,
    Field,
    Property,
    Method,
    Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightNode {
    pub id: String,
    pub name: String,
    pub type_string: String,
    pub location: SourceLocation,
    pub source_excerpt: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum EdgeRelation {
    Initialization,
    Assignment,
    ReturnContributor,
    ParameterMapping,
    ObjectInitializer,
    Override,
}

impl EdgeRelation {
    /// The stable, string-valued label from the Driver API.
    pub fn label(self) -> &'static str {
        match self {
            EdgeRelation::Initialization => "Initialization",
            EdgeRelation::Assignment => "Assignment",
            EdgeRelation::ReturnContributor => "ReturnContributor",
            EdgeRelation::ParameterMapping => "ParameterMapping",
            EdgeRelation::ObjectInitializer => "ObjectInitializer",
            EdgeRelation::Override => "Override",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightEdge {
    pub relation: EdgeRelation,
    pub origin_location: SourceLocation,
}

/// In-memory node/edge store for one `analyze` invocation. Owned by the
/// Traversal Driver and returned read-only.
pub struct VariableInsightGraph {
    graph: DiGraph<InsightNode, InsightEdge>,
    /// `nodeOf`: deduplicates nodes by oracle symbol identity.
    node_of: HashMap<SymbolId, NodeIndex>,
    root: Option<NodeIndex>,
}

impl Default for VariableInsightGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableInsightGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_of: HashMap::new(),
            root: None,
        }
    }

    /// Looks up the node for `symbol_id`, creating it from `node` if absent.
    /// Returns the existing or newly created index.
    pub fn get_or_create_node(&mut self, symbol_id: &SymbolId, node: InsightNode) -> NodeIndex {
        if let Some(&idx) = self.node_of.get(symbol_id) {
            return idx;
        }
        let idx = self.graph.add_node(node);
        self.node_of.insert(symbol_id.clone(), idx);
        idx
    }

    pub fn node_by_symbol(&self, symbol_id: &SymbolId) -> Option<NodeIndex> {
        self.node_of.get(symbol_id).copied()
    }

    pub fn set_root(&mut self, idx: NodeIndex) {
        self.root = Some(idx);
    }

    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn node(&self, idx: NodeIndex) -> &InsightNode {
        &self.graph[idx]
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn outgoing_edges(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, &InsightEdge)> {
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.target(), e.weight()))
    }

    /// Adds an edge `from -> to` with `relation` unless one with the same
    /// (source, target, relation) triple already exists.
    /// Returns `true` if a new edge was added.
    pub fn add_edge_dedup(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
        relation: EdgeRelation,
        origin_location: SourceLocation,
    ) -> bool {
        let already_present = self
            .graph
            .edges_directed(from, Direction::Outgoing)
            .any(|e| e.target() == to && e.weight().relation == relation);
        if already_present {
            return false;
        }
        self.graph.add_edge(
            from,
            to,
            InsightEdge {
                relation,
                origin_location,
            },
        );
        true
    }
}
