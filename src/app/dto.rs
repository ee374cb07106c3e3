//! Driver API DTOs: the serializable shape the CLI surface hands to a
//! UI collaborator. `Edge.target` is the target node's id string rather than
//! an embedded `Node`, since the flat `Graph.nodes` list is already the
//! canonical lookup table.

use serde::{Deserialize, Serialize};

use crate::domain::graph::VariableInsightGraph;
use crate::domain::symbol::SourceLocation;
use crate::domain::graph::NodeKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDto {
    pub root: String,
    pub nodes: Vec<NodeDto>,
    pub total_references: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDto {
    pub id: String,
    pub name: String,
    pub type_string: String,
    pub location: SourceLocation,
    pub source_code_excerpt: String,
    pub kind: NodeKind,
    pub edges: Vec<EdgeDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDto {
    pub target: String,
    pub relation: String,
    pub origin_location: SourceLocation,
}

/// Converts the driver's working graph into the Driver API shape.
pub fn to_graph_dto(graph: &VariableInsightGraph) -> Option<GraphDto> {
    let root_idx = graph.root()?;
    let mut nodes = Vec::with_capacity(graph.node_count());

    for idx in graph.node_indices() {
        let node = graph.node(idx);
        let edges = graph
            .outgoing_edges(idx)
            .map(|(target_idx, edge)| EdgeDto {
                target: graph.node(target_idx).id.clone(),
                relation: edge.relation.label().to_string(),
                origin_location: edge.origin_location.clone(),
            })
            .collect();

        nodes.push(NodeDto {
            id: node.id.clone(),
            name: node.name.clone(),
            type_string: node.type_string.clone(),
            location: node.location.clone(),
            source_code_excerpt: node.source_excerpt.clone(),
            kind: node.kind,
            edges,
        });
    }

    Some(GraphDto {
        root: graph.node(root_idx).id.clone(),
        total_references: graph.node_count().saturating_sub(1),
        nodes,
    })
}
