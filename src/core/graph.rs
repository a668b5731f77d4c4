use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One dependency: `target`'s computation reads `source`'s value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// The extracted dependency graph: an ordered edge sequence. Duplicates are
/// possible and no acyclicity is guaranteed; deduplication, cycle detection,
/// and scheduling are the consumer's business.
pub type DependencyGraph = Vec<Edge>;

/// Re-shapes an edge sequence into a petgraph graph for consumers that want
/// an adjacency structure (topological scheduling, cycle reporting). Node
/// names are interned in first-appearance order; parallel edges are kept.
pub struct GraphBuilder {
    graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    pub fn add_edge(&mut self, edge: &Edge) {
        let source = self.intern(&edge.source);
        let target = self.intern(&edge.target);
        self.graph.add_edge(source, target, ());
    }

    pub fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.node_map.get(name).copied()
    }

    pub fn build(self) -> DiGraph<String, ()> {
        self.graph
    }

    pub fn from_edges(edges: &[Edge]) -> DiGraph<String, ()> {
        let mut builder = GraphBuilder::new();
        for edge in edges {
            builder.add_edge(edge);
        }
        builder.build()
    }

    fn intern(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(name) {
            return index;
        }
        let index = self.graph.add_node(name.to_string());
        self.node_map.insert(name.to_string(), index);
        index
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
