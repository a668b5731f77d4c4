use anyhow::Result;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::core::{Edge, GraphBuilder};

/// JSON formatter for programmatic consumption.
///
/// Minimal mode (default) interns method names into a node table and emits
/// edges as index pairs; full mode emits the edge structs verbatim. Neither
/// mode deduplicates edges; that is the consumer's call.
pub struct JsonFormatter {
    minimal: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { minimal: true }
    }

    pub fn with_minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }

    pub fn format_to_file(
        &self,
        class_name: &str,
        graph: &[Edge],
        output_path: &Path,
    ) -> Result<()> {
        let json_content = self.format_graph(class_name, graph)?;
        fs::write(output_path, json_content)?;
        Ok(())
    }

    pub fn format_graph(&self, class_name: &str, graph: &[Edge]) -> Result<String> {
        if !self.minimal {
            let output = json!({
                "meta": {
                    "class": class_name,
                    "edges": graph.len(),
                },
                "edges": graph,
            });
            return Ok(serde_json::to_string_pretty(&output)?);
        }

        let mut builder = GraphBuilder::new();
        for edge in graph {
            builder.add_edge(edge);
        }

        let mut edge_pairs = Vec::with_capacity(graph.len());
        for edge in graph {
            if let (Some(source), Some(target)) = (
                builder.node_index(&edge.source),
                builder.node_index(&edge.target),
            ) {
                edge_pairs.push(json!([source.index(), target.index()]));
            }
        }

        let node_graph = builder.build();
        let nodes: Vec<&String> = node_graph.node_weights().collect();

        let output = json!({
            "meta": {
                "class": class_name,
                "nodes": nodes.len(),
                "edges": edge_pairs.len(),
            },
            "nodes": nodes,
            "edges": edge_pairs,
        });

        Ok(serde_json::to_string(&output)?)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
