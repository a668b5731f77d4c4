use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::Edge;

/// Plain-text formatter: a `# <class>` header and one `source -> target`
/// line per edge, in extraction order.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_graph(&self, class_name: &str, graph: &[Edge]) -> String {
        let mut output = String::with_capacity(16 + graph.len() * 24);
        output.push_str("# ");
        output.push_str(class_name);
        output.push('\n');
        for edge in graph {
            output.push_str(&edge.source);
            output.push_str(" -> ");
            output.push_str(&edge.target);
            output.push('\n');
        }
        output
    }

    pub fn format_to_file(
        &self,
        class_name: &str,
        graph: &[Edge],
        output_path: &Path,
    ) -> Result<()> {
        fs::write(output_path, self.format_graph(class_name, graph))?;
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}
