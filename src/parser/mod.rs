pub mod python;

pub use python::{ParsedModule, PythonParser};

use tree_sitter::Node as TSNode;

pub fn node_text<'a>(node: &TSNode, source: &'a [u8]) -> &'a str {
    std::str::from_utf8(&source[node.byte_range()]).unwrap_or("")
}

pub fn find_child_by_kind<'a>(node: &'a TSNode, kind: &str) -> Option<TSNode<'a>> {
    let mut cursor = node.walk();
    let result = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == kind);
    result
}

/// 1-based source line of a node, for error reporting.
pub fn node_line(node: &TSNode) -> usize {
    node.start_position().row + 1
}
