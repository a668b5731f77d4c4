use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tree_sitter::{Node as TSNode, Parser, Tree};

use super::node_text;
use crate::core::error::AnalysisError;

/// Thin wrapper over a tree-sitter parser configured for Python.
///
/// `tree_sitter::Parser` is not `Sync`, so callers that analyze classes in
/// parallel construct one `PythonParser` per task.
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    pub fn new() -> Result<Self, AnalysisError> {
        let mut parser = Parser::new();
        parser
            .set_language(tree_sitter_python::language())
            .map_err(|e| AnalysisError::Parse(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Parse complete module source. A tree containing syntax errors is
    /// rejected outright: the use collector cannot walk a broken tree
    /// without risking missed dependencies.
    pub fn parse_source(&mut self, source: String) -> Result<ParsedModule, AnalysisError> {
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| AnalysisError::Parse("parser returned no tree".to_string()))?;

        if tree.root_node().has_error() {
            return Err(AnalysisError::Parse(
                "source contains syntax errors".to_string(),
            ));
        }

        Ok(ParsedModule { tree, source })
    }

    pub fn parse_file(&mut self, file_path: &Path) -> Result<ParsedModule, AnalysisError> {
        let source = read_file_buffered(file_path)?;
        self.parse_source(source)
    }
}

/// A parsed module together with the source bytes its nodes index into.
pub struct ParsedModule {
    tree: Tree,
    source: String,
}

impl ParsedModule {
    pub fn root(&self) -> TSNode<'_> {
        self.tree.root_node()
    }

    pub fn source_bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    /// Find the one `class_definition` with the given name among the
    /// module's top-level statements, looking through one level of
    /// decoration. Nested scopes are not searched.
    pub fn top_level_class(&self, class_name: &str) -> Option<TSNode<'_>> {
        let root = self.root();
        let mut cursor = root.walk();
        let result = root
            .named_children(&mut cursor)
            .filter_map(|child| match child.kind() {
                "class_definition" => Some(child),
                "decorated_definition" => child
                    .child_by_field_name("definition")
                    .filter(|definition| definition.kind() == "class_definition"),
                _ => None,
            })
            .find(|class_node| {
                class_node
                    .child_by_field_name("name")
                    .map(|name| node_text(&name, self.source_bytes()) == class_name)
                    .unwrap_or(false)
            });
        result
    }
}

fn read_file_buffered(file_path: &Path) -> Result<String, AnalysisError> {
    let file = File::open(file_path)?;
    let file_size = file.metadata()?.len() as usize;

    let mut reader =
        BufReader::with_capacity(if file_size < 8192 { file_size.max(1) } else { 8192 }, file);

    let mut content = String::with_capacity(file_size);
    reader.read_to_string(&mut content)?;
    Ok(content)
}
