use std::collections::HashMap;
use tree_sitter::Node as TSNode;

use crate::core::collector::{SelfAlias, UseCollector, UseSet};
use crate::core::error::AnalysisError;
use crate::core::graph::{DependencyGraph, Edge};
use crate::core::resolver::{is_private, IndirectionResolver};
use crate::parser::node_text;

/// Splits a class's methods into internal helpers and named outputs, and
/// turns their receiver-attribute reads into a dependency edge list.
///
/// Built once per class from the syntax tree; holds no other state.
#[derive(Debug)]
pub struct ClassAnalyzer {
    class_name: String,
    outputs: Vec<(String, UseSet)>,
    resolver: IndirectionResolver,
}

impl ClassAnalyzer {
    /// Analyze a `class_definition` node. Every method defined directly in
    /// the class body is walked by [`UseCollector`] with the receiver alias
    /// set `{self, <class name>}`; underscore-prefixed methods feed the
    /// resolver table, the rest form the output list in source order.
    ///
    /// One level of decoration is unwrapped so `@property`-style methods are
    /// classified like any other. Non-method statements in the class body
    /// (docstrings, class attributes, `pass`) are skipped.
    pub fn analyze(class_node: &TSNode, source: &[u8]) -> Result<Self, AnalysisError> {
        let class_name = class_node
            .child_by_field_name("name")
            .map(|name| node_text(&name, source).to_string())
            .ok_or_else(|| AnalysisError::Parse("class definition without a name".to_string()))?;

        let alias = SelfAlias::for_class(&class_name);
        let mut table: HashMap<String, UseSet> = HashMap::new();
        let mut outputs: Vec<(String, UseSet)> = Vec::new();

        if let Some(body) = class_node.child_by_field_name("body") {
            let mut cursor = body.walk();
            let statements: Vec<TSNode> = body.named_children(&mut cursor).collect();
            for statement in statements {
                let method = match statement.kind() {
                    "function_definition" => statement,
                    "decorated_definition" => match statement.child_by_field_name("definition") {
                        Some(definition) if definition.kind() == "function_definition" => {
                            definition
                        }
                        _ => continue,
                    },
                    _ => continue,
                };

                let method_name = match method.child_by_field_name("name") {
                    Some(name) => node_text(&name, source).to_string(),
                    None => continue,
                };
                let method_body = match method.child_by_field_name("body") {
                    Some(body) => body,
                    None => continue,
                };

                let uses = UseCollector::collect(&method_body, source, &alias)?;

                if is_private(&method_name) {
                    table.insert(method_name, uses);
                } else {
                    outputs.push((method_name, uses));
                }
            }
        }

        Ok(Self {
            class_name,
            outputs,
            resolver: IndirectionResolver::new(table),
        })
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Non-private methods and their use sets, in source order.
    pub fn outputs(&self) -> &[(String, UseSet)] {
        &self.outputs
    }

    pub fn resolver(&self) -> &IndirectionResolver {
        &self.resolver
    }

    /// Emit the dependency edge list. Private sources are resolved away
    /// through the helper table, so every emitted source is a public name;
    /// a private reference the resolver cannot expand contributes nothing.
    pub fn edges(&self) -> DependencyGraph {
        let mut edges = Vec::new();
        for (target, uses) in &self.outputs {
            for source in uses {
                if is_private(source) {
                    for resolved in self.resolver.resolve(source) {
                        edges.push(Edge::new(resolved, target.clone()));
                    }
                } else {
                    edges.push(Edge::new(source.clone(), target.clone()));
                }
            }
        }
        edges
    }
}
