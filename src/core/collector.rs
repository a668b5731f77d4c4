use tree_sitter::Node as TSNode;

use crate::core::error::AnalysisError;
use crate::parser::{node_line, node_text};

/// Identifiers that denote the receiver inside a method body: the literal
/// `self` plus the class's own name (class-level access like `Model.rate`).
#[derive(Debug, Clone)]
pub struct SelfAlias {
    names: Vec<String>,
}

impl SelfAlias {
    pub fn for_class(class_name: &str) -> Self {
        Self {
            names: vec!["self".to_string(), class_name.to_string()],
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

/// The receiver-attribute names one method reads.
///
/// Backed by a Vec with insert-if-absent so iteration follows first-reference
/// order. A hash set would also satisfy the dependency semantics, but it
/// would make edge output order run-dependent, which downstream display and
/// snapshot tooling cannot tolerate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UseSet {
    names: Vec<String>,
}

impl UseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str) {
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> IntoIterator for &'a UseSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl FromIterator<String> for UseSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = UseSet::new();
        for name in iter {
            set.insert(&name);
        }
        set
    }
}

/// Every tree-sitter-python node kind the collector knows how to walk.
///
/// Classification happens up front so the dispatch below is an exhaustive
/// match: a grammar kind missing here is refused uniformly instead of being
/// silently skipped somewhere down an `if` chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    // transparent wrappers: descend into the payload, record nothing
    Assignment,
    ReturnStatement,
    KeywordArgument,
    ExpressionStatement,
    ListSplat,
    DictionarySplat,
    Parenthesized,
    // fan-out: union of the children's uses
    Block,
    List,
    Tuple,
    ExpressionList,
    IfStatement,
    ElifClause,
    ElseClause,
    ConditionalExpression,
    ForStatement,
    TryStatement,
    ExceptClause,
    Lambda,
    Slice,
    // the interesting ones
    Attribute,
    Call,
    BinaryOperator,
    Subscript,
    ComparisonOperator,
    // terminals: no descent, no recording
    Identifier,
    Integer,
    Float,
    Str,
    True,
    False,
    NoneLiteral,
    PassStatement,
    RaiseStatement,
    Comment,
}

impl NodeKind {
    fn classify(kind: &str) -> Option<NodeKind> {
        let classified = match kind {
            "assignment" => NodeKind::Assignment,
            "return_statement" => NodeKind::ReturnStatement,
            "keyword_argument" => NodeKind::KeywordArgument,
            "expression_statement" => NodeKind::ExpressionStatement,
            "list_splat" => NodeKind::ListSplat,
            "dictionary_splat" => NodeKind::DictionarySplat,
            "parenthesized_expression" => NodeKind::Parenthesized,
            "block" => NodeKind::Block,
            "list" => NodeKind::List,
            "tuple" => NodeKind::Tuple,
            "expression_list" => NodeKind::ExpressionList,
            "if_statement" => NodeKind::IfStatement,
            "elif_clause" => NodeKind::ElifClause,
            "else_clause" => NodeKind::ElseClause,
            "conditional_expression" => NodeKind::ConditionalExpression,
            "for_statement" => NodeKind::ForStatement,
            "try_statement" => NodeKind::TryStatement,
            "except_clause" => NodeKind::ExceptClause,
            "lambda" => NodeKind::Lambda,
            "slice" => NodeKind::Slice,
            "attribute" => NodeKind::Attribute,
            "call" => NodeKind::Call,
            "binary_operator" => NodeKind::BinaryOperator,
            "subscript" => NodeKind::Subscript,
            "comparison_operator" => NodeKind::ComparisonOperator,
            "identifier" => NodeKind::Identifier,
            "integer" => NodeKind::Integer,
            "float" => NodeKind::Float,
            "string" => NodeKind::Str,
            "true" => NodeKind::True,
            "false" => NodeKind::False,
            "none" => NodeKind::NoneLiteral,
            "pass_statement" => NodeKind::PassStatement,
            "raise_statement" => NodeKind::RaiseStatement,
            "comment" => NodeKind::Comment,
            _ => return None,
        };
        Some(classified)
    }
}

/// Walks one method body and collects the receiver-attribute names it reads.
///
/// The walk is a partial interpreter over node kinds: anything outside the
/// supported grammar is a hard [`AnalysisError::UnsupportedConstruct`],
/// because skipping an unknown node could hide a real dependency. Yields,
/// while loops, dict literals, comprehensions, boolean and unary operators
/// are all refused on purpose.
pub struct UseCollector<'a> {
    source: &'a [u8],
    alias: &'a SelfAlias,
    uses: UseSet,
}

impl<'a> UseCollector<'a> {
    /// Collect uses from a method's `block` body.
    pub fn collect(
        body: &TSNode,
        source: &'a [u8],
        alias: &'a SelfAlias,
    ) -> Result<UseSet, AnalysisError> {
        let mut collector = UseCollector {
            source,
            alias,
            uses: UseSet::new(),
        };
        collector.visit(body)?;
        Ok(collector.uses)
    }

    fn visit(&mut self, node: &TSNode) -> Result<(), AnalysisError> {
        let kind = NodeKind::classify(node.kind())
            .ok_or_else(|| AnalysisError::unsupported(node.kind(), node_line(node)))?;

        match kind {
            NodeKind::Assignment => self.visit_field(node, "right"),
            NodeKind::ReturnStatement
            | NodeKind::ExpressionStatement
            | NodeKind::ListSplat
            | NodeKind::DictionarySplat
            | NodeKind::Parenthesized
            | NodeKind::Block
            | NodeKind::List
            | NodeKind::Tuple
            | NodeKind::ExpressionList
            | NodeKind::ConditionalExpression => self.visit_named_children(node),

            NodeKind::KeywordArgument => self.visit_field(node, "value"),

            NodeKind::IfStatement => {
                self.visit_field(node, "condition")?;
                self.visit_field(node, "consequence")?;
                let mut cursor = node.walk();
                let alternatives: Vec<TSNode> = node
                    .children_by_field_name("alternative", &mut cursor)
                    .collect();
                for clause in alternatives {
                    self.visit(&clause)?;
                }
                Ok(())
            }
            NodeKind::ElifClause => {
                self.visit_field(node, "condition")?;
                self.visit_field(node, "consequence")
            }
            NodeKind::ElseClause => self.visit_field(node, "body"),

            // the loop target is a binding, not a read
            NodeKind::ForStatement => {
                self.visit_field(node, "right")?;
                self.visit_field(node, "body")
            }

            // body and handlers; else/finally clauses carry no handler role
            NodeKind::TryStatement => {
                self.visit_field(node, "body")?;
                let mut cursor = node.walk();
                let handlers: Vec<TSNode> = node
                    .named_children(&mut cursor)
                    .filter(|child| child.kind() == "except_clause")
                    .collect();
                for handler in handlers {
                    self.visit(&handler)?;
                }
                Ok(())
            }
            // only the handler body; the exception-type expression is a
            // class reference, not a value read
            NodeKind::ExceptClause => {
                let mut cursor = node.walk();
                let block = node
                    .named_children(&mut cursor)
                    .find(|child| child.kind() == "block");
                match block {
                    Some(block) => self.visit(&block),
                    None => Ok(()),
                }
            }

            NodeKind::Lambda => self.visit_field(node, "body"),

            NodeKind::Slice => self.visit_slice(node),

            NodeKind::Attribute => self.visit_attribute(node),
            NodeKind::Call => self.visit_call(node),

            NodeKind::BinaryOperator => {
                self.visit_field(node, "left")?;
                self.visit_field(node, "right")
            }
            NodeKind::Subscript => {
                self.visit_field(node, "value")?;
                let mut cursor = node.walk();
                let indices: Vec<TSNode> = node
                    .children_by_field_name("subscript", &mut cursor)
                    .collect();
                for index in indices {
                    self.visit(&index)?;
                }
                Ok(())
            }
            NodeKind::ComparisonOperator => self.visit_named_children(node),

            NodeKind::Str => {
                // f-string interpolations could hide reads; refuse them
                if let Some(interp) = crate::parser::find_child_by_kind(node, "interpolation") {
                    return Err(AnalysisError::unsupported(
                        interp.kind(),
                        node_line(&interp),
                    ));
                }
                Ok(())
            }
            NodeKind::RaiseStatement => {
                // a bare `raise` re-raises and reads nothing; a raise with an
                // operand is outside the grammar
                if node.named_child_count() == 0 {
                    Ok(())
                } else {
                    Err(AnalysisError::unsupported(node.kind(), node_line(node)))
                }
            }

            NodeKind::Identifier
            | NodeKind::Integer
            | NodeKind::Float
            | NodeKind::True
            | NodeKind::False
            | NodeKind::NoneLiteral
            | NodeKind::PassStatement
            | NodeKind::Comment => Ok(()),
        }
    }

    /// `self.x` records `x` and stops: in `self.x.y` the trailing `.y` is a
    /// read on the produced value, not on the receiver. Any other base is
    /// descended into, which is what captures `self.a().b`.
    fn visit_attribute(&mut self, node: &TSNode) -> Result<(), AnalysisError> {
        let object = match node.child_by_field_name("object") {
            Some(object) => object,
            None => return Ok(()),
        };

        if object.kind() == "identifier" && self.alias.contains(node_text(&object, self.source)) {
            if let Some(attr) = node.child_by_field_name("attribute") {
                self.uses.insert(node_text(&attr, self.source));
            }
            return Ok(());
        }

        self.visit(&object)
    }

    fn visit_call(&mut self, node: &TSNode) -> Result<(), AnalysisError> {
        if let Some(arguments) = node.child_by_field_name("arguments") {
            if arguments.kind() == "argument_list" {
                self.visit_named_children(&arguments)?;
            } else {
                // generator-expression argument: dispatch refuses it
                self.visit(&arguments)?;
            }
        }
        self.visit_field(node, "function")
    }

    /// `a[lo:hi:step]`: lower and upper bounds are reads, the step is a
    /// stride and is skipped. The grammar exposes no fields here, so the
    /// position relative to the `:` tokens decides which slot a child is in.
    fn visit_slice(&mut self, node: &TSNode) -> Result<(), AnalysisError> {
        let mut colons = 0;
        for i in 0..node.child_count() {
            let child = match node.child(i) {
                Some(child) => child,
                None => continue,
            };
            if child.kind() == ":" {
                colons += 1;
            } else if child.is_named() && colons < 2 {
                self.visit(&child)?;
            }
        }
        Ok(())
    }

    fn visit_field(&mut self, node: &TSNode, field: &str) -> Result<(), AnalysisError> {
        match node.child_by_field_name(field) {
            Some(child) => self.visit(&child),
            None => Ok(()),
        }
    }

    fn visit_named_children(&mut self, node: &TSNode) -> Result<(), AnalysisError> {
        let mut cursor = node.walk();
        let children: Vec<TSNode> = node.named_children(&mut cursor).collect();
        for child in children {
            self.visit(&child)?;
        }
        Ok(())
    }
}
