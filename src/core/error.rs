use thiserror::Error;

/// Failure modes of the dependency analysis.
///
/// Everything here is fatal: an incomplete dependency graph is worse than no
/// graph, so nothing is retried, wrapped, or downgraded to a warning.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The use collector met a syntax node outside its supported grammar.
    /// Skipping it could under-report a real dependency, so the walk stops.
    #[error("unsupported syntax `{kind}` at line {line}")]
    UnsupportedConstruct { kind: String, line: usize },

    /// No top-level class definition with the requested name was found,
    /// either on disk or in the parsed module.
    #[error("class `{0}` not found at module top level")]
    ClassNotFound(String),

    /// tree-sitter produced no tree or a tree containing syntax errors.
    #[error("parse failed: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    pub(crate) fn unsupported(kind: &str, line: usize) -> Self {
        AnalysisError::UnsupportedConstruct {
            kind: kind.to_string(),
            line,
        }
    }
}
