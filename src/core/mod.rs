pub mod analyzer;
pub mod collector;
pub mod error;
pub mod extractor;
pub mod graph;
pub mod locator;
pub mod resolver;

pub use analyzer::ClassAnalyzer;
pub use collector::{SelfAlias, UseCollector, UseSet};
pub use error::AnalysisError;
pub use extractor::DependencyGraphExtractor;
pub use graph::{DependencyGraph, Edge, GraphBuilder};
pub use locator::{FileSystemLocator, LocatedSource, SourceLocator};
pub use resolver::{is_private, IndirectionResolver};
