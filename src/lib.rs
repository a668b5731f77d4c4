//! # SELFDEPS
//!
//! Static self-attribute dependency extraction for Python compute classes.
//!
//! Given a class whose methods each compute one named value, selfdeps
//! determines, without executing any code, which methods' outputs are read
//! by which other methods, purely from `self.<name>` attribute accesses in
//! method bodies. Underscore-prefixed helper methods are resolved away
//! transitively, so the resulting edge list mentions only public names and a
//! caller can schedule evaluation of those outputs in a valid order.
//!
//! ## Pipeline
//!
//! - **locator** finds the file defining a named class
//! - **parser** turns it into a tree-sitter syntax tree
//! - **analyzer** classifies methods and collects their receiver reads
//! - **resolver** expands private-helper chains, cycle-safe
//!
//! The walk is deliberately partial: a construct outside the supported
//! grammar is a hard error, never a silently dropped dependency.
//!
//! ## Output Formats
//!
//! - **Text**: one `source -> target` line per edge
//! - **JSON**: compact node/edge arrays for programmatic consumption

pub mod core;
pub mod formatters;
pub mod parser;
