//! # Confluence Tree
//!
//! Recursive assembly of a page tree from a paginated content source.
//!
//! The [`ContentSource`] trait is the narrow seam to the remote API: fetch
//! one node, list one page of its children. [`fetch_tree`] drives it
//! recursively under a per-level concurrency cap, draining pagination
//! before fanning out so sibling order is deterministic, and stubbing out
//! any child whose subtree fails instead of aborting the traversal.

mod fetch;
mod source;

pub use fetch::{fetch_tree, FetchConfig, PageNode, DEFAULT_CONCURRENCY};
pub use source::{ChildPage, ChildRef, ContentSource, NodeContent, Result, SourceError};
