//! The content-source contract.

use async_trait::async_trait;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SourceError>;

/// Failure modes a content source must distinguish.
///
/// The tree fetcher treats them all identically (fatal at the root,
/// stubbed below it); the variants exist so callers see *why* a node
/// could not be fetched, never a silent empty result.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("page not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("api error: {0}")]
    Api(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// A fetched node: identity plus its rendered content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeContent {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// One entry of a child listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildRef {
    pub id: String,
    pub title: String,
}

/// One page of a child listing.
///
/// `next_cursor` is an opaque continuation token; `None` marks the final
/// page. An empty first page is valid and yields a leaf node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChildPage {
    pub results: Vec<ChildRef>,
    pub next_cursor: Option<String>,
}

/// Remote source of nodes and their ordered children.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetches a single node. Must fail with a distinguishable error when
    /// `id` does not exist or is not accessible.
    async fn fetch_node(&self, id: &str) -> Result<NodeContent>;

    /// Lists one page of `id`'s children, in source order.
    async fn list_children(&self, id: &str, cursor: Option<&str>) -> Result<ChildPage>;
}
