//! Recursive tree assembly with bounded per-level fan-out.

use futures::future::BoxFuture;
use futures::stream::{self, StreamExt};
use serde::Serialize;

use crate::source::{ChildRef, ContentSource, Result, SourceError};

/// Default number of in-flight child fetches per fan-out.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// One node of an assembled tree. Children are value-owned and appear in
/// source listing order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageNode {
    pub id: String,
    pub title: String,
    pub content: String,
    pub children: Vec<PageNode>,
}

impl PageNode {
    /// Total number of nodes in this subtree, the root included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(PageNode::node_count).sum::<usize>()
    }
}

/// Bounds for one [`fetch_tree`] call. Immutable for its duration.
#[derive(Clone, Copy, Debug)]
pub struct FetchConfig {
    /// Levels of children fetched below the root; 0 fetches the root only.
    pub depth: usize,
    /// In-flight child fetches per fan-out, clamped to at least 1.
    pub concurrency: usize,
}

impl FetchConfig {
    pub fn new(depth: usize, concurrency: usize) -> Self {
        Self {
            depth,
            concurrency: concurrency.max(1),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new(3, DEFAULT_CONCURRENCY)
    }
}

/// Recursively fetches the tree rooted at `root_id`.
///
/// Fails only if the root's own fetch (content or child listing) fails.
/// Below the root every failure is caught at the failing child's slot and
/// replaced with a stub node carrying `[error: <message>]` as content, so
/// the caller always gets the full tree shape.
///
/// The concurrency cap is local to each fan-out: every level bounds its
/// own in-flight fetches, independent of sibling subtrees.
pub async fn fetch_tree(
    source: &dyn ContentSource,
    root_id: &str,
    config: &FetchConfig,
) -> Result<PageNode> {
    fetch_subtree(source, root_id, config.depth, config.concurrency.max(1)).await
}

fn fetch_subtree<'a>(
    source: &'a dyn ContentSource,
    id: &'a str,
    depth: usize,
    concurrency: usize,
) -> BoxFuture<'a, Result<PageNode>> {
    Box::pin(async move {
        let content = source.fetch_node(id).await?;
        let mut node = PageNode {
            id: content.id,
            title: content.title,
            content: content.content,
            children: Vec::new(),
        };

        // Depth exhausted: leaf regardless of what the source holds.
        if depth == 0 {
            return Ok(node);
        }

        // Pagination fully resolves before any child fetch starts, so
        // sibling order never depends on completion order.
        let refs = drain_children(source, id).await?;
        if refs.is_empty() {
            return Ok(node);
        }

        log::debug!("fetching {} children of {} (depth {})", refs.len(), id, depth);
        let workers = concurrency.min(refs.len());
        node.children = stream::iter(refs.into_iter().map(|child| async move {
            let fetched = fetch_subtree(source, &child.id, depth - 1, concurrency).await;
            match fetched {
                Ok(subtree) => subtree,
                Err(err) => {
                    log::warn!("subtree {} failed, stubbing: {err}", child.id);
                    stub_node(child, &err)
                }
            }
        }))
        .buffered(workers)
        .collect()
        .await;

        Ok(node)
    })
}

/// Follows the continuation token until the listing is exhausted.
async fn drain_children(source: &dyn ContentSource, id: &str) -> Result<Vec<ChildRef>> {
    let mut refs = Vec::new();
    let mut cursor: Option<String> = None;
    loop {
        let page = source.list_children(id, cursor.as_deref()).await?;
        refs.extend(page.results);
        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => return Ok(refs),
        }
    }
}

fn stub_node(child: ChildRef, err: &SourceError) -> PageNode {
    PageNode {
        id: child.id,
        title: child.title,
        content: format!("[error: {err}]"),
        children: Vec::new(),
    }
}
