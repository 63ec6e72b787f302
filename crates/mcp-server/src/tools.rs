//! MCP tools for Confluence page retrieval and diffing.

use std::sync::Arc;

use confluence_client::{parse_page_locator, ClientConfig, RestContentSource};
use confluence_diff::{diff, DiffOptions};
use confluence_tree::{fetch_tree, ContentSource, FetchConfig, DEFAULT_CONCURRENCY};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::render::render_tree;

const MAX_TREE_DEPTH: usize = 5;
const DEFAULT_TREE_DEPTH: usize = 3;
const MAX_CONCURRENCY: usize = 10;

/// Confluence MCP service.
#[derive(Clone)]
pub struct ConfluenceService {
    source: Arc<dyn ContentSource>,
    tool_router: ToolRouter<Self>,
}

impl ConfluenceService {
    /// Builds the service from `CONFLUENCE_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = ClientConfig::from_env()?;
        let source = RestContentSource::new(&config)?;
        Ok(Self::with_source(Arc::new(source)))
    }

    /// Builds the service around an explicit content source.
    pub fn with_source(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for ConfluenceService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Confluence access for AI agents. Use 'get_page' to read one page as markdown, \
                 'get_page_tree' to read a page with its descendants, 'diff_text' to compare two \
                 texts, and 'compare_page' to diff a remote page (or tree) against local text."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Tool Input/Output Schemas
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetPageRequest {
    /// Page locator
    #[schemars(description = "Numeric page id or Confluence page URL")]
    pub page: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetPageTreeRequest {
    /// Page locator for the root of the tree
    #[schemars(description = "Numeric page id or Confluence page URL")]
    pub page: String,

    /// Levels of children below the root (default: 3)
    #[schemars(description = "Levels of children to fetch (0-5)")]
    pub depth: Option<usize>,

    /// Concurrent child fetches per level (default: 5)
    #[schemars(description = "Concurrent child fetches per level (1-10)")]
    pub concurrency: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DiffTextRequest {
    /// Original text
    #[schemars(description = "Old version of the text")]
    pub old_text: String,

    /// Modified text
    #[schemars(description = "New version of the text")]
    pub new_text: String,

    /// Unchanged lines kept around each change (default: 3)
    #[schemars(description = "Context lines per hunk")]
    pub context_lines: Option<usize>,

    /// Label for the old side (default: a/original)
    #[schemars(description = "Label for the --- header")]
    pub old_label: Option<String>,

    /// Label for the new side (default: b/modified)
    #[schemars(description = "Label for the +++ header")]
    pub new_label: Option<String>,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct DiffTextResult {
    /// Unified diff, or the no-differences sentinel
    pub diff: String,
    pub additions: usize,
    pub deletions: usize,
    /// Always additions + deletions
    pub changes: usize,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComparePageRequest {
    /// Page locator for the remote side
    #[schemars(description = "Numeric page id or Confluence page URL")]
    pub page: String,

    /// Local text to compare against
    #[schemars(description = "Local version of the content")]
    pub local_text: String,

    /// Tree depth; 0 compares the single page (default: 0)
    #[schemars(description = "Levels of children to include (0-5)")]
    pub depth: Option<usize>,

    /// Unchanged lines kept around each change (default: 3)
    #[schemars(description = "Context lines per hunk")]
    pub context_lines: Option<usize>,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct ComparePageResult {
    pub page_id: String,
    pub diff: String,
    pub additions: usize,
    pub deletions: usize,
    pub changes: usize,
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl ConfluenceService {
    /// Read a single page as markdown
    #[tool(description = "Read one Confluence page and return its content as markdown.")]
    pub async fn get_page(
        &self,
        Parameters(request): Parameters<GetPageRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = match parse_page_locator(&request.page) {
            Ok(id) => id,
            Err(e) => return Ok(CallToolResult::error(vec![Content::text(format!("Error: {e}"))])),
        };

        match self.source.fetch_node(&id).await {
            Ok(node) => Ok(CallToolResult::success(vec![Content::text(format!(
                "# {}\n\n{}",
                node.title, node.content
            ))])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!("Error: {e}"))])),
        }
    }

    /// Read a page and its descendants as one markdown document
    #[tool(description = "Read a Confluence page and its descendants as one markdown document. Children keep source order; a failed subtree appears as an [error: ...] marker instead of aborting the fetch.")]
    pub async fn get_page_tree(
        &self,
        Parameters(request): Parameters<GetPageTreeRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = match parse_page_locator(&request.page) {
            Ok(id) => id,
            Err(e) => return Ok(CallToolResult::error(vec![Content::text(format!("Error: {e}"))])),
        };
        let depth = request.depth.unwrap_or(DEFAULT_TREE_DEPTH).min(MAX_TREE_DEPTH);
        let concurrency = request
            .concurrency
            .unwrap_or(DEFAULT_CONCURRENCY)
            .clamp(1, MAX_CONCURRENCY);

        match fetch_tree(self.source.as_ref(), &id, &FetchConfig::new(depth, concurrency)).await {
            Ok(tree) => Ok(CallToolResult::success(vec![Content::text(render_tree(&tree))])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!("Error: {e}"))])),
        }
    }

    /// Unified diff of two texts
    #[tool(description = "Compute a git-style unified diff between two texts, with change statistics.")]
    pub async fn diff_text(
        &self,
        Parameters(request): Parameters<DiffTextRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut options = DiffOptions::default()
            .with_context_lines(request.context_lines.unwrap_or(3));
        if let Some(old_label) = request.old_label {
            options.old_label = old_label;
        }
        if let Some(new_label) = request.new_label {
            options.new_label = new_label;
        }

        let (text, result) = diff(request.old_text.trim(), request.new_text.trim(), &options);
        let output = DiffTextResult {
            diff: text,
            additions: result.additions,
            deletions: result.deletions,
            changes: result.changes(),
        };
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&output).unwrap_or_default(),
        )]))
    }

    /// Diff a remote page (or tree) against local text
    #[tool(description = "Fetch a Confluence page (or, with depth > 0, the page and its descendants) and diff the remote markdown against a local text.")]
    pub async fn compare_page(
        &self,
        Parameters(request): Parameters<ComparePageRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = match parse_page_locator(&request.page) {
            Ok(id) => id,
            Err(e) => return Ok(CallToolResult::error(vec![Content::text(format!("Error: {e}"))])),
        };
        let depth = request.depth.unwrap_or(0).min(MAX_TREE_DEPTH);

        let remote = if depth == 0 {
            match self.source.fetch_node(&id).await {
                Ok(node) => node.content,
                Err(e) => {
                    return Ok(CallToolResult::error(vec![Content::text(format!("Error: {e}"))]))
                }
            }
        } else {
            let config = FetchConfig::new(depth, DEFAULT_CONCURRENCY);
            match fetch_tree(self.source.as_ref(), &id, &config).await {
                Ok(tree) => render_tree(&tree),
                Err(e) => {
                    return Ok(CallToolResult::error(vec![Content::text(format!("Error: {e}"))]))
                }
            }
        };

        let options = DiffOptions::default()
            .with_context_lines(request.context_lines.unwrap_or(3))
            .with_labels(format!("a/{id} (remote)"), "b/local");
        let (text, result) = diff(remote.trim(), request.local_text.trim(), &options);

        let output = ComparePageResult {
            page_id: id,
            diff: text,
            additions: result.additions,
            deletions: result.deletions,
            changes: result.changes(),
        };
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&output).unwrap_or_default(),
        )]))
    }
}
