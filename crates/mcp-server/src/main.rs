//! Confluence MCP Server
//!
//! Exposes Confluence page retrieval, recursive page trees, and unified
//! diffs to AI agents via the MCP protocol.
//!
//! ## Tools
//!
//! - `get_page` - read one page as markdown
//! - `get_page_tree` - read a page and its descendants as one document
//! - `diff_text` - unified diff between two texts, with statistics
//! - `compare_page` - diff a remote page (or tree) against local text
//!
//! ## Configuration
//!
//! The server reads `CONFLUENCE_BASE_URL`, `CONFLUENCE_EMAIL` and
//! `CONFLUENCE_API_TOKEN` at startup and refuses to start without them.
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "confluence": {
//!       "command": "confluence-mcp",
//!       "env": {
//!         "CONFLUENCE_BASE_URL": "https://your-site.atlassian.net/wiki",
//!         "CONFLUENCE_EMAIL": "you@example.com",
//!         "CONFLUENCE_API_TOKEN": "..."
//!       }
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod render;
mod tools;

use tools::ConfluenceService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting Confluence MCP server");

    let service = ConfluenceService::from_env()
        .context("invalid Confluence configuration, check CONFLUENCE_* environment variables")?;
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Confluence MCP server stopped");
    Ok(())
}
