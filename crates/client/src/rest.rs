//! The reqwest-backed content source for the Confluence REST v2 API.

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::Deserialize;

use confluence_tree::{ChildPage, ChildRef, ContentSource, NodeContent, SourceError};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::markdown::storage_to_markdown;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CHILD_PAGE_LIMIT: usize = 50;

/// `_links.next` carries the continuation token of the following page.
static NEXT_CURSOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?&]cursor=([^&]+)").unwrap());

/// [`ContentSource`] implementation over the Confluence REST v2 API.
///
/// Page bodies are requested in storage format and normalized to markdown
/// before they reach the tree layer.
pub struct RestContentSource {
    http: reqwest::Client,
    base_url: String,
    auth_header: String,
}

impl RestContentSource {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            auth_header: config.basic_auth_header(),
        })
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path_and_query: &str,
    ) -> std::result::Result<T, SourceError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        log::debug!("GET {url}");
        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, &self.auth_header)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;

        let status = response.status();
        match status {
            s if s.is_success() => response
                .json::<T>()
                .await
                .map_err(|err| SourceError::Api(format!("malformed response from {url}: {err}"))),
            StatusCode::NOT_FOUND => Err(SourceError::NotFound(url)),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(SourceError::Unauthorized(url))
            }
            s => Err(SourceError::Api(format!("{url} returned {s}"))),
        }
    }
}

#[async_trait]
impl ContentSource for RestContentSource {
    async fn fetch_node(&self, id: &str) -> std::result::Result<NodeContent, SourceError> {
        let page: PageResponse = self
            .get_json(&format!("/api/v2/pages/{id}?body-format=storage"))
            .await?;
        let storage = page
            .body
            .and_then(|body| body.storage)
            .map(|repr| repr.value)
            .unwrap_or_default();
        Ok(NodeContent {
            id: page.id,
            title: page.title,
            content: storage_to_markdown(&storage),
        })
    }

    async fn list_children(
        &self,
        id: &str,
        cursor: Option<&str>,
    ) -> std::result::Result<ChildPage, SourceError> {
        let mut path = format!("/api/v2/pages/{id}/children?limit={CHILD_PAGE_LIMIT}");
        if let Some(cursor) = cursor {
            path.push_str(&format!("&cursor={cursor}"));
        }
        let listing: ChildrenResponse = self.get_json(&path).await?;
        Ok(ChildPage {
            results: listing
                .results
                .into_iter()
                .map(|entry| ChildRef {
                    id: entry.id,
                    title: entry.title,
                })
                .collect(),
            next_cursor: listing.links.and_then(|links| extract_cursor(links.next.as_deref())),
        })
    }
}

fn extract_cursor(next_link: Option<&str>) -> Option<String> {
    let link = next_link?;
    NEXT_CURSOR
        .captures(link)
        .map(|captures| captures[1].to_string())
}

#[derive(Debug, Deserialize)]
struct PageResponse {
    id: String,
    title: String,
    body: Option<PageBody>,
}

#[derive(Debug, Deserialize)]
struct PageBody {
    storage: Option<BodyRepresentation>,
}

#[derive(Debug, Deserialize)]
struct BodyRepresentation {
    value: String,
}

#[derive(Debug, Deserialize)]
struct ChildrenResponse {
    results: Vec<ChildEntry>,
    #[serde(rename = "_links")]
    links: Option<Links>,
}

#[derive(Debug, Deserialize)]
struct ChildEntry {
    id: String,
    title: String,
}

#[derive(Debug, Deserialize)]
struct Links {
    next: Option<String>,
}
