//! Page locator parsing.
//!
//! Accepted forms:
//! - a bare numeric page id: `123456`
//! - a modern page URL: `https://site.atlassian.net/wiki/spaces/KEY/pages/123456/Slug`
//! - a legacy viewpage URL: `https://site/pages/viewpage.action?pageId=123456`

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ClientError, Result};

static PAGES_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"/pages/(\d+)(?:[/?#]|$)").unwrap());
static PAGE_ID_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?&]pageId=(\d+)").unwrap());

/// Extracts the numeric page id from a locator.
///
/// Malformed locators are input errors: reported immediately, never
/// retried or partially handled.
pub fn parse_page_locator(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(trimmed.to_string());
    }
    for pattern in [&*PAGE_ID_PARAM, &*PAGES_PATH] {
        if let Some(captures) = pattern.captures(trimmed) {
            return Ok(captures[1].to_string());
        }
    }
    Err(ClientError::InvalidLocator(input.to_string()))
}
