//! # Confluence Client
//!
//! Adapter glue between the tree fetcher and the Confluence REST v2 API:
//! environment-driven configuration, page-locator parsing, Basic-auth
//! construction, cursor pagination, and best-effort storage-format to
//! markdown normalization.

mod config;
mod error;
mod locator;
mod markdown;
mod rest;

pub use config::{ClientConfig, ENV_API_TOKEN, ENV_BASE_URL, ENV_EMAIL};
pub use error::{ClientError, Result};
pub use locator::parse_page_locator;
pub use markdown::storage_to_markdown;
pub use rest::RestContentSource;
