//! HTTP page-title resolution.

use async_trait::async_trait;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

use crate::domain::TitleFetcher;
use crate::error::AppError;

/// Matches the first `<title>` element, case-insensitively, across lines.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());

/// Fetches page titles over HTTP with reqwest.
///
/// No retry and no timeout: a slow target stalls only the request that
/// submitted the link.
pub struct HttpTitleFetcher {
    client: reqwest::Client,
}

impl HttpTitleFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTitleFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TitleFetcher for HttpTitleFetcher {
    async fn fetch_title(&self, url: &str) -> Result<String, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                AppError::internal("Title request failed", json!({ "reason": e.to_string() }))
            })?;

        let body = response.text().await.map_err(|e| {
            AppError::internal("Title response unreadable", json!({ "reason": e.to_string() }))
        })?;

        extract_title(&body)
            .ok_or_else(|| AppError::not_found("Page carries no title element", json!({})))
    }
}

/// Pulls the trimmed text of the first `<title>` element, collapsing inner
/// whitespace. Returns `None` for documents without a non-empty title.
fn extract_title(html: &str) -> Option<String> {
    let captured = TITLE_RE.captures(html)?.get(1)?.as_str();
    let title = captured.split_whitespace().collect::<Vec<_>>().join(" ");

    if title.is_empty() { None } else { Some(title) }
}
