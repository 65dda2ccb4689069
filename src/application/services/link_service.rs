//! Link submission and resolution service.

use std::sync::Arc;

use serde_json::json;
use url::Url;

use crate::domain::TitleFetcher;
use crate::domain::entities::{Link, NewClick, NewLink};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Service for creating, listing, and resolving short links.
///
/// Submission is idempotent per URL; resolution logs a click and bumps the
/// visit counter before producing the redirect target.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    clicks: Arc<dyn ClickRepository>,
    titles: Arc<dyn TitleFetcher>,
}

impl LinkService {
    pub fn new(
        links: Arc<dyn LinkRepository>,
        clicks: Arc<dyn ClickRepository>,
        titles: Arc<dyn TitleFetcher>,
    ) -> Self {
        Self {
            links,
            clicks,
            titles,
        }
    }

    /// Handles an authenticated link submission.
    ///
    /// # Idempotence
    ///
    /// If the exact URL was already shortened, the existing link is returned
    /// and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the URL is not an absolute
    /// http(s) URL or the page title cannot be resolved; in both cases
    /// nothing is persisted. Returns [`AppError::Internal`] on database
    /// errors.
    pub async fn submit(
        &self,
        url: String,
        base_url: Option<String>,
        user_id: i64,
    ) -> Result<Link, AppError> {
        validate_url(&url)?;

        if let Some(existing) = self.links.find_by_url(&url).await? {
            return Ok(existing);
        }

        let title = match self.titles.fetch_title(&url).await {
            Ok(title) => title,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "failed to resolve page title");
                return Err(AppError::not_found(
                    "Unable to resolve page title",
                    json!({}),
                ));
            }
        };

        let code = self.generate_unique_code().await?;

        self.links
            .create(NewLink {
                code,
                url,
                title,
                base_url,
                user_id,
            })
            .await
    }

    /// Returns every link in insertion order, fetched fresh from persistence.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.links.list().await
    }

    /// Resolves a short code to its redirect target.
    ///
    /// Returns `Ok(None)` for unknown codes. For known codes the click row
    /// is confirmed before the counter update is issued, and the target is
    /// only returned once the update is confirmed. The two writes are
    /// independent operations, not a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, AppError> {
        let Some(link) = self.links.find_by_code(code).await? else {
            return Ok(None);
        };

        self.clicks.record(NewClick { link_id: link.id }).await?;
        self.links.increment_visits(&link.code).await?;

        Ok(Some(link.url))
    }

    /// Generates a short code not yet present in the repository.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.links.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

/// Requires an absolute http(s) URL.
fn validate_url(url: &str) -> Result<(), AppError> {
    let parsed = Url::parse(url).map_err(|e| {
        tracing::warn!(url = %url, error = %e, "rejected invalid url");
        AppError::not_found("Not a valid url", json!({}))
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        tracing::warn!(url = %url, scheme = %parsed.scheme(), "rejected non-http url");
        return Err(AppError::not_found("Not a valid url", json!({})));
    }

    Ok(())
}
