//! Contract for the external page-title resolution collaborator.

use crate::error::AppError;
use async_trait::async_trait;

/// Resolves the title of the page behind a URL.
///
/// This is a network call with no retry and no timeout; a slow target stalls
/// only the submitting request. Link creation is aborted when resolution
/// fails, so implementations should surface every failure as an error rather
/// than a placeholder title.
///
/// # Implementations
///
/// - [`crate::infrastructure::title::HttpTitleFetcher`] - reqwest-based implementation
/// - Test stubs in `tests/common` and `mockall` mocks under `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TitleFetcher: Send + Sync {
    /// Fetches the page at `url` and extracts its `<title>` text.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the response status is not
    /// successful, or the document carries no title element.
    async fn fetch_title(&self, url: &str) -> Result<String, AppError>;
}
