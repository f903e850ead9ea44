use crate::domain::{PageStats, StatsError, StatsResult};
use crate::error::AppError;
use crate::infrastructure::{extract_stats, PageFetcher, Selectors};
use reqwest::{StatusCode, Url};
use scraper::Html;

/// Turns one profile link into its stats. Never fails: every problem ends up
/// as a sentinel in the result.
pub struct ExtractionService<F> {
    fetcher: F,
    selectors: Selectors,
}

impl<F: PageFetcher> ExtractionService<F> {
    pub fn new(fetcher: F, selectors: Selectors) -> Self {
        Self { fetcher, selectors }
    }

    pub async fn extract(&self, link: Option<&str>) -> StatsResult {
        self.try_extract(link).await.into()
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }

    async fn try_extract(&self, link: Option<&str>) -> Result<PageStats, StatsError> {
        let url = parse_link(link).ok_or(StatsError::InvalidLink)?;

        let page = self
            .fetcher
            .fetch(&url)
            .await
            .map_err(failure_message)?;
        if page.status != StatusCode::OK.as_u16() {
            return Err(StatsError::HttpError(page.status));
        }

        let document = Html::parse_document(&page.body);
        Ok(extract_stats(&document, &self.selectors))
    }
}

/// An absolute http(s) URL, or nothing. The cell text itself must start
/// with the scheme; no trimming or case folding.
pub fn parse_link(link: Option<&str>) -> Option<Url> {
    let link = link?;
    if !link.starts_with("http://") && !link.starts_with("https://") {
        return None;
    }
    Url::parse(link).ok()
}

/// The underlying error text, without the `AppError` prefix.
fn failure_message(err: AppError) -> StatsError {
    let message = match err {
        AppError::Network(e) => e.to_string(),
        other => other.to_string(),
    };
    StatsError::GenericError(message)
}
