use gazette_core::FetchOutcome;
use gazette_logging::{gazette_debug, gazette_info, gazette_warn};
use url::Url;

use crate::decode::decode_page;
use crate::extract::{ExtractError, IssueExtractor};
use crate::fetch::Fetcher;

/// One gazette front page: fetches it, decodes it, extracts the issue, and
/// classifies the result for the decision engine.
pub struct GazetteSource {
    base_url: Url,
    fetcher: Box<dyn Fetcher>,
    extractor: Box<dyn IssueExtractor>,
}

impl GazetteSource {
    pub fn new(base_url: Url, fetcher: Box<dyn Fetcher>, extractor: Box<dyn IssueExtractor>) -> Self {
        Self {
            base_url,
            fetcher,
            extractor,
        }
    }

    /// Runs one check. Never returns an error: every failure mode is folded
    /// into a `FetchOutcome` variant so the caller can branch exhaustively.
    pub async fn check(&self) -> FetchOutcome {
        gazette_info!("Fetching front page {}", self.base_url);
        let page = match self.fetcher.fetch(self.base_url.as_str()).await {
            Ok(page) => page,
            Err(err) => {
                gazette_warn!("Fetch failed: {}", err);
                return FetchOutcome::Failed {
                    reason: err.to_string(),
                };
            }
        };
        gazette_debug!("Fetched {} bytes from {}", page.bytes.len(), page.final_url);

        let decoded = match decode_page(&page.bytes, page.content_type.as_deref()) {
            Ok(decoded) => decoded,
            Err(err) => {
                gazette_warn!("Decode failed: {}", err);
                return FetchOutcome::Failed {
                    reason: err.to_string(),
                };
            }
        };
        gazette_debug!("Decoded page as {}", decoded.encoding);

        match self.extractor.extract(&decoded.html, &self.base_url) {
            Ok(extracted) if extracted.entries.is_empty() => {
                gazette_info!(
                    "Issue {} found but the index holds no entries yet",
                    extracted.issue
                );
                FetchOutcome::EmptyIssue {
                    issue: extracted.issue,
                }
            }
            Ok(extracted) => {
                gazette_info!(
                    "Extracted {} entries for issue {}",
                    extracted.entries.len(),
                    extracted.issue
                );
                FetchOutcome::Issue {
                    issue: extracted.issue,
                    entries: extracted.entries,
                }
            }
            Err(ExtractError::IssueNumberUnparseable { title }) => {
                gazette_warn!("Could not read an issue number from title {:?}", title);
                FetchOutcome::NoIssueNumber
            }
            Err(err @ ExtractError::MissingTitle) => {
                gazette_warn!("Page structure not recognized: {}", err);
                FetchOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}
