use std::sync::LazyLock;

use gazette_core::{Entry, IssueNumber};
use regex_lite::Regex;
use scraper::{Html, Selector};
use url::Url;

// Markup contract of the portal front page: the masthead span carries the
// issue date and number, the index div one `fihrist-item` per announcement.
const TITLE_SELECTOR: &str = "span#spanGazeteTarih";
const INDEX_SELECTOR: &str = "div#html-content";
const ITEM_SELECTOR: &str = "div.fihrist-item";
const ANCHOR_SELECTOR: &str = "a[href]";

// The masthead reads like "30 Ağustos 2026 Pazar ve 33012 Sayılı Resmî Gazete".
static ISSUE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ve (\d+) Sayılı").expect("issue number pattern"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedIssue {
    pub issue: IssueNumber,
    /// Entries in on-page order; empty when the index div is missing or has
    /// no items yet.
    pub entries: Vec<Entry>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("gazette title element not found in page")]
    MissingTitle,
    #[error("no issue number token in title {title:?}")]
    IssueNumberUnparseable { title: String },
}

pub trait IssueExtractor: Send + Sync {
    fn extract(&self, html: &str, base_url: &Url) -> Result<ExtractedIssue, ExtractError>;
}

/// Extractor for the official-gazette front page markup.
#[derive(Debug, Default)]
pub struct GazetteExtractor;

impl IssueExtractor for GazetteExtractor {
    fn extract(&self, html: &str, base_url: &Url) -> Result<ExtractedIssue, ExtractError> {
        let doc = Html::parse_document(html);

        let title = doc
            .select(&selector(TITLE_SELECTOR))
            .next()
            .map(|node| node.text().collect::<String>().trim().to_string())
            .ok_or(ExtractError::MissingTitle)?;

        let issue = ISSUE_NUMBER
            .captures(&title)
            .and_then(|caps| caps.get(1))
            .map(|m| IssueNumber::new(m.as_str()))
            .ok_or(ExtractError::IssueNumberUnparseable { title })?;

        let mut entries = Vec::new();
        if let Some(index) = doc.select(&selector(INDEX_SELECTOR)).next() {
            for item in index.select(&selector(ITEM_SELECTOR)) {
                let Some(anchor) = item.select(&selector(ANCHOR_SELECTOR)).next() else {
                    continue;
                };
                let Some(href) = anchor.value().attr("href") else {
                    continue;
                };
                // Joining against the base both resolves relative hrefs and
                // passes absolute ones through unchanged.
                let Ok(link) = base_url.join(href) else {
                    continue;
                };
                let raw_title = anchor.text().collect::<String>();
                entries.push(Entry::new(clean_entry_title(&raw_title), link));
            }
        }

        Ok(ExtractedIssue { issue, entries })
    }
}

/// Strips the leading en/em-dash or hyphen bullet the index puts in front of
/// each announcement title.
fn clean_entry_title(raw: &str) -> String {
    raw.trim()
        .trim_start_matches(['–', '—', '-'])
        .trim_start()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_dash_variants_are_stripped() {
        assert_eq!(clean_entry_title("– Karar"), "Karar");
        assert_eq!(clean_entry_title("— Karar"), "Karar");
        assert_eq!(clean_entry_title("- Karar"), "Karar");
        assert_eq!(clean_entry_title("  –– Karar "), "Karar");
        assert_eq!(clean_entry_title("Karar"), "Karar");
    }

    #[test]
    fn interior_dashes_are_preserved() {
        assert_eq!(
            clean_entry_title("– Türkiye - AB Anlaşması"),
            "Türkiye - AB Anlaşması"
        );
    }
}
