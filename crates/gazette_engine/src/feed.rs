use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use gazette_core::{Entry, IssueNumber};
use gazette_logging::gazette_info;
use rss::extension::dublincore::DublinCoreExtension;
use rss::{Channel, ChannelBuilder, GuidBuilder, ItemBuilder};

use crate::persist::{AtomicFileWriter, PersistError};

pub const FEED_TITLE: &str = "T.C. Resmî Gazete - Günlük İçerik";
pub const FEED_DESCRIPTION: &str = "Resmî Gazete'de bugün yayınlanan duyurular.";
pub const FEED_LANGUAGE: &str = "tr";

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("failed to render feed xml: {0}")]
    Render(#[from] rss::Error),
    #[error("failed to write feed file: {0}")]
    Write(#[from] PersistError),
}

/// Writes the feed document for one issue, fully replacing any prior one.
pub trait FeedEmitter: Send + Sync {
    fn emit(&self, issue: &IssueNumber, entries: &[Entry]) -> Result<PathBuf, EmitError>;
}

/// Injectable UTC clock so feed output is deterministic under test.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct RssFeedWriter {
    base_url: String,
    output_dir: PathBuf,
    filename: String,
    clock: Clock,
}

impl RssFeedWriter {
    pub fn new(
        base_url: impl Into<String>,
        output_dir: impl Into<PathBuf>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            output_dir: output_dir.into(),
            filename: filename.into(),
            clock: Arc::new(Utc::now),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn build_channel(
        &self,
        issue: &IssueNumber,
        entries: &[Entry],
        now: DateTime<Utc>,
    ) -> Channel {
        // Entries carry no publication time of their own; the convention is
        // today's date truncated to midnight UTC.
        let pub_date = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|t| t.and_utc())
            .unwrap_or(now)
            .to_rfc2822();

        let items = entries
            .iter()
            .map(|entry| {
                ItemBuilder::default()
                    .guid(Some(
                        GuidBuilder::default()
                            .value(entry.link.clone())
                            .permalink(true)
                            .build(),
                    ))
                    .title(Some(entry.title.clone()))
                    .link(Some(entry.link.clone()))
                    .description(Some(entry.title.clone()))
                    .pub_date(Some(pub_date.clone()))
                    .build()
            })
            .collect::<Vec<_>>();

        // Feed-level identifier ties the document to one (day, issue) pair,
        // making regeneration with the same inputs observably idempotent.
        let mut dublin_core = DublinCoreExtension::default();
        dublin_core.set_identifiers(vec![format!(
            "{}/{}/{}",
            self.base_url,
            now.format("%Y-%m-%d"),
            issue
        )]);

        ChannelBuilder::default()
            .title(FEED_TITLE)
            .link(self.base_url.clone())
            .description(FEED_DESCRIPTION)
            .language(Some(FEED_LANGUAGE.to_string()))
            .last_build_date(Some(now.to_rfc2822()))
            .dublin_core_ext(Some(dublin_core))
            .items(items)
            .build()
    }
}

impl FeedEmitter for RssFeedWriter {
    fn emit(&self, issue: &IssueNumber, entries: &[Entry]) -> Result<PathBuf, EmitError> {
        let now = (self.clock)();
        let channel = self.build_channel(issue, entries, now);
        let xml = channel.pretty_write_to(Vec::new(), b' ', 2)?;

        let writer = AtomicFileWriter::new(self.output_dir.clone());
        let path = writer.write(&self.filename, &xml)?;
        gazette_info!(
            "Feed for issue {} written with {} items to {:?}",
            issue,
            entries.len(),
            path
        );
        Ok(path)
    }
}
