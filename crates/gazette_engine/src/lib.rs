//! Gazette engine: page retrieval, extraction, feed emission, and persistence.
mod decode;
mod extract;
mod feed;
mod fetch;
mod persist;
mod run;
mod source;
mod state_store;

pub use decode::{decode_page, DecodeError, DecodedPage};
pub use extract::{ExtractError, ExtractedIssue, GazetteExtractor, IssueExtractor};
pub use feed::{
    Clock, EmitError, FeedEmitter, RssFeedWriter, FEED_DESCRIPTION, FEED_LANGUAGE, FEED_TITLE,
};
pub use fetch::{
    FailureKind, FetchError, FetchSettings, Fetcher, PageFetch, ProxySettings, ReqwestFetcher,
};
pub use persist::{AtomicFileWriter, PersistError};
pub use run::{apply_decision, RunSummary};
pub use source::GazetteSource;
pub use state_store::{JsonStateStore, StateError, StateStore};
