use std::fmt;

/// Identifier of one published gazette issue, as extracted from the page
/// title. Opaque token: compared by equality only, never ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueNumber(String);

impl IssueNumber {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IssueNumber {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// One announcement listed within an issue.
///
/// Invariants upheld by the extractor: `link` is absolute and `title` has
/// leading dash/bullet markers stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub link: String,
}

impl Entry {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// Classified result of one front-page check.
///
/// All fetch/decode/parse failures are folded into `Failed` upstream, so the
/// decision engine can branch exhaustively without touching I/O errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page could not be fetched, decoded, or parsed at all.
    Failed { reason: String },
    /// The title element was found but no issue-number token could be read
    /// from it.
    NoIssueNumber,
    /// An issue number was found but the index holds no entries yet.
    /// Typically the title goes up before the day's content does.
    EmptyIssue { issue: IssueNumber },
    /// A fully published issue: number plus entries in on-page order.
    Issue {
        issue: IssueNumber,
        entries: Vec<Entry>,
    },
}
