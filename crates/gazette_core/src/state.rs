use crate::IssueNumber;

/// The single fact carried between runs: the last issue number that was
/// successfully turned into a feed. `None` means first run, or a state file
/// that was missing or unreadable (treated identically).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunState {
    last_processed: Option<IssueNumber>,
}

impl RunState {
    pub fn new(last_processed: Option<IssueNumber>) -> Self {
        Self { last_processed }
    }

    pub fn last_processed(&self) -> Option<&IssueNumber> {
        self.last_processed.as_ref()
    }

    /// Advances the marker. Called at most once per run, only after the feed
    /// for `issue` was emitted.
    pub fn record_processed(&mut self, issue: IssueNumber) {
        self.last_processed = Some(issue);
    }
}
