use gazette_core::{Decision, IssueNumber};
use gazette_logging::{gazette_error, gazette_info, gazette_warn};

use crate::feed::FeedEmitter;
use crate::state_store::StateStore;

/// What one run ended up doing, for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunSummary {
    /// Nothing was published and state was untouched.
    Skipped,
    /// Feed written. `state_saved` is false when persisting the marker
    /// failed; the issue may then be reprocessed once more next run.
    Published {
        issue: IssueNumber,
        state_saved: bool,
    },
    /// Feed write failed; the marker was left untouched so the next run
    /// retries the same issue.
    EmitFailed { issue: IssueNumber },
}

/// Executes a decision: emits the feed first, and persists the marker only
/// once emission succeeded. The ordering is what makes a failed run
/// self-correcting.
pub fn apply_decision(
    decision: Decision,
    emitter: &dyn FeedEmitter,
    store: &dyn StateStore,
) -> RunSummary {
    match decision {
        Decision::SkipFetchFailed { reason } => {
            gazette_warn!("Nothing to do, fetch failed: {}", reason);
            RunSummary::Skipped
        }
        Decision::SkipNoIssueNumber => {
            gazette_warn!("Current gazette number unknown; cannot compare against state");
            RunSummary::Skipped
        }
        Decision::SkipEmptyIssue { issue } => {
            gazette_info!(
                "Issue {} has no entries yet; state untouched, retrying next run",
                issue
            );
            RunSummary::Skipped
        }
        Decision::SkipUnchanged { issue } => {
            gazette_info!("Issue {} already processed; feed is current", issue);
            RunSummary::Skipped
        }
        Decision::Publish { issue, entries } => {
            if let Err(err) = emitter.emit(&issue, &entries) {
                gazette_error!("Feed write failed for issue {}: {}", issue, err);
                return RunSummary::EmitFailed { issue };
            }
            match store.save(&issue) {
                Ok(()) => {
                    gazette_info!("Recorded issue {} as processed", issue);
                    RunSummary::Published {
                        issue,
                        state_saved: true,
                    }
                }
                Err(err) => {
                    // The feed is already out; losing the marker only risks
                    // one extra reprocess next run.
                    gazette_warn!("Failed to persist processed issue {}: {}", issue, err);
                    RunSummary::Published {
                        issue,
                        state_saved: false,
                    }
                }
            }
        }
    }
}
