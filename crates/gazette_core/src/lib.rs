//! Gazette core: pure data model and change-detection decision engine.
mod decide;
mod state;
mod types;

pub use decide::{decide, Decision};
pub use state::RunState;
pub use types::{Entry, FetchOutcome, IssueNumber};
