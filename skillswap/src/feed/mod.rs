//! Candidate feed: filtering, distance scoring and the swipe state machine.

mod filter;
mod gesture;
mod session;

pub use filter::{build_candidates, FeedFilters, FeedSnapshot, YEAR_LABELS};
pub use gesture::{classify_drag, DEFAULT_SWIPE_THRESHOLD};
pub use session::{AdvancePolicy, Decision, FeedPhase, FeedSession, PendingDecision};
