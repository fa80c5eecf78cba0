mod feed;
mod sessions;

pub use feed::{DecisionOutcome, FeedService};
pub use sessions::{SessionRegistry, SharedSession};
