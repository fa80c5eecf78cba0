use std::fmt;
use std::future::Future;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::FeedFilters;
use crate::error::Result;
use crate::models::{Candidate, NewSwipe, Swipe, SwipeDirection, UserId};

/// What happens to the candidate list after a recorded decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdvancePolicy {
    /// Drop the decided candidate; the next one moves into its slot.
    #[default]
    RemoveAndReset,
    /// Keep the list and step the pointer forward.
    Increment,
}

impl FromStr for AdvancePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remove_and_reset" | "remove" => Ok(Self::RemoveAndReset),
            "increment" => Ok(Self::Increment),
            other => Err(format!(
                "unknown advance policy '{other}' (expected remove_and_reset or increment)"
            )),
        }
    }
}

impl fmt::Display for AdvancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemoveAndReset => write!(f, "remove_and_reset"),
            Self::Increment => write!(f, "increment"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeedPhase {
    Loading,
    Ready,
    Exhausted,
}

#[derive(Debug, Clone)]
enum State {
    Loading,
    Loaded {
        candidates: Vec<Candidate>,
        index: usize,
    },
}

/// A decision that has been taken but not yet recorded by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDecision {
    pub swipe: NewSwipe,
    pub direction: SwipeDirection,
    pub candidate_id: UserId,
    index: usize,
}

/// A recorded decision.
#[derive(Debug, Clone)]
pub struct Decision {
    pub candidate: Candidate,
    pub direction: SwipeDirection,
    pub recorded: Swipe,
}

/// One viewer's swipe feed.
///
/// `Loading` until candidates arrive, then `Ready` while the pointer is in
/// range and `Exhausted` once it runs off the end.
#[derive(Debug, Clone)]
pub struct FeedSession {
    user_id: UserId,
    filters: FeedFilters,
    policy: AdvancePolicy,
    state: State,
}

impl FeedSession {
    pub fn new(user_id: UserId, filters: FeedFilters, policy: AdvancePolicy) -> Self {
        Self {
            user_id,
            filters,
            policy,
            state: State::Loading,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn filters(&self) -> &FeedFilters {
        &self.filters
    }

    pub fn policy(&self) -> AdvancePolicy {
        self.policy
    }

    /// Install a freshly built candidate list and point at its head.
    pub fn load(&mut self, candidates: Vec<Candidate>) {
        self.state = State::Loaded {
            candidates,
            index: 0,
        };
    }

    /// Replace the filters. The list is discarded and must be rebuilt.
    pub fn reset(&mut self, filters: FeedFilters) {
        self.filters = filters;
        self.state = State::Loading;
    }

    pub fn phase(&self) -> FeedPhase {
        match &self.state {
            State::Loading => FeedPhase::Loading,
            State::Loaded { candidates, index } if *index < candidates.len() => FeedPhase::Ready,
            State::Loaded { .. } => FeedPhase::Exhausted,
        }
    }

    pub fn index(&self) -> usize {
        match &self.state {
            State::Loading => 0,
            State::Loaded { index, .. } => *index,
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        match &self.state {
            State::Loading => &[],
            State::Loaded { candidates, .. } => candidates,
        }
    }

    pub fn current(&self) -> Option<&Candidate> {
        match &self.state {
            State::Loading => None,
            State::Loaded { candidates, index } => candidates.get(*index),
        }
    }

    /// Candidates not yet shown, the current one included.
    pub fn remaining(&self) -> usize {
        self.candidates().len().saturating_sub(self.index())
    }

    /// Prepare the swipe for the current candidate. `None` unless `Ready`.
    pub fn begin_decision(&self, direction: SwipeDirection) -> Option<PendingDecision> {
        let candidate = self.current()?;
        Some(PendingDecision {
            swipe: NewSwipe::new(self.user_id, candidate.id, direction),
            direction,
            candidate_id: candidate.id,
            index: self.index(),
        })
    }

    /// Apply a decision the backend has accepted.
    ///
    /// Returns the decided candidate, or `None` if the session moved on since
    /// `begin_decision` (reset or reloaded), in which case nothing changes.
    pub fn commit_decision(&mut self, pending: &PendingDecision) -> Option<Candidate> {
        let policy = self.policy;
        let State::Loaded { candidates, index } = &mut self.state else {
            return None;
        };
        if *index != pending.index
            || candidates.get(*index).map(|c| c.id) != Some(pending.candidate_id)
        {
            return None;
        }

        match policy {
            AdvancePolicy::RemoveAndReset => Some(candidates.remove(*index)),
            AdvancePolicy::Increment => {
                let decided = candidates[*index].clone();
                *index += 1;
                Some(decided)
            }
        }
    }

    /// Decide on the current candidate, recording the swipe through `record`.
    ///
    /// A no-op returning `Ok(None)` when not `Ready`. When `record` fails the
    /// session is unchanged and the same candidate stays current.
    pub async fn decide<F, Fut>(
        &mut self,
        direction: SwipeDirection,
        record: F,
    ) -> Result<Option<Decision>>
    where
        F: FnOnce(NewSwipe) -> Fut,
        Fut: Future<Output = Result<Swipe>>,
    {
        let Some(pending) = self.begin_decision(direction) else {
            return Ok(None);
        };
        pending.swipe.validate()?;

        let recorded = record(pending.swipe).await?;

        Ok(self.commit_decision(&pending).map(|candidate| Decision {
            candidate,
            direction,
            recorded,
        }))
    }
}
