use std::sync::Arc;

use futures::future::join_all;

use super::sessions::{SessionRegistry, SharedSession};
use crate::backend::SkillSwapBackend;
use crate::config::FeedConfig;
use crate::error::{Result, SkillSwapError};
use crate::feed::{build_candidates, classify_drag, Decision, FeedFilters, FeedSession, FeedSnapshot};
use crate::models::{pick_avatar, Candidate, SwipeDirection, UserId};

/// Result of a decision request: what was decided, if anything, and the
/// feed as it stands afterwards.
#[derive(Debug, Clone)]
pub struct DecisionOutcome {
    pub decision: Option<Decision>,
    pub session: FeedSession,
}

/// Builds candidate feeds from the backend and drives viewers' sessions.
#[derive(Clone)]
pub struct FeedService {
    backend: Arc<dyn SkillSwapBackend>,
    sessions: SessionRegistry,
    config: FeedConfig,
}

impl FeedService {
    pub fn new(backend: Arc<dyn SkillSwapBackend>, config: &FeedConfig) -> Self {
        Self {
            backend,
            sessions: SessionRegistry::new(config.session_capacity),
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Filters for a viewer who has not chosen any.
    pub fn default_filters(&self) -> FeedFilters {
        FeedFilters {
            max_distance_km: self.config.default_max_distance_km,
            ..FeedFilters::default()
        }
    }

    /// Fetch users, profiles and the viewer's swipes concurrently.
    ///
    /// Any failed fetch aborts the whole load.
    pub async fn load_snapshot(&self, user_id: UserId) -> Result<FeedSnapshot> {
        let (users, profiles, swipes) = tokio::try_join!(
            self.backend.list_users(),
            self.backend.list_profiles(),
            self.backend.list_swipes_by_user(user_id),
        )?;

        tracing::debug!(
            user_id,
            users = users.len(),
            profiles = profiles.len(),
            swipes = swipes.len(),
            "Loaded feed snapshot"
        );

        Ok(FeedSnapshot {
            users,
            profiles,
            swipes,
        })
    }

    /// Run the full candidate pipeline for `user_id`.
    pub async fn build_feed(&self, user_id: UserId, filters: &FeedFilters) -> Result<Vec<Candidate>> {
        let snapshot = self.load_snapshot(user_id).await?;
        let mut candidates = build_candidates(&snapshot, user_id, filters);
        if self.config.resolve_avatars {
            self.resolve_avatars(&mut candidates).await;
        }
        Ok(candidates)
    }

    /// Attach each candidate's avatar. Lookup failures leave `photo_url` unset.
    async fn resolve_avatars(&self, candidates: &mut [Candidate]) {
        let backend = &self.backend;
        let lookups = candidates.iter().map(|candidate| async move {
            let Some(profile_id) = candidate.profile_id() else {
                return None;
            };
            match backend.list_photos(profile_id).await {
                Ok(photos) => pick_avatar(&photos).map(str::to_owned),
                Err(error) => {
                    tracing::warn!(
                        candidate_id = candidate.id,
                        profile_id,
                        error = %error,
                        "Failed to fetch candidate photos"
                    );
                    None
                }
            }
        });

        let avatars = join_all(lookups).await;
        for (candidate, avatar) in candidates.iter_mut().zip(avatars) {
            candidate.photo_url = avatar;
        }
    }

    fn session(&self, user_id: UserId) -> Result<SharedSession> {
        self.sessions.get(user_id).ok_or_else(|| {
            SkillSwapError::NotFound(format!("No open feed for user {user_id}"))
        })
    }

    /// Build a fresh feed and make it the viewer's session, replacing any
    /// previous one. On failure the previous session is left in place.
    ///
    /// An existing session is rebuilt under its own lock, so a decision in
    /// flight lands before the new snapshot is taken.
    pub async fn open(&self, user_id: UserId, filters: FeedFilters) -> Result<FeedSession> {
        if let Some(shared) = self.sessions.get(user_id) {
            let mut session = shared.lock().await;
            *session = self.fresh_session(user_id, filters).await?;
            return Ok(session.clone());
        }

        let session = self.fresh_session(user_id, filters).await?;
        self.sessions.insert(session.clone());
        Ok(session)
    }

    async fn fresh_session(&self, user_id: UserId, filters: FeedFilters) -> Result<FeedSession> {
        let candidates = self.build_feed(user_id, &filters).await?;

        let mut session = FeedSession::new(user_id, filters, self.config.advance_policy);
        session.load(candidates);
        tracing::info!(
            user_id,
            candidates = session.remaining(),
            policy = %session.policy(),
            "Opened feed"
        );
        Ok(session)
    }

    pub async fn view(&self, user_id: UserId) -> Result<FeedSession> {
        let session = self.session(user_id)?;
        let session = session.lock().await;
        Ok(session.clone())
    }

    /// Apply new filters and rebuild the feed from index 0.
    ///
    /// The candidates are fetched before the session is touched; if the
    /// rebuild fails the previous feed and filters stay as they were.
    pub async fn set_filters(&self, user_id: UserId, filters: FeedFilters) -> Result<FeedSession> {
        let Some(shared) = self.sessions.get(user_id) else {
            return self.open(user_id, filters).await;
        };

        let mut session = shared.lock().await;
        let candidates = self
            .build_feed(user_id, &filters)
            .await
            .inspect_err(|error| {
                tracing::warn!(user_id, error = %error, "Feed rebuild failed, keeping previous feed");
            })?;
        session.reset(filters);
        session.load(candidates);
        tracing::info!(user_id, candidates = session.remaining(), "Feed filters changed");

        Ok(session.clone())
    }

    /// Like or pass on the viewer's current candidate.
    ///
    /// Without a current candidate nothing is recorded. A failed swipe leaves
    /// the session untouched.
    pub async fn decide(&self, user_id: UserId, direction: SwipeDirection) -> Result<DecisionOutcome> {
        let shared = self.session(user_id)?;
        let mut session = shared.lock().await;

        let backend = self.backend.clone();
        let decision = session
            .decide(direction, move |swipe| async move {
                backend.create_swipe(&swipe).await
            })
            .await
            .inspect_err(|error| {
                tracing::warn!(user_id, %direction, error = %error, "Swipe was not recorded");
            })?;

        match &decision {
            Some(decided) => tracing::info!(
                user_id,
                candidate_id = decided.candidate.id,
                %direction,
                "Recorded swipe"
            ),
            None => tracing::debug!(user_id, "No current candidate to decide on"),
        }

        Ok(DecisionOutcome {
            decision,
            session: session.clone(),
        })
    }

    /// Resolve a released drag into a decision. Drags that do not clear the
    /// threshold leave the session as it is.
    pub async fn release_drag(&self, user_id: UserId, drag_dx: f64) -> Result<DecisionOutcome> {
        match classify_drag(drag_dx, self.config.swipe_threshold) {
            Some(direction) => self.decide(user_id, direction).await,
            None => Ok(DecisionOutcome {
                decision: None,
                session: self.view(user_id).await?,
            }),
        }
    }

    pub fn close(&self, user_id: UserId) -> bool {
        self.sessions.remove(user_id)
    }

    /// Number of matches the viewer is part of.
    pub async fn match_count(&self, user_id: UserId) -> Result<usize> {
        let matches = self.backend.list_matches().await?;
        Ok(matches.iter().filter(|m| m.involves(user_id)).count())
    }
}
